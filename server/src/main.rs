mod adapter;
mod app;
mod config;

use crate::config::ServerConfig;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use hyper_util::server::graceful::GracefulShutdown;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// How long open connections get to finish after Ctrl-C.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let router = Arc::new(app::build_router(config.router.clone())?);

    let listener = TcpListener::bind(config.addr).await?;
    log::info!(
        "listening on http://{} with {} routes (base path '{}')",
        config.addr,
        router.len(),
        router.base_path()
    );

    let builder = Builder::new(TokioExecutor::new());
    let graceful = GracefulShutdown::new();
    let mut ctrl_c = std::pin::pin!(tokio::signal::ctrl_c());

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                log::info!("shutdown requested");
                break;
            }
            accept = listener.accept() => {
                let (stream, peer) = match accept {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        log::warn!("accept error: {}", err);
                        continue;
                    }
                };
                let router = Arc::clone(&router);
                let service = service_fn(move |req: Request<Incoming>| {
                    let router = Arc::clone(&router);
                    async move { Ok::<_, Infallible>(adapter::respond(&req, &router)) }
                });
                let connection = builder
                    .serve_connection(TokioIo::new(stream), service)
                    .into_owned();
                let connection = graceful.watch(connection);
                tokio::spawn(async move {
                    if let Err(err) = connection.await {
                        log::warn!("connection error from {}: {}", peer, err);
                    }
                });
            }
        }
    }

    drop(listener);
    tokio::select! {
        _ = graceful.shutdown() => log::info!("all connections closed"),
        _ = tokio::time::sleep(SHUTDOWN_GRACE) => {
            log::warn!("gave up waiting for connections after {:?}", SHUTDOWN_GRACE);
        }
    }
    Ok(())
}
