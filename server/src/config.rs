use signpost::config::{RouterConfig, BASE_PATH_ENV};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_ENV: &str = "SIGNPOST_ADDR";
pub const CONFIG_ENV: &str = "SIGNPOST_CONFIG";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub router: RouterConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SIGNPOST_ADDR '{value}': {source}")]
    Addr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid router config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ServerConfig {
    /// Reads `SIGNPOST_ADDR`, the optional JSON file named by
    /// `SIGNPOST_CONFIG`, then `SIGNPOST_BASE_PATH`, which wins over the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr_value = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::Addr {
                value: addr_value.clone(),
                source,
            })?;

        let mut router = match std::env::var_os(CONFIG_ENV) {
            Some(path) => load_router_config(PathBuf::from(path))?,
            None => RouterConfig::default(),
        };
        if std::env::var_os(BASE_PATH_ENV).is_some() {
            router = RouterConfig::from_env();
        }

        Ok(Self { addr, router })
    }
}

fn load_router_config(path: PathBuf) -> Result<RouterConfig, ConfigError> {
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    RouterConfig::from_json(&contents).map_err(|source| ConfigError::Parse { path, source })
}
