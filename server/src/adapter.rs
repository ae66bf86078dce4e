//! Conversion between hyper's request/response types and the router's.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Request, Response, StatusCode};
use serde_json::json;
use signpost::api::*;
use signpost::response::serialize_response_body;

/// Reads the method and raw request URI (path plus query) from `req`.
pub fn descriptor<B>(req: &Request<B>) -> RequestDescriptor {
    let raw_path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());
    RequestDescriptor::new(req.method().as_str(), raw_path)
}

/// Dispatches `req` and renders the result. Dispatch errors become a 500.
pub fn respond<B>(req: &Request<B>, router: &Router) -> Response<Full<Bytes>> {
    let request = descriptor(req);
    match router.handle(&request) {
        Ok(response) => {
            log::info!(
                "{} {} -> {}",
                request.method,
                request.raw_path,
                response.status_code
            );
            into_hyper(response)
        }
        Err(err) => {
            log::error!(
                "dispatch failed for {} {}: {}",
                request.method,
                request.raw_path,
                err
            );
            error_response(&err)
        }
    }
}

pub fn into_hyper(response: HttpResponse) -> Response<Full<Bytes>> {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serialize_response_body(&response.body);

    let mut out = Response::new(Full::new(Bytes::from(body)));
    *out.status_mut() = status;
    for (name, value) in &response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                out.headers_mut().insert(name, value);
            }
            _ => log::warn!("dropping invalid response header '{}'", name),
        }
    }
    out
}

pub fn error_response(err: &RouterError) -> Response<Full<Bytes>> {
    let body = json!({
        "detail": "Internal Server Error",
        "code": err.code(),
    });
    into_hyper(HttpResponse::with_body(
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        ResponseBody::Json(body),
    ))
}
