//! Per-request access log.

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Logs one line per request and tags it with a request id.
///
/// The id is taken from an incoming `x-request-id` header when present,
/// otherwise a fresh UUID is generated. Either way it is echoed back on the
/// response.
///
/// ```text
/// INFO HTTP GET /api/users?page=2 => 200 (3 ms) request_id=6f1c... ip=127.0.0.1
/// ```
///
/// Handlers run inside an `access` span carrying the request id, so their
/// events can be correlated with this line. Requests rejected before this
/// layer (failed authentication) get neither a log line nor an id.
///
/// The peer address is read from `ConnectInfo` when the server was started
/// with connect info, and logged as `-` otherwise.
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let method = req.method().to_string();
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = tracing::info_span!("access", %request_id);
    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    span.in_scope(|| tracing::info!(ip = %ip, "HTTP {method} {path} => {status} ({ms} ms)"));

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
