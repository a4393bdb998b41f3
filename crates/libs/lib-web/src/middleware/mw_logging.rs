//! # Access Logging Middleware
//!
//! One line per request with method, path, status and latency. Level follows the
//! status class: `info` for success and redirects, `warn` for 4xx, `error` for 5xx.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

use super::mw_req_stamp::RequestStamp;

pub async fn log_requests(req: Request, next: Next) -> Response {
    let stamp = req.extensions().get::<RequestStamp>().cloned();
    let start = stamp.as_ref().map(|s| s.received_at).unwrap_or_else(Instant::now);
    let request_id = stamp.map(|s| s.id).unwrap_or_else(|| "unknown".to_string());

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();
    let status_code = status.as_u16();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms)",
            method, path, status_code, duration_ms
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms,
            user_agent = ?user_agent,
            "[RESPONSE] {} {} -> {} ({}ms)",
            method, path, status_code, duration_ms
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms)",
            method, path, status_code, duration_ms
        );
    }

    response
}
