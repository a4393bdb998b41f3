//! # Request Stamping Middleware
//!
//! Tags every request with an ID and arrival time so access log lines and trace
//! spans can be correlated. The ID is echoed back in `X-Request-ID`.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request metadata attached as an extension.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    pub id: String,
    pub received_at: Instant,
}

impl RequestStamp {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            received_at: Instant::now(),
        }
    }
}

/// Insert a [`RequestStamp`] and mirror its ID onto the response.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::new();
    let id = stamp.id.clone();
    req.extensions_mut().insert(stamp);

    let mut res = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}
