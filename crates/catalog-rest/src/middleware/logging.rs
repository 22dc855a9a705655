//! Request timing middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Logs method, path, status and elapsed time of every request.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();

    info!(
        target: "http",
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = %duration_ms,
        "[{}] {} - {} ms",
        method,
        path,
        duration_ms
    );

    response
}
