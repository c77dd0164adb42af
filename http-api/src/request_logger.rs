//! Request logging middleware for the HTTP API
//!
//! Emits a single structured log line per handled request with timing.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log method, path, response status, and elapsed time for every request.
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Request handled"
    );

    response
}
