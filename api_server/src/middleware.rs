// Request logging for the API server

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Logs method, path, status and latency under a per-request id
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    debug!("➡️  [{}] {} {}", request_id, method, path);

    let response = next.run(request).await;

    info!(
        "[{}] {} {} → {} ({}ms)",
        request_id,
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );

    response
}
