use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::shared::format::format_number;

/// Middleware that logs each HTTP request:
/// - request id
/// - duration (ms)
/// - response size (thousands separated)
/// - status code
/// - method and path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                %request_id,
                "{} {} -> {} | {}ms | body error: {}",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let duration = start.elapsed().as_millis();
    let size = format_number(bytes.len());
    if parts.status.is_success() {
        tracing::info!(
            %request_id,
            "{} {} -> {} | {}ms | {} bytes",
            method,
            path,
            parts.status.as_u16(),
            duration,
            size
        );
    } else {
        tracing::warn!(
            %request_id,
            "{} {} -> {} | {}ms | {} bytes",
            method,
            path,
            parts.status.as_u16(),
            duration,
            size
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
