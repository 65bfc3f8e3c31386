use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов: метод, путь, статус, длительность
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    if response.status().is_success() {
        tracing::info!(%method, %path, status, elapsed_ms, "request");
    } else {
        tracing::warn!(%method, %path, status, elapsed_ms, "request");
    }

    response
}
