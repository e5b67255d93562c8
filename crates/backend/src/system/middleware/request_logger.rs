use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог: метод, путь, статус, длительность и размер ответа.
/// Ответы с ошибкой уходят уровнем `warn`.
pub async fn request_logger(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{} {} -> {} | {}ms | body read failed: {}",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::empty());
        }
    };

    let elapsed = start.elapsed().as_millis();
    let size = format_size(bytes.len());
    if parts.status.is_success() {
        tracing::info!(
            "{} {} -> {} | {}ms | {}",
            method,
            path,
            parts.status.as_u16(),
            elapsed,
            size
        );
    } else {
        tracing::warn!(
            "{} {} -> {} | {}ms | {}",
            method,
            path,
            parts.status.as_u16(),
            elapsed,
            size
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
