use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::config::LatencyConfig;

/// Имитация сетевой задержки перед обработкой API-запроса
///
/// Задержка выдерживается до захвата блокировки базы и на порядок
/// выполнения операций не влияет.
pub async fn simulate_latency(
    State(latency): State<LatencyConfig>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(delay) = latency.sample() {
        tokio::time::sleep(delay).await;
    }
    next.run(req).await
}
