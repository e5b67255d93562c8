use axum::extract::State;
use axum::Json;
use contracts::shared::logger::{ApiLog, CreateApiLogRequest};

use super::{respond, Reply};
use crate::shared::logger;
use crate::shared::state::AppState;

/// GET /api/logs
pub async fn list_all(State(state): State<AppState>) -> Reply<Vec<ApiLog>> {
    respond(Ok(state.journal.list().await), "API 로그를 조회했습니다.")
}

/// POST /api/logs
///
/// Событие, зафиксированное на клиенте (например, ошибка сети до ответа сервера).
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateApiLogRequest>,
) -> Reply<ApiLog> {
    let entry = logger::api_log(&req.method, &req.url, req.payload, req.success, req.message);
    state.journal.record(entry.clone()).await;
    respond(Ok(entry), "API 로그를 기록했습니다.")
}

/// DELETE /api/logs
pub async fn clear_all(State(state): State<AppState>) -> Reply<()> {
    state.journal.clear().await;
    respond(Ok(()), "API 로그를 삭제했습니다.")
}
