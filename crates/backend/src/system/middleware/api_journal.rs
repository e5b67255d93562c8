use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_response::ApiResponse;

use crate::shared::logger::{self, ApiJournal};

/// Максимальный размер тела запроса, который попадает в журнал
const MAX_REQUEST_BODY: usize = 2 * 1024 * 1024;

/// Middleware: каждый API-вызов попадает в журнал (`GET /api/logs`)
///
/// Успех определяется по статусу конверта ответа; для ответов без
/// конверта (ошибки разбора JSON в axum) сообщением становится текст ответа.
pub async fn record_api_call(
    State(journal): State<ApiJournal>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let url = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let (parts, body) = req.into_parts();
    let request_bytes = match to_bytes(body, MAX_REQUEST_BODY).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("{} {}: cannot read request body: {}", method, url, e);
            let message = "요청 본문을 읽을 수 없습니다.";
            journal
                .record(logger::api_log(&method, &url, None, false, Some(message.into())))
                .await;
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(400, message)),
            )
                .into_response();
        }
    };
    let payload = if request_bytes.is_empty() {
        None
    } else {
        serde_json::from_slice::<serde_json::Value>(&request_bytes).ok()
    };

    let response = next
        .run(Request::from_parts(parts, Body::from(request_bytes)))
        .await;
    let (parts, body) = response.into_parts();

    let response_bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("{} {}: cannot read response body: {}", method, url, e);
            journal
                .record(logger::api_log(&method, &url, payload, false, None))
                .await;
            return Response::from_parts(parts, Body::empty());
        }
    };

    let (success, message) =
        match serde_json::from_slice::<ApiResponse<serde_json::Value>>(&response_bytes) {
            Ok(envelope) => (envelope.is_success(), envelope.message),
            Err(_) => {
                let text = String::from_utf8_lossy(&response_bytes).trim().to_string();
                let message = if text.is_empty() { None } else { Some(text) };
                (parts.status.is_success(), message)
            }
        };

    journal
        .record(logger::api_log(&method, &url, payload, success, message))
        .await;

    Response::from_parts(parts, Body::from(response_bytes))
}
