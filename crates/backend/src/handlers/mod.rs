pub mod a001_org;
pub mod a002_rank;
pub mod a003_user;
pub mod logs;

use axum::{http::StatusCode, Json};
use contracts::shared::api_response::ApiResponse;

use crate::shared::error::ApiResult;

/// Ответ handler'а: HTTP-статус совпадает со статусом в конверте
pub type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

/// Завернуть результат сервиса в конверт `{ data, status, message }`
pub fn respond<T>(result: ApiResult<T>, success_message: &str) -> Reply<T> {
    match result {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, success_message)),
        ),
        Err(e) => {
            let status = StatusCode::from_u16(e.status()).unwrap_or(StatusCode::BAD_REQUEST);
            (status, Json(ApiResponse::error(e.status(), e.message())))
        }
    }
}
