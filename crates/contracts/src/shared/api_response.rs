use serde::{Deserialize, Serialize};

/// Код успешного ответа
pub const STATUS_OK: u16 = 200;

/// Конверт ответа API: `{ data, status, message? }`
///
/// При ошибке `data` равно `null`, `status` равен 400, 404 или 409.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status: STATUS_OK,
            message: Some(message.into()),
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            data: None,
            status,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}
