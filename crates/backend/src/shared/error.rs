use thiserror::Error;

/// Ожидаемые ошибки валидации CRUD-операций
///
/// Возвращаются значением, а не паникой. `Blocked` это конфликт удаления
/// (есть зависимые записи), на проводе он отдаётся со статусом 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Blocked(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn blocked(message: impl Into<String>) -> Self {
        Self::Blocked(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Статус для конверта ответа
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Blocked(_) | Self::BadRequest(_) => 400,
        }
    }

    /// Нарушение уникальности или удаление при наличии зависимых записей
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_) | Self::Blocked(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m) | Self::Conflict(m) | Self::Blocked(m) | Self::BadRequest(m) => m,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
