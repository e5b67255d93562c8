use serde::{Deserialize, Serialize};

/// Запись журнала API-вызовов (для страниц просмотра событий грида)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiLog {
    pub id: String,
    /// GET / POST / PUT / PATCH / DELETE
    pub method: String,
    /// Путь с query-строкой
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    /// Локальное время, `HH:MM:SS`
    pub timestamp: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// DTO для записи события, зафиксированного на клиенте (`POST /api/logs`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApiLogRequest {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
