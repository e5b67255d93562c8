pub mod journal;

pub use journal::ApiJournal;

use contracts::shared::logger::ApiLog;

/// Построить запись журнала API-вызова
///
/// # Примеры
/// ```rust,ignore
/// let entry = logger::api_log("POST", "/api/orgs", Some(body), true, Some("조직이 생성되었습니다.".into()));
/// journal.record(entry).await;
/// ```
pub fn api_log(
    method: &str,
    url: &str,
    payload: Option<serde_json::Value>,
    success: bool,
    message: Option<String>,
) -> ApiLog {
    ApiLog {
        id: format!("log-{}", uuid::Uuid::new_v4()),
        method: method.to_string(),
        url: url.to_string(),
        payload,
        timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        success,
        message,
    }
}
