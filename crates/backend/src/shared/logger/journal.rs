use contracts::shared::logger::ApiLog;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Журнал API-вызовов в памяти с ограниченной ёмкостью
///
/// При переполнении вытесняются самые старые записи.
#[derive(Clone)]
pub struct ApiJournal {
    entries: Arc<RwLock<VecDeque<ApiLog>>>,
    capacity: usize,
}

impl ApiJournal {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub async fn record(&self, entry: ApiLog) {
        let mut entries = self.entries.write().await;
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Все записи, новые сверху
    pub async fn list(&self) -> Vec<ApiLog> {
        let entries = self.entries.read().await;
        entries.iter().rev().cloned().collect()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::logger::api_log;

    #[tokio::test]
    async fn test_newest_first_and_bounded() {
        let journal = ApiJournal::new(2);
        journal.record(api_log("GET", "/api/orgs", None, true, None)).await;
        journal.record(api_log("POST", "/api/orgs", None, false, None)).await;
        journal.record(api_log("DELETE", "/api/orgs/org-1", None, true, None)).await;

        let entries = journal.list().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].method, "DELETE");
        assert_eq!(entries[1].method, "POST");
    }

    #[tokio::test]
    async fn test_clear() {
        let journal = ApiJournal::new(10);
        journal.record(api_log("GET", "/api/users", None, true, None)).await;
        journal.clear().await;
        assert_eq!(journal.len().await, 0);
    }

    #[test]
    fn test_entry_shape() {
        let entry = api_log("PATCH", "/api/ranks/rank-1", None, true, Some("ok".into()));
        assert!(entry.id.starts_with("log-"));
        assert_eq!(entry.timestamp.len(), 8);
    }
}
