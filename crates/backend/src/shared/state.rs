use std::sync::Arc;
use tokio::sync::RwLock;

use crate::shared::config::{Config, LatencyConfig};
use crate::shared::data::db::Database;
use crate::shared::logger::ApiJournal;

/// Общее состояние сервера, передаётся в handlers через `State`
///
/// Каждая CRUD-операция держит блокировку базы на всё время
/// "проверка → изменение", поэтому операции не перемежаются.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<RwLock<Database>>,
    pub journal: ApiJournal,
    pub latency: LatencyConfig,
}

impl AppState {
    pub fn new(db: Database, journal: ApiJournal, latency: LatencyConfig) -> Self {
        Self {
            db: Arc::new(RwLock::new(db)),
            journal,
            latency,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Database::seeded(&config.seed),
            ApiJournal::new(config.journal.capacity),
            config.latency.clone(),
        )
    }
}
