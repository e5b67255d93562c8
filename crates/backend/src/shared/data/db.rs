use contracts::domain::a001_org::aggregate::Org;
use contracts::domain::a002_rank::aggregate::Rank;
use contracts::domain::a003_user::aggregate::User;
use contracts::domain::common::AggregateRoot;

use super::repository::{InMemoryRepository, Repository};
use super::seed;
use crate::shared::config::SeedConfig;

/// Три коллекции оргструктуры
///
/// Коллекции подставляются извне как `Repository`, сервисы не знают,
/// как устроено хранение.
pub struct Database {
    pub orgs: Box<dyn Repository<Org>>,
    pub ranks: Box<dyn Repository<Rank>>,
    pub users: Box<dyn Repository<User>>,
}

impl Database {
    pub fn new(
        orgs: Box<dyn Repository<Org>>,
        ranks: Box<dyn Repository<Rank>>,
        users: Box<dyn Repository<User>>,
    ) -> Self {
        Self { orgs, ranks, users }
    }

    /// In-memory коллекции с заданным содержимым
    pub fn in_memory(orgs: Vec<Org>, ranks: Vec<Rank>, users: Vec<User>) -> Self {
        Self::new(
            Box::new(InMemoryRepository::with_rows(orgs)),
            Box::new(InMemoryRepository::with_rows(ranks)),
            Box::new(InMemoryRepository::with_rows(users)),
        )
    }

    /// In-memory коллекции, заполненные генератором начальных данных
    pub fn seeded(config: &SeedConfig) -> Self {
        let data = seed::generate(config);
        log_seeded(&data.orgs);
        log_seeded(&data.ranks);
        log_seeded(&data.users);
        Self::in_memory(data.orgs, data.ranks, data.users)
    }
}

fn log_seeded<T: AggregateRoot>(rows: &[T]) {
    tracing::info!(
        "Seeded {} ({}): {} rows",
        T::full_name(),
        T::element_name(),
        rows.len()
    );
}
