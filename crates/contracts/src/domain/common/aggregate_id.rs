use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы строковые: `org-root`, `rank-12`, `user-<uuid>`.
/// Пустая строка допустима только в строках grid-sync, где она означает
/// "выдать новый идентификатор".
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Префикс генерируемых идентификаторов (например, "org")
    fn prefix() -> &'static str;

    /// Обернуть готовую строку без проверки
    fn from_raw(value: String) -> Self;

    /// Строковое представление
    fn as_str(&self) -> &str;

    /// Новый уникальный идентификатор вида `{prefix}-{uuid}`
    fn generate() -> Self {
        Self::from_raw(format!("{}-{}", Self::prefix(), uuid::Uuid::new_v4()))
    }

    /// Пустой ли идентификатор (строка grid-sync без id)
    fn is_blank(&self) -> bool {
        self.as_str().is_empty()
    }
}
