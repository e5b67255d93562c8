use serde::{Deserialize, Deserializer};

/// Десериализация nullable-поля частичного обновления в `Option<Option<T>>`
///
/// Использовать вместе с `#[serde(default)]`: отсутствующее поле даёт `None`,
/// `null` даёт `Some(None)`, значение даёт `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
