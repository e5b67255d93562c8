use super::AggregateId;

/// Трейт для корня агрегата
///
/// Определяет идентичность записи и метаданные коллекции, которые нужны
/// репозиторию и сообщениям API.
pub trait AggregateRoot: Clone + Send + Sync + 'static {
    /// Тип идентификатора агрегата
    type Id: AggregateId + Send + Sync;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &Self::Id;

    /// Заменить ID записи (используется при grid-sync для строк без id)
    fn set_id(&mut self, id: Self::Id);

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (и сегмент URL), например "orgs"
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (например, "조직")
    fn element_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата (например, "a001_orgs")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
