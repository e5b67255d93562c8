use contracts::domain::common::{AggregateId, AggregateRoot};

/// Хранилище одной коллекции агрегатов
///
/// Сервисы работают только через этот трейт, поэтому `Vec`-реализацию можно
/// заменить на map по id или на настоящую БД, не трогая места вызова.
pub trait Repository<T: AggregateRoot>: Send + Sync {
    /// Все записи в порядке вставки
    fn list(&self) -> Vec<T>;

    fn get(&self, id: &T::Id) -> Option<T>;

    /// Есть ли хотя бы одна запись, удовлетворяющая условию
    fn any(&self, predicate: &dyn Fn(&T) -> bool) -> bool;

    /// Добавить запись в конец коллекции
    fn insert(&mut self, record: T);

    /// Заменить запись с тем же id на месте. `false`, если записи нет
    fn update(&mut self, record: T) -> bool;

    /// `false`, если записи нет
    fn delete(&mut self, id: &T::Id) -> bool;

    /// Удалить всё и вставить переданные записи
    fn replace_all(&mut self, records: Vec<T>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn exists(&self, id: &T::Id) -> bool {
        self.any(&|record| record.id() == id)
    }

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.list().into_iter().filter(|r| predicate(r)).collect()
    }
}

/// Выдать новые идентификаторы строкам grid-sync с пустым id
pub fn assign_missing_ids<T: AggregateRoot>(rows: Vec<T>) -> Vec<T> {
    rows.into_iter()
        .map(|mut row| {
            if row.id().is_blank() {
                row.set_id(T::Id::generate());
            }
            row
        })
        .collect()
}

/// In-memory реализация поверх `Vec`
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    rows: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AggregateRoot> InMemoryRepository<T> {
    fn position(&self, id: &T::Id) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }
}

impl<T: AggregateRoot> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.rows.clone()
    }

    fn get(&self, id: &T::Id) -> Option<T> {
        self.rows.iter().find(|r| r.id() == id).cloned()
    }

    fn any(&self, predicate: &dyn Fn(&T) -> bool) -> bool {
        self.rows.iter().any(predicate)
    }

    fn insert(&mut self, record: T) {
        self.rows.push(record);
    }

    fn update(&mut self, record: T) -> bool {
        match self.position(record.id()) {
            Some(index) => {
                self.rows[index] = record;
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: &T::Id) -> bool {
        match self.position(id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    fn replace_all(&mut self, records: Vec<T>) {
        self.rows = records;
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.rows.iter().filter(|r| predicate(*r)).cloned().collect()
    }
}
