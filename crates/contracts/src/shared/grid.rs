use serde::{Deserialize, Serialize};

/// Тело запроса `POST /api/{collection}/grid-sync`: полный набор строк грида
///
/// Отсутствующее поле `rows` эквивалентно пустому списку.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridPayload<T> {
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

impl<T> GridPayload<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rows_is_empty() {
        let payload: GridPayload<serde_json::Value> = serde_json::from_str("{}").unwrap();
        assert!(payload.rows.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let payload = GridPayload::new(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "rows": [1, 2] })
        );
    }
}
