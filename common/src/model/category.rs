use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A selectable activation category (service tier), as returned by
/// `GET /categories`. Loaded once per form mount and never mutated.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// The id as the form stores it: the selector works with strings.
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Reads a categories payload. Anything other than an array counts as no
/// categories, and entries that do not look like a category are skipped.
pub fn categories_from_json(value: Value) -> Vec<Category> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_array_payload() {
        let categories =
            categories_from_json(json!([{"id": 1, "name": "Standard"}, {"id": 2, "name": "Premium"}]));
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1], Category { id: 2, name: "Premium".into() });
        assert_eq!(categories[0].key(), "1");
    }

    #[test]
    fn non_array_payloads_are_empty() {
        assert!(categories_from_json(json!({"data": []})).is_empty());
        assert!(categories_from_json(Value::Null).is_empty());
        assert!(categories_from_json(json!("Standard")).is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let categories = categories_from_json(json!([{"id": "x"}, {"id": 3, "name": "Fleet"}]));
        assert_eq!(categories, vec![Category { id: 3, name: "Fleet".into() }]);
    }
}
