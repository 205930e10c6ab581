//! Frontend Models
//!
//! Data structures matching the todos REST resource.

use serde::{Deserialize, Serialize};

/// Todo item as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned, immutable
    pub id: i64,
    pub title: String,
    /// Server-assigned creation timestamp, passed through as text
    pub created_date: String,
}

/// Item that has not been created yet (no id, no timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewItem {
    pub title: String,
}

impl NewItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_uses_camel_case_wire_names() {
        let item: Item =
            serde_json::from_str(r#"{"id":1,"title":"A","createdDate":"2024-01-01"}"#).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.title, "A");
        assert_eq!(item.created_date, "2024-01-01");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["createdDate"], "2024-01-01");
        assert!(json.get("created_date").is_none());
    }

    #[test]
    fn test_item_ignores_unknown_fields() {
        let item: Item = serde_json::from_str(
            r#"{"id":7,"title":"B","createdDate":"2024-03-03","done":false}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
    }
}
