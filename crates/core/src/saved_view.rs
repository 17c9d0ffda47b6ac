//! Saved table-filter views.

use serde::{Deserialize, Serialize};

use crate::types::{new_entity_id, EntityId};

/// A named, persisted set of table filters.
///
/// Filters are free-form key/value pairs owned by the presentation layer;
/// the core only stores and returns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedView {
    pub id: EntityId,
    pub name: String,
    pub filters: serde_json::Map<String, serde_json::Value>,
}

impl SavedView {
    pub fn new(
        name: impl Into<String>,
        filters: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: new_entity_id("view"),
            name: name.into(),
            filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_filters() {
        let mut filters = serde_json::Map::new();
        filters.insert("status".to_string(), serde_json::json!("Approved"));
        filters.insert("client".to_string(), serde_json::json!(["cli1", "cli2"]));
        let view = SavedView::new("Approved for key clients", filters);

        let json = serde_json::to_string(&view).unwrap();
        let back: SavedView = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, view.name);
        assert_eq!(back.filters, view.filters);
        assert!(back.id.starts_with("view-"));
    }
}
