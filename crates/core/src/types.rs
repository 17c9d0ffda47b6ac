/// All entity primary keys are prefixed opaque strings (e.g. `req-<uuid>`).
pub type EntityId = String;

/// All audit timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity id with the given prefix.
///
/// Ids only need to be unique within a collection; a UUIDv4 suffix makes
/// collisions practically impossible without any coordination.
pub fn new_entity_id(prefix: &str) -> EntityId {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_carries_prefix() {
        let id = new_entity_id("cli");
        assert!(id.starts_with("cli-"));
    }

    #[test]
    fn ids_are_unique() {
        let a = new_entity_id("doc");
        let b = new_entity_id("doc");
        assert_ne!(a, b);
    }
}
