//! The single persisted resource.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starter_core::types::DbId;

/// A row from the `entity` table.
///
/// `id` is `None` only for records that have not been stored yet; the
/// backend assigns one on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity {
    /// Build an entity with an explicit id.
    pub fn new(id: DbId, description: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            description: Some(description.into()),
        }
    }

    /// Build an entity whose id is left for the backend to assign.
    pub fn unassigned(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: Some(description.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(Entity::new(1, "test entity")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "description": "test entity"}));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let entity: Entity = serde_json::from_str("{}").unwrap();
        assert_eq!(entity, Entity::default());
    }
}
