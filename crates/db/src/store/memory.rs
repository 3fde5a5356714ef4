use std::collections::BTreeMap;

use async_trait::async_trait;
use starter_core::types::DbId;
use tokio::sync::RwLock;

use super::EntityStore;
use crate::models::entity::Entity;

/// Map-backed [`EntityStore`] with the same save/delete semantics as the
/// PostgreSQL backend.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    rows: RwLock<BTreeMap<DbId, Entity>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn find_all(&self) -> Result<Vec<Entity>, sqlx::Error> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Entity>, sqlx::Error> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: Entity) -> Result<Entity, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let id = match entity.id {
            Some(id) => id,
            None => match rows.keys().next_back() {
                None => 1,
                Some(max) => max.checked_add(1).ok_or_else(|| {
                    sqlx::Error::Protocol("entity id space exhausted".into())
                })?,
            },
        };
        let stored = Entity {
            id: Some(id),
            description: entity.description,
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn delete_all(&self) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
