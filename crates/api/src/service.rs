//! Pass-through orchestration between the HTTP handlers and the store.

use std::sync::Arc;

use starter_core::error::CoreError;
use starter_core::types::DbId;
use starter_db::models::entity::Entity;
use starter_db::store::EntityStore;

/// Errors surfaced by [`EntityService`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Entity operations over an explicitly supplied storage backend.
#[derive(Clone)]
pub struct EntityService {
    store: Arc<dyn EntityStore>,
}

impl EntityService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Entity>> {
        Ok(self.store.find_all().await?)
    }

    /// `None` means "not found"; it is not an error at this layer.
    pub async fn find_by_id(&self, id: DbId) -> ServiceResult<Option<Entity>> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Store a record. An explicit id that already exists is overwritten.
    pub async fn persist(&self, entity: Entity) -> ServiceResult<Entity> {
        Ok(self.store.save(entity).await?)
    }

    /// Replace the record addressed by `id` with `entity`.
    ///
    /// The path id addresses the row. A body id that is absent or equal is
    /// accepted; any other body id is rejected before anything is written.
    /// Updating a missing id creates it.
    pub async fn update(&self, id: DbId, entity: Entity) -> ServiceResult<Entity> {
        if let Some(body_id) = entity.id {
            if body_id != id {
                return Err(CoreError::Validation(format!(
                    "body id {body_id} does not match path id {id}"
                ))
                .into());
            }
        }

        let replacement = Entity {
            id: Some(id),
            description: entity.description,
        };
        Ok(self.store.save(replacement).await?)
    }

    /// Remove the record if it exists.
    pub async fn delete(&self, id: DbId) -> ServiceResult<()> {
        let removed = self.store.delete_by_id(id).await?;
        if !removed {
            tracing::debug!(entity_id = id, "Delete of missing entity ignored");
        }
        Ok(())
    }

    /// Remove every record. Returns the number removed.
    pub async fn delete_all(&self) -> ServiceResult<u64> {
        Ok(self.store.delete_all().await?)
    }

    pub async fn health_check(&self) -> ServiceResult<()> {
        Ok(self.store.health_check().await?)
    }
}
