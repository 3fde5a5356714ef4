//! Storage backend contract used by the service layer.
//!
//! [`PgEntityStore`] is the production backend. [`memory::InMemoryEntityStore`]
//! keeps rows in a map and is meant for tests that don't need a database.

pub mod memory;

use async_trait::async_trait;
use starter_core::types::DbId;

use crate::models::entity::Entity;
use crate::repositories::EntityRepo;
use crate::DbPool;

pub use memory::InMemoryEntityStore;

/// Generic CRUD contract over the `entity` table.
///
/// Calls are atomic individually; nothing spans more than one call.
#[async_trait]
pub trait EntityStore: Send + Sync + 'static {
    /// All stored entities, ordered by id.
    async fn find_all(&self) -> Result<Vec<Entity>, sqlx::Error>;

    /// The entity with the given id, or `None` if there is none.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Entity>, sqlx::Error>;

    /// Insert when `entity.id` is unassigned, otherwise overwrite the row with
    /// that id (inserting it if missing). Returns the stored row.
    async fn save(&self, entity: Entity) -> Result<Entity, sqlx::Error>;

    /// Remove the row with the given id. Returns `true` if one was removed;
    /// a missing row is not an error.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Remove every row. Returns the number removed.
    async fn delete_all(&self) -> Result<u64, sqlx::Error>;

    /// Check the backend is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// [`EntityStore`] backed by PostgreSQL through [`EntityRepo`].
#[derive(Clone)]
pub struct PgEntityStore {
    pool: DbPool,
}

impl PgEntityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    async fn find_all(&self) -> Result<Vec<Entity>, sqlx::Error> {
        EntityRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Entity>, sqlx::Error> {
        EntityRepo::find_by_id(&self.pool, id).await
    }

    async fn save(&self, entity: Entity) -> Result<Entity, sqlx::Error> {
        let description = entity.description.as_deref();
        match entity.id {
            Some(id) => EntityRepo::upsert(&self.pool, id, description).await,
            None => EntityRepo::create(&self.pool, description).await,
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        EntityRepo::delete(&self.pool, id).await
    }

    async fn delete_all(&self) -> Result<u64, sqlx::Error> {
        EntityRepo::delete_all(&self.pool).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
