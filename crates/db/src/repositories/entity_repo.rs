//! Repository for the `entity` table.

use sqlx::PgPool;
use starter_core::types::DbId;

use crate::models::entity::Entity;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description";

/// Provides CRUD operations for entities.
pub struct EntityRepo;

impl EntityRepo {
    /// List all entities ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Entity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entity ORDER BY id");
        sqlx::query_as::<_, Entity>(&query).fetch_all(pool).await
    }

    /// Find an entity by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entity WHERE id = $1");
        sqlx::query_as::<_, Entity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new entity with the next free id (`max(id) + 1`, starting at 1).
    pub async fn create(pool: &PgPool, description: Option<&str>) -> Result<Entity, sqlx::Error> {
        let query = format!(
            "INSERT INTO entity (id, description) \
             SELECT COALESCE(MAX(id), 0) + 1, $1 FROM entity \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entity>(&query)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Insert the entity under `id`, or overwrite every column of the existing row.
    ///
    /// A `None` description clears the stored one.
    pub async fn upsert(
        pool: &PgPool,
        id: DbId,
        description: Option<&str>,
    ) -> Result<Entity, sqlx::Error> {
        let query = format!(
            "INSERT INTO entity (id, description) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET description = EXCLUDED.description \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entity>(&query)
            .bind(id)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Delete an entity by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entity WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every entity. Returns the number of removed rows.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entity").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
