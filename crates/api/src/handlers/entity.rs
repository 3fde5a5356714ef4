//! Handlers for the `/entities` resource.
//!
//! Every handler is generic over the wire view `V`, so the same code serves
//! both transfer records and raw storage entities.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starter_core::error::CoreError;
use starter_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;
use crate::view::EntityView;

/// GET /entities
pub async fn list<V: EntityView>(State(state): State<AppState>) -> AppResult<Json<Vec<V>>> {
    let entities = state.service.find_all().await?;
    Ok(Json(V::from_entities(entities)))
}

/// GET /entities/{id}
pub async fn get_by_id<V: EntityView>(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<V>> {
    let entity = state
        .service
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entity",
            id,
        }))?;
    Ok(Json(V::from_entity(entity)))
}

/// POST /entities
///
/// Responds 200 with an empty body.
pub async fn persist<V: EntityView>(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<V>,
) -> AppResult<StatusCode> {
    let entity = state.service.persist(input.into_entity()).await?;

    tracing::info!(entity_id = ?entity.id, "Entity persisted");

    Ok(StatusCode::OK)
}

/// PUT /entities/{id}
///
/// Full replacement. The path id addresses the row; a conflicting body id
/// is a 400.
pub async fn update<V: EntityView>(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<V>,
) -> AppResult<StatusCode> {
    state.service.update(id, input.into_entity()).await?;

    tracing::info!(entity_id = id, "Entity updated");

    Ok(StatusCode::OK)
}

/// DELETE /entities/{id}
///
/// Idempotent: 200 whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    state.service.delete(id).await?;

    tracing::info!(entity_id = id, "Entity deleted");

    Ok(StatusCode::OK)
}
