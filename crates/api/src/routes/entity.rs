//! Route definitions for the `/entities` resource.

use axum::routing::get;
use axum::Router;
use starter_db::models::entity::Entity;

use crate::config::MappingMode;
use crate::dto::EntityDto;
use crate::handlers::entity;
use crate::state::AppState;
use crate::view::EntityView;

/// Entity routes for wire view `V`.
///
/// ```text
/// GET    /entities        -> list
/// POST   /entities        -> persist
/// GET    /entities/{id}   -> get_by_id
/// PUT    /entities/{id}   -> update
/// DELETE /entities/{id}   -> delete
/// ```
pub fn router<V: EntityView>() -> Router<AppState> {
    Router::new()
        .route("/entities", get(entity::list::<V>).post(entity::persist::<V>))
        .route(
            "/entities/{id}",
            get(entity::get_by_id::<V>)
                .put(entity::update::<V>)
                .delete(entity::delete),
        )
}

/// Entity routes for the configured mapping mode.
pub fn router_for(mode: MappingMode) -> Router<AppState> {
    match mode {
        MappingMode::Mapped => router::<EntityDto>(),
        MappingMode::Direct => router::<Entity>(),
    }
}
