use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::MappingMode;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the storage backend is reachable.
    pub db_healthy: bool,
    /// Wire representation served at `/entities`.
    pub mapping: MappingMode,
}

/// GET /health -- returns service and storage health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.service.health_check().await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        mapping: state.config.mapping,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
