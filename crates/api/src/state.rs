use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::EntityService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the service holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Entity operations, wired to the configured storage backend.
    pub service: EntityService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
