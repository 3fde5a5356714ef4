#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use starter_api::config::{MappingMode, ServerConfig};
use starter_api::router::build_app_router;
use starter_api::service::EntityService;
use starter_api::state::AppState;
use starter_db::store::{EntityStore, InMemoryEntityStore, PgEntityStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(mapping: MappingMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mapping,
    }
}

/// Build the full application router over any storage backend.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack production uses.
pub fn build_app_with_store(store: Arc<dyn EntityStore>, mapping: MappingMode) -> Router {
    let config = test_config(mapping);
    let state = AppState {
        service: EntityService::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the application against a test database pool, in mapped mode.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_store(Arc::new(PgEntityStore::new(pool)), MappingMode::Mapped)
}

/// Build the application against an in-memory store, returning the store too
/// so tests can seed and inspect it.
pub fn build_memory_app(mapping: MappingMode) -> (Router, Arc<InMemoryEntityStore>) {
    let store = Arc::new(InMemoryEntityStore::new());
    let app = build_app_with_store(store.clone(), mapping);
    (app, store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw string body with a JSON content type.
pub async fn json_request(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
