#![allow(dead_code)]

use axum::Router;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use std::sync::Arc;
use shortlink::application::services::LinkService;
use shortlink::domain::repositories::KvStore;
use shortlink::infrastructure::store::MemoryStore;
use shortlink::routes::{app_router, build_router};
use shortlink::state::AppState;

/// Already in normalized form, so it round-trips through the HTTP API unchanged.
pub const EXAMPLE_URL: &str = "https://example.com/";

/// Fresh in-memory store, so the counter starts from scratch.
pub fn create_test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn create_test_service(store: Arc<MemoryStore>) -> LinkService<MemoryStore> {
    LinkService::new(store)
}

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    let store: Arc<dyn KvStore> = store;
    AppState::new(store)
}

/// Test server over the full application router.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

/// Test server over the router as served, trailing-slash trimming included.
pub fn create_app_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

/// Test server over a hand-built router, for exercising single handlers.
pub fn create_handler_server(router: Router<AppState>, state: AppState) -> TestServer {
    TestServer::new(router.with_state(state)).unwrap()
}
