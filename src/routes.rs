//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{shortlink}` - Short link redirect
//! - `/api/*`            - Shorten, info and health endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Recovery** - Handler panics become `500 internal_error`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{recover, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// All routes with tracing and panic recovery, without the trailing-slash wrapper.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/{shortlink}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(recover::layer())
        .layer(tracing::layer())
}
