//! Panic recovery middleware.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

type PanicHandlerFn = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Turns a panic inside a handler into a logged `500 internal_error` response.
///
/// The panic message is logged but never sent to the client.
pub fn layer() -> CatchPanicLayer<PanicHandlerFn> {
    CatchPanicLayer::custom(handle_panic as PanicHandlerFn)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("Handler panicked: {message}"), json!({})).into_response()
}
