//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::Redirect,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::identifier::is_valid_identifier;

/// Redirects a short link to its original URL.
///
/// # Endpoint
///
/// `GET /{shortlink}`
///
/// Only identifiers of 1-11 characters from `[a-zA-Z0-9]` are looked up;
/// anything else is answered with 404 without touching the store.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is malformed, unknown or expired.
/// Returns 500 Internal Server Error if the stored URL cannot be sent as a
/// `Location` header.
pub async fn redirect_handler(
    Path(shortlink): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if !is_valid_identifier(&shortlink) {
        return Err(AppError::not_found(
            "unknown short link",
            json!({ "shortlink": shortlink }),
        ));
    }

    let url = state.link_service.un_shorten(&shortlink).await?;
    debug!("Redirect {} -> {}", shortlink, url);

    // Records written outside the HTTP API may hold unnormalized URLs
    if HeaderValue::from_str(&url).is_err() {
        return Err(AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "shortlink": shortlink }),
        ));
    }

    Ok(Redirect::temporary(&url))
}
