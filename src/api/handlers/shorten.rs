//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::normalize_url;

/// Creates a short link for a URL, or returns the one it already has.
///
/// The URL is stored in its normalized form (see [`normalize_url`]), which is
/// also the form deduplication works on.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "expiration_in_minutes": 60
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortlink": "1" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, fails validation, or
/// the expiration is above the supported maximum.
/// Returns 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = normalize_url(&payload.url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "url": e.to_string() }))
    })?;

    let shortlink = state
        .link_service
        .shorten(&url, payload.expiration_in_minutes)
        .await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse { shortlink })))
}
