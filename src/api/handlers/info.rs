//! Handler for link detail lookups.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::info::InfoQuery;
use crate::domain::entities::LinkDetail;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored detail record of a short link.
///
/// # Endpoint
///
/// `GET /api/info?shortlink={id}`
///
/// # Response
///
/// ```json
/// {
///   "URL": "https://example.com",
///   "CreatedAt": "2024-05-01T12:30:00Z",
///   "ExpirationInMinutes": 60
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the `shortlink` parameter is missing.
/// Returns 404 Not Found if the short link is unknown or expired.
pub async fn info_handler(
    State(state): State<AppState>,
    query: Result<Query<InfoQuery>, QueryRejection>,
) -> Result<Json<LinkDetail>, AppError> {
    let Query(query) = query?;

    let detail = state.link_service.short_link_info(&query.shortlink).await?;

    Ok(Json(detail))
}
