//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Lifetime of the short link in minutes; `0` (the default) never expires.
    #[serde(default)]
    #[validate(range(min = 0, message = "Expiration must not be negative"))]
    pub expiration_in_minutes: i64,
}

/// Identifier assigned to the URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortlink: String,
}
