//! Detail record stored for every allocated identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata kept alongside a short link.
///
/// Serialized with `URL` / `CreatedAt` / `ExpirationInMinutes` field names,
/// both in the store and in `/api/info` responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDetail {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    /// Requested lifetime in minutes; `0` means the link never expires.
    #[serde(rename = "ExpirationInMinutes")]
    pub expiration_in_minutes: i64,
}

impl LinkDetail {
    /// Creates a detail record.
    pub fn new(url: String, created_at: DateTime<Utc>, expiration_in_minutes: i64) -> Self {
        Self {
            url,
            created_at,
            expiration_in_minutes,
        }
    }
}
