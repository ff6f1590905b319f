//! Expiration policy for short links.

use serde_json::json;
use std::time::Duration;

use crate::error::AppError;

/// Longest accepted lifetime: 100 years of 365 days.
///
/// Keeps the TTL well inside Redis's expire range and `Instant` arithmetic.
pub const MAX_EXPIRATION_MINUTES: i64 = 100 * 365 * 24 * 60;

/// Lifetime of a short link, in whole minutes.
///
/// Zero minutes means the link never expires: its keys are written without a TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiration {
    minutes: i64,
    ttl: Option<Duration>,
}

impl Expiration {
    /// Builds an expiration from a minute count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `minutes` is negative or above
    /// [`MAX_EXPIRATION_MINUTES`].
    pub fn from_minutes(minutes: i64) -> Result<Self, AppError> {
        if minutes < 0 {
            return Err(AppError::bad_request(
                "Expiration must not be negative",
                json!({ "expiration_in_minutes": minutes }),
            ));
        }

        if minutes > MAX_EXPIRATION_MINUTES {
            return Err(AppError::bad_request(
                "Expiration is too large",
                json!({
                    "expiration_in_minutes": minutes,
                    "max": MAX_EXPIRATION_MINUTES,
                }),
            ));
        }

        let ttl = (minutes > 0).then(|| Duration::from_secs(minutes as u64 * 60));

        Ok(Self { minutes, ttl })
    }

    /// The requested lifetime in minutes.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// TTL to attach to stored keys, or `None` for links that never expire.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Whether the link is stored without a TTL.
    pub fn is_permanent(&self) -> bool {
        self.ttl.is_none()
    }
}
