//! Key-value store trait backing the link service.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a key-value store backend.
///
/// A missing key is not an error: lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal key-value capability the link service needs.
///
/// Implementations must be safe to share across tasks. TTLs of `None` mean
/// the key never expires.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis via a multiplexed connection manager
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map for development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Atomically increments the integer at `key` and returns the new value.
    ///
    /// A missing key counts as `0`, so the first increment returns `1`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Operation`] if the stored value is not an integer
    /// or the increment would overflow.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Reads the string stored at `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists and has not expired
    /// - `Ok(None)` if the key is absent
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` at `key`, replacing any previous value and TTL.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()>;

    /// Writes `value` at `key` only if the key is absent.
    ///
    /// Returns `true` if this call wrote the value.
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
