//! # shortlink
//!
//! A URL shortener that keeps every link in a key-value store (Redis in
//! production) and hands out base62-encoded identifiers from a global counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Detail records, expiration policy, key layout and the store trait
//! - **Application Layer** ([`application`]) - The link service: shorten, resolve, info
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## How a URL is shortened
//!
//! 1. The URL's SHA-1 fingerprint is looked up in the dedup index
//! 2. On a miss, `next.url.id` is atomically incremented and base62-encoded
//! 3. The detail record, resolution record and index entry are written with the link's TTL
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory store otherwise
//! cargo run
//!
//! curl -X POST localhost:8000/api/shorten \
//!      -d '{"url":"https://example.com","expiration_in_minutes":60}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Expiration, LinkDetail};
    pub use crate::domain::repositories::{KvStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
