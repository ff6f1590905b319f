//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Link details are returned as
//! [`crate::domain::entities::LinkDetail`] directly.

pub mod health;
pub mod info;
pub mod shorten;
