//! Pure helpers used by the link service and the HTTP layer.
//!
//! - [`base62`] - Counter value to identifier encoding
//! - [`fingerprint`] - URL digests for the dedup index
//! - [`identifier`] - Identifier syntax check
//! - [`url_normalizer`] - Canonical, header-safe URL form

pub mod base62;
pub mod fingerprint;
pub mod identifier;
pub mod url_normalizer;
