//! Core domain entities.
//!
//! - [`LinkDetail`] - Stored metadata for a short link
//! - [`Expiration`] - Validated link lifetime and the TTL derived from it

pub mod expiration;
pub mod link_detail;

pub use expiration::Expiration;
pub use link_detail::LinkDetail;
