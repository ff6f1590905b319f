//! Infrastructure layer for external integrations.
//!
//! Provides the concrete storage backends behind the domain's
//! [`crate::domain::repositories::KvStore`] trait.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory key-value stores

pub mod store;
