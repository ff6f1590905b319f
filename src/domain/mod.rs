//! Domain layer: entities, key layout and the storage contract.
//!
//! - [`entities`] - Detail records and expiration policy
//! - [`keys`] - Names of every key the service reads or writes
//! - [`repositories`] - The [`repositories::KvStore`] trait implemented by the infrastructure layer

pub mod entities;
pub mod keys;
pub mod repositories;
