//! Repository trait definitions for the domain layer.
//!
//! The link service talks to storage only through [`KvStore`]; concrete
//! backends live in `crate::infrastructure::store`.

pub mod kv_store;

pub use kv_store::{KvStore, StoreError, StoreResult};

#[cfg(test)]
pub use kv_store::MockKvStore;
