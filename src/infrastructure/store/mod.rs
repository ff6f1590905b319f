//! Key-value store backends.
//!
//! Both implement [`crate::domain::repositories::KvStore`]:
//! - [`RedisStore`] - Production backend
//! - [`MemoryStore`] - In-process backend for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
