//! HTTP middleware for request processing.

pub mod recover;
pub mod tracing;
