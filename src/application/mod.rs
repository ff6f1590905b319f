//! Application layer services implementing business logic.
//!
//! Services coordinate the domain's storage contract with the pure helpers in
//! [`crate::utils`] and expose the operations HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, resolution and link details

pub mod services;
