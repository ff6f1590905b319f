//! DTOs for the link info endpoint.

use serde::Deserialize;

/// Query string of `GET /api/info`.
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub shortlink: String,
}
