//! DTO for the status endpoint.

use serde::Serialize;

/// Database server version as reported by `SELECT version()`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub version: String,
}
