//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok`; failures are reported as an error body.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database state, `connected`.
    pub database: String,
}
