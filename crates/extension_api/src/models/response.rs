//! HTTP response type definitions
//!
//! Successful settings responses are whatever JSON the connector module
//! returns, so only the health check has a dedicated type here. Error
//! envelopes live in `crate::errors`.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,

    /// Names of the registered connector modules
    pub modules: Vec<String>,
}
