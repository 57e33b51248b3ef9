//! HTTP request type definitions
//!
//! Request types accept flexible input from HTTP clients. Required members are
//! optional here so that their absence is reported as a missing field by the
//! translation layer rather than as a deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// HTTP request to apply a settings update.
///
/// # Example
///
/// ```json
/// {
///   "repository": { "name": "dummy-module" },
///   "postBody": {
///     "persisted": { "fieldOne": "oldValue", "fieldTwo": "oldValue" },
///     "pending": { "fieldOne": "oldValue", "fieldTwo": "newValue" },
///     "delta": { "fieldTwo": "newValue" },
///     "bearerToken": "...",
///     "_integrationId": "..."
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRequest {
    /// Connector module the settings are addressed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryRequest>,

    /// Settings payload forwarded to the module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_body: Option<Map<String, Value>>,
}

/// Repository reference inside a settings request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
