//! Validated settings requests
//!
//! A settings request names a connector module (`repository.name`) and carries
//! a `postBody` with the integration's settings:
//!
//! ```json
//! {
//!   "persisted": { "fieldOne": "oldValue", "fieldTwo": "oldValue" },
//!   "pending": { "fieldOne": "oldValue", "fieldTwo": "newValue" },
//!   "delta": { "fieldTwo": "newValue" },
//!   "bearerToken": "...",
//!   "_integrationId": "..."
//! }
//! ```
//!
//! [`SettingsOptions`] can only be built from a request whose required fields
//! are present, so connector modules never see an incomplete request.

use serde_json::{Map, Value};

use crate::{errors::SettingsError, fields};

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

/// Settings request that passed required-field validation.
///
/// The `postBody` map is kept as received, including fields the
/// adaptor does not know about, so modules can echo or forward it.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsOptions {
    repository_name: String,
    bearer_token: String,
    integration_id: String,
    post_body: Map<String, Value>,
}

impl SettingsOptions {
    /// Validate a settings request.
    ///
    /// Required fields are checked in the order `bearerToken`,
    /// `_integrationId`, `repository.name`. Every missing field is reported,
    /// not just the first one.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingRequiredFields`] if any required field
    /// is absent, `null`, `false`, an empty string, or not a string at all.
    pub fn try_new(
        repository_name: Option<String>,
        post_body: Map<String, Value>,
    ) -> Result<Self, SettingsError> {
        let bearer_token = required_string(&post_body, fields::BEARER_TOKEN);
        let integration_id = required_string(&post_body, fields::INTEGRATION_ID);
        let repository_name = repository_name.filter(|name| !name.is_empty());

        match (bearer_token, integration_id, repository_name) {
            (Some(bearer_token), Some(integration_id), Some(repository_name)) => Ok(Self {
                repository_name,
                bearer_token,
                integration_id,
                post_body,
            }),
            (bearer_token, integration_id, repository_name) => {
                let mut missing = Vec::new();
                if bearer_token.is_none() {
                    missing.push(fields::BEARER_TOKEN);
                }
                if integration_id.is_none() {
                    missing.push(fields::INTEGRATION_ID);
                }
                if repository_name.is_none() {
                    missing.push(fields::REPOSITORY_NAME);
                }
                Err(SettingsError::missing_fields(missing))
            }
        }
    }

    /// Name of the connector module the request is addressed to
    pub fn repository_name(&self) -> &str {
        &self.repository_name
    }

    /// Credential for the downstream integration
    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    pub fn integration_id(&self) -> &str {
        &self.integration_id
    }

    /// Settings as currently stored
    pub fn persisted(&self) -> Option<&Map<String, Value>> {
        self.object_field(fields::PERSISTED)
    }

    /// Settings as proposed by the user
    pub fn pending(&self) -> Option<&Map<String, Value>> {
        self.object_field(fields::PENDING)
    }

    /// Only the settings whose value differs between `persisted` and `pending`
    pub fn delta(&self) -> Option<&Map<String, Value>> {
        self.object_field(fields::DELTA)
    }

    /// Whether the caller asked the module to fail (`"error": true`).
    pub fn error_requested(&self) -> bool {
        matches!(self.post_body.get(fields::ERROR), Some(Value::Bool(true)))
    }

    /// The `postBody` exactly as received
    pub fn post_body(&self) -> &Map<String, Value> {
        &self.post_body
    }

    pub fn into_post_body(self) -> Map<String, Value> {
        self.post_body
    }

    fn object_field(&self, name: &str) -> Option<&Map<String, Value>> {
        self.post_body.get(name).and_then(Value::as_object)
    }
}

/// Extract a required string field, treating empty strings as absent.
fn required_string(body: &Map<String, Value>, name: &str) -> Option<String> {
    match body.get(name) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
        _ => None,
    }
}
