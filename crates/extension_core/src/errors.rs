//! Error types for settings processing
//!
//! Two kinds of failure reach a caller of the adaptor:
//! - [`SettingsError`] for problems the adaptor detects itself (missing fields,
//!   unknown module)
//! - [`ModuleError`] for failures reported by a connector module
//!
//! Both render into [`ErrorDetail`] entries, the wire format of an `errors`
//! envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{fields, ADAPTOR_SOURCE};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Message used for every missing required field
pub const MISSING_REQUIRED_FIELD_MESSAGE: &str = "missing required field in request";

/// A single entry of an `{ "errors": [...] }` response envelope.
///
/// # Example
///
/// ```json
/// {
///   "field": "bearerToken",
///   "code": "missing_required_field",
///   "message": "missing required field in request",
///   "source": "adaptor"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Path of the offending request field, if the error concerns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Component that raised the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ErrorDetail {
    /// Create an error detail with only a code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: None,
            code: code.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attach the path of the offending field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Mark the error as raised by the adaptor
    pub fn from_adaptor(mut self) -> Self {
        self.source = Some(ADAPTOR_SOURCE.to_string());
        self
    }

    /// Error detail for a required field that was absent from the request
    pub fn missing_required_field(field: impl Into<String>) -> Self {
        Self::new("missing_required_field", MISSING_REQUIRED_FIELD_MESSAGE)
            .with_field(field)
            .from_adaptor()
    }
}

/// Errors detected by the adaptor while validating or dispatching settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Missing required fields in request: {}", .fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },

    #[error("Module '{name}' is not registered")]
    UnknownModule { name: String },

    #[error("Module failed: {0}")]
    Module(#[from] ModuleError),
}

impl SettingsError {
    /// Create a missing-fields error from field paths
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingRequiredFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the error as the entries of an `errors` envelope.
    ///
    /// Missing fields produce one entry per field, in the order they were
    /// detected. Module errors carry neither a field nor a source.
    pub fn error_details(&self) -> Vec<ErrorDetail> {
        match self {
            SettingsError::MissingRequiredFields { fields } => fields
                .iter()
                .map(ErrorDetail::missing_required_field)
                .collect(),
            SettingsError::UnknownModule { name } => vec![ErrorDetail::new(
                "invalid_module",
                format!("module {} is not registered", name),
            )
            .with_field(fields::REPOSITORY_NAME)
            .from_adaptor()],
            SettingsError::Module(err) => vec![err.to_error_detail()],
        }
    }
}

/// Failure reported by a connector module.
///
/// The code and message are passed through to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ModuleError {
    pub code: String,
    pub message: String,
}

impl ModuleError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn to_error_detail(&self) -> ErrorDetail {
        ErrorDetail::new(self.code.clone(), self.message.clone())
    }
}
