//! Error handling and HTTP error conversion
//!
//! Domain errors from `extension_core` are converted to HTTP responses at the
//! HTTP boundary. Every failure uses the same envelope:
//!
//! ```json
//! { "errors": [ { "field": "...", "code": "...", "message": "...", "source": "..." } ] }
//! ```
//!
//! Status codes:
//! - 400 for bodies that cannot be parsed
//! - 401 for system token failures (see `middleware::AuthError`)
//! - 422 for validation failures and connector module errors

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use extension_core::{ErrorDetail, SettingsError};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Standard error response for all API errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDetail>,
}

impl ErrorResponse {
    pub fn new(errors: Vec<ErrorDetail>) -> Self {
        Self { errors }
    }
}

/// Axum response wrapper for API errors
///
/// # Example
///
/// ```rust,ignore
/// async fn handler() -> Result<Json<Value>, ApiError> {
///     let options = SettingsOptions::try_new(name, body)?; // SettingsError -> ApiError
///     Ok(Json(modules.process_settings(options).await?))
/// }
/// ```
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not valid JSON or has the wrong shape
    InvalidBody(String),

    /// Validation or connector module failure
    Settings(SettingsError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Settings(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Envelope sent to the client
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidBody(reason) => ErrorResponse::new(vec![ErrorDetail::new(
                "invalid_request_body",
                reason.clone(),
            )
            .from_adaptor()]),
            ApiError::Settings(err) => ErrorResponse::new(err.error_details()),
        }
    }
}

impl From<SettingsError> for ApiError {
    fn from(err: SettingsError) -> Self {
        ApiError::Settings(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidBody(reason) => write!(f, "Invalid request body: {}", reason),
            ApiError::Settings(err) => write!(f, "{}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log error server-side
        log_error(&self, status);

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    match error {
        ApiError::Settings(SettingsError::Module(_)) => {
            tracing::info!("API error: {} - {}", status, error);
        }
        _ => {
            tracing::warn!("API error: {} - {}", status, error);
        }
    }
}
