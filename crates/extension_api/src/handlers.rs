//! HTTP request handlers
//!
//! Each handler:
//! 1. Extracts HTTP request data
//! 2. Translates HTTP types to domain types
//! 3. Calls business logic in `extension_core`
//! 4. Returns the result, or an `ApiError` rendered as an `errors` envelope

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::{
    errors::ApiError, models::request::SettingsRequest, models::response::HealthCheckResponse,
    translation::http_settings_request_to_domain, AppState,
};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// PUT /settings
///
/// Validate a settings update and hand it to the connector module named by
/// `repository.name`. On success the module's result is returned as-is with
/// 200 OK.
pub async fn process_settings(
    State(state): State<AppState>,
    payload: Result<Json<SettingsRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;

    let options = http_settings_request_to_domain(request)?;

    tracing::debug!(
        module = %options.repository_name(),
        integration_id = %options.integration_id(),
        "Processing settings update"
    );

    let result = state.modules.process_settings(options).await?;

    Ok(Json(result))
}

/// GET /health
///
/// Health check endpoint.
///
/// Returns service health status with version, timestamp and the registered
/// connector modules.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
        modules: state.modules.names(),
    })
}
