//! Authorization and tracing middleware
//!
//! This module provides middleware for:
//! - System token authorization of adaptor endpoints
//! - Request tracing with per-request IDs

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use extension_core::ErrorDetail;
use secrecy::ExposeSecret;

use crate::{errors::ErrorResponse, AppState};

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;

/// Message returned for every system token failure
pub const INVALID_SYSTEM_TOKEN: &str = "invalid system token";

/// System token authorization middleware.
///
/// Requires an `Authorization: Bearer <system token>` header whose token
/// matches the configured system token.
///
/// Returns 401 with `WWW-Authenticate: invalid system token` if:
/// - Authorization header is missing
/// - Header format or scheme is invalid
/// - Token does not match
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/settings", put(process_settings))
///     .layer(middleware::from_fn_with_state(state.clone(), system_token_middleware));
/// ```
pub async fn system_token_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = extract_bearer_token(auth_header)?;

    if token != state.system_token.expose_secret() {
        return Err(AuthError::InvalidToken);
    }

    Ok(next.run(request).await)
}

/// Extract Bearer token from Authorization header.
///
/// Expected format: "Bearer <token>"
fn extract_bearer_token(auth_header: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = auth_header.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(AuthError::InvalidFormat);
    }

    if !parts[0].eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme);
    }

    Ok(parts[1])
}

/// Request tracing middleware.
///
/// Adds request ID and logging context for observability.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    let response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    response
}

/// System token authorization errors
///
/// The variants only differ in what is logged. Clients always receive the
/// same 401 response.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization header is missing
    MissingToken,

    /// Authorization header format is invalid
    InvalidFormat,

    /// Authorization scheme is not "Bearer"
    InvalidScheme,

    /// Token does not match the system token
    InvalidToken,
}

impl AuthError {
    fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing Authorization header",
            AuthError::InvalidFormat => "malformed Authorization header",
            AuthError::InvalidScheme => "unsupported authorization scheme",
            AuthError::InvalidToken => "system token mismatch",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!(reason = self.reason(), "Rejected request with invalid system token");

        let error_response = ErrorResponse::new(vec![ErrorDetail::new(
            "unauthorized",
            INVALID_SYSTEM_TOKEN,
        )
        .from_adaptor()]);

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, INVALID_SYSTEM_TOKEN)],
            Json(error_response),
        )
            .into_response()
    }
}
