//! HTTP routing configuration
//!
//! # Route Structure
//!
//! - PUT    /settings - Process a settings update (system token required)
//! - GET    /health   - Health check

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::time::Duration;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

/// Request timeout applied to every route
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - System token middleware on protected routes
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState) -> Router {
    // Request tracing; headers are left out so the system token is never logged
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new());

    let timeout_layer = TimeoutLayer::new(REQUEST_TIMEOUT);

    // Protected routes (require the system token)
    let protected_routes = Router::new()
        .route("/settings", put(handlers::process_settings))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_middleware::system_token_middleware,
        ));

    Router::new()
        .merge(protected_routes)
        // Health check (no token required - added after auth middleware)
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(trace_layer)
        .with_state(state)
}
