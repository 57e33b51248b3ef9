//! Integrator Extension REST API
//!
//! This crate exposes the adaptor's HTTP endpoints. The main one is
//! `PUT /settings`, which forwards validated settings updates to a connector
//! module.
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - System token authorization
//! - HTTP request/response translation
//! - Error mapping from domain to HTTP
//! - Routing and server configuration
//!
//! Business logic lives in `extension_core`. The dependency flows
//! HTTP API → core, never the reverse.

use std::sync::Arc;

use extension_core::ModuleRegistry;
use secrecy::SecretString;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod translation;

// Re-export key types for convenience
pub use config::{ApiConfig, ConfigError};
pub use errors::{ApiError, ErrorResponse};
pub use server::ApiServer;

/// Default API port
pub const DEFAULT_PORT: u16 = 7000;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Application state shared across handlers
///
/// Read-only after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Token callers must present to use the adaptor's endpoints
    pub system_token: Arc<SecretString>,

    /// Connector modules settings are dispatched to
    pub modules: Arc<ModuleRegistry>,
}

impl AppState {
    /// Create new application state
    ///
    /// # Arguments
    ///
    /// * `system_token` - Token expected in the `Authorization` header
    /// * `modules` - Registry of connector modules
    pub fn new(system_token: impl Into<String>, modules: ModuleRegistry) -> Self {
        Self {
            system_token: Arc::new(SecretString::from(system_token.into())),
            modules: Arc::new(modules),
        }
    }
}
