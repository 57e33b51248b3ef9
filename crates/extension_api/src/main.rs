//! Integrator Extension API Server
//!
//! Main binary for running the adaptor. See `config` for the environment
//! variables it reads; `RUST_LOG` sets the log level (default: info).

use std::env;

use extension_api::{ApiConfig, ApiServer, AppState};
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = ApiConfig::from_env()?;
    let modules = config.module_registry()?;

    tracing::info!("Starting integrator extension adaptor");
    tracing::info!("Connector modules: {:?}", modules.names());

    let state = AppState::new(config.system_token.expose_secret(), modules);
    let server = ApiServer::new(config, state);

    // Start server with graceful shutdown
    server.serve().await
}
