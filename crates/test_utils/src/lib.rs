//! Test utilities for exercising the adaptor over HTTP.
//!
//! This crate provides the collaborators of the settings contract suite:
//! - [`TestConfig`]: base URL and tokens, read from the environment
//! - [`SettingsClient`]: issues `PUT /settings` and captures the response
//! - [`TestServer`]: the adaptor running in-process on an ephemeral port
//! - [`fixtures`]: request payloads and expected error envelopes
//!
//! [`TestContext`] ties these together: it targets an external adaptor when
//! one is configured and spawns a [`TestServer`] otherwise.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

pub mod client;
pub mod config;
pub mod fixtures;
pub mod server;

pub use client::{SettingsClient, SettingsResponse};
pub use config::TestConfig;
pub use server::TestServer;

/// Install a tracing subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Target adaptor and credentials for a test suite.
pub struct TestContext {
    config: TestConfig,
    base_url: Url,
    // Keeps the in-process adaptor alive for the lifetime of the context
    _server: Option<TestServer>,
}

impl TestContext {
    /// Resolve the adaptor to test against.
    ///
    /// Uses the configured base URL if there is one, otherwise spawns a
    /// [`TestServer`] with the configured system token.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-process server cannot be started.
    pub fn start(config: TestConfig) -> Result<Self> {
        match config.base_url.clone() {
            Some(base_url) => {
                info!(base_url = %base_url, "Testing against external adaptor");
                Ok(Self {
                    config,
                    base_url,
                    _server: None,
                })
            }
            None => {
                let server = TestServer::spawn(&config.system_token)?;
                let base_url = server.base_url().clone();
                info!(base_url = %base_url, "Testing against in-process adaptor");
                Ok(Self {
                    config,
                    base_url,
                    _server: Some(server),
                })
            }
        }
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create a client for the target adaptor.
    ///
    /// Each test builds its own client because connection pools are bound to
    /// the runtime that created them.
    pub fn client(&self) -> Result<SettingsClient> {
        SettingsClient::new(self.base_url.clone())
    }
}
