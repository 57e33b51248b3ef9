//! Test suite configuration
//!
//! Environment variables:
//!
//! - `TEST_INTEGRATOR_EXTENSION_BASE_URL`: Adaptor to test against
//! - `TEST_INTEGRATOR_EXTENSION_PORT`: Shorthand for `http://localhost:<port>`
//! - `TEST_INTEGRATOR_EXTENSION_BEARER_TOKEN`: Bearer token placed in fixtures
//! - `INTEGRATOR_EXTENSION_SYSTEM_TOKEN`: System token sent with requests
//!
//! With neither a base URL nor a port the suite runs its own adaptor.

use std::env;

use anyhow::{Context, Result};
use url::Url;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

pub const BASE_URL_VAR: &str = "TEST_INTEGRATOR_EXTENSION_BASE_URL";
pub const PORT_VAR: &str = "TEST_INTEGRATOR_EXTENSION_PORT";
pub const BEARER_TOKEN_VAR: &str = "TEST_INTEGRATOR_EXTENSION_BEARER_TOKEN";
pub const SYSTEM_TOKEN_VAR: &str = "INTEGRATOR_EXTENSION_SYSTEM_TOKEN";

/// Bearer token used when none is configured
pub const DEFAULT_BEARER_TOKEN: &str = "TEST_INTEGRATOR_EXTENSION_BEARER_TOKEN";

/// System token used when none is configured
pub const DEFAULT_SYSTEM_TOKEN: &str = "TEST_INTEGRATOR_EXTENSION_SYSTEM_TOKEN";

/// Credentials and target shared by every case of a test suite.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// External adaptor to target; `None` means spawn one in-process
    pub base_url: Option<Url>,

    /// Per-integration credential placed inside settings payloads
    pub bearer_token: String,

    /// Credential authorizing calls to the adaptor
    pub system_token: String,
}

impl TestConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or port cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = match (non_empty(BASE_URL_VAR), non_empty(PORT_VAR)) {
            (Some(url), _) => Some(
                Url::parse(url.trim())
                    .with_context(|| format!("{} is not a valid URL", BASE_URL_VAR))?,
            ),
            (None, Some(port)) => {
                let port: u16 = port
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a port number", PORT_VAR))?;
                Some(Url::parse(&format!("http://localhost:{}", port))?)
            }
            (None, None) => None,
        };

        Ok(Self {
            base_url,
            bearer_token: non_empty(BEARER_TOKEN_VAR)
                .unwrap_or_else(|| DEFAULT_BEARER_TOKEN.to_string()),
            system_token: non_empty(SYSTEM_TOKEN_VAR)
                .unwrap_or_else(|| DEFAULT_SYSTEM_TOKEN.to_string()),
        })
    }
}
