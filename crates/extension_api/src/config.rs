//! Server configuration
//!
//! Configuration is read from environment variables:
//!
//! - `INTEGRATOR_EXTENSION_SYSTEM_TOKEN`: Token callers must present (required)
//! - `INTEGRATOR_EXTENSION_HOST`: Host to bind to (default: 0.0.0.0)
//! - `INTEGRATOR_EXTENSION_PORT`: Port to listen on (default: 7000)
//! - `INTEGRATOR_EXTENSION_MODULES`: Comma-separated built-in connector modules
//!   to register (default: dummy-module)

use std::{
    env,
    net::{IpAddr, SocketAddr},
};

use extension_core::{builtin_module, modules::dummy::DUMMY_MODULE_NAME, ModuleRegistry};
use secrecy::SecretString;
use thiserror::Error;

use crate::{DEFAULT_HOST, DEFAULT_PORT};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

pub const SYSTEM_TOKEN_VAR: &str = "INTEGRATOR_EXTENSION_SYSTEM_TOKEN";
pub const HOST_VAR: &str = "INTEGRATOR_EXTENSION_HOST";
pub const PORT_VAR: &str = "INTEGRATOR_EXTENSION_PORT";
pub const MODULES_VAR: &str = "INTEGRATOR_EXTENSION_MODULES";

/// Errors raised while loading the server configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("INTEGRATOR_EXTENSION_SYSTEM_TOKEN must be set to a non-empty value")]
    MissingSystemToken,

    #[error("Invalid INTEGRATOR_EXTENSION_PORT value '{value}'")]
    InvalidPort { value: String },

    #[error("Invalid INTEGRATOR_EXTENSION_HOST value '{value}'")]
    InvalidHost { value: String },

    #[error("Unknown connector module '{name}' in INTEGRATOR_EXTENSION_MODULES")]
    UnknownModule { name: String },
}

/// API server configuration
#[derive(Debug)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Token callers must present in the `Authorization` header
    pub system_token: SecretString,

    /// Names of the built-in connector modules to register
    pub modules: Vec<String>,
}

impl ApiConfig {
    /// Configuration with default host, port and modules
    pub fn new(system_token: impl Into<String>) -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            system_token: SecretString::from(system_token.into()),
            modules: vec![DUMMY_MODULE_NAME.to_string()],
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the system token is missing or empty, or
    /// if the host, port or module list cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let system_token = lookup(SYSTEM_TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingSystemToken)?;

        let host_value = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_value
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost { value: host_value })?;

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        let modules = match lookup(MODULES_VAR) {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![DUMMY_MODULE_NAME.to_string()],
        };

        Ok(Self {
            host,
            port,
            system_token: SecretString::from(system_token),
            modules,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the registry of configured connector modules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownModule`] for a name with no built-in
    /// implementation.
    pub fn module_registry(&self) -> Result<ModuleRegistry, ConfigError> {
        let mut registry = ModuleRegistry::new();
        for name in &self.modules {
            let module = builtin_module(name)
                .ok_or_else(|| ConfigError::UnknownModule { name: name.clone() })?;
            registry.register(module);
        }
        Ok(registry)
    }
}
