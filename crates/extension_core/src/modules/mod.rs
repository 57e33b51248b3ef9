//! Connector modules
//!
//! A connector module implements the integration-specific half of a settings
//! update. The adaptor validates the request, looks the module up by the
//! request's `repository.name`, and calls [`ConnectorModule::process_settings`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{errors::ModuleError, settings::SettingsOptions};

pub mod dummy;
mod registry;

pub use registry::ModuleRegistry;

/// Integration-specific settings processing.
#[async_trait]
pub trait ConnectorModule: Send + Sync {
    /// Name the module is registered under; matched against `repository.name`
    fn name(&self) -> &str;

    /// Apply a settings update.
    ///
    /// The returned value becomes the JSON body of a successful response.
    ///
    /// # Errors
    ///
    /// A [`ModuleError`] is reported to the caller with its code and message
    /// unchanged.
    async fn process_settings(&self, options: SettingsOptions) -> Result<Value, ModuleError>;
}

/// Look up a module that ships with this crate.
///
/// Returns `None` for names that have no built-in implementation.
pub fn builtin_module(name: &str) -> Option<Arc<dyn ConnectorModule>> {
    match name {
        dummy::DUMMY_MODULE_NAME => Some(Arc::new(dummy::DummyModule)),
        _ => None,
    }
}
