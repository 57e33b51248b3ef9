//! Registry of connector modules keyed by repository name

use std::{collections::HashMap, fmt, sync::Arc};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::ConnectorModule;
use crate::{errors::SettingsError, settings::SettingsOptions, PROCESS_SETTINGS};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// Connector modules available to the adaptor.
///
/// Built once at startup and shared read-only between requests.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Arc<dyn ConnectorModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its own name.
    ///
    /// A module registered under an existing name replaces the earlier one.
    pub fn register(&mut self, module: Arc<dyn ConnectorModule>) {
        let name = module.name().to_string();
        if self.modules.insert(name.clone(), module).is_some() {
            warn!(module = %name, "Replaced previously registered connector module");
        } else {
            debug!(module = %name, "Registered connector module");
        }
    }

    /// Builder-style variant of [`ModuleRegistry::register`]
    pub fn with_module(mut self, module: Arc<dyn ConnectorModule>) -> Self {
        self.register(module);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ConnectorModule>> {
        self.modules.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Registered module names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Hand validated settings to the module named by `repository.name`.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::UnknownModule`] if no module has that name
    /// - [`SettingsError::Module`] if the module rejects the settings
    pub async fn process_settings(&self, options: SettingsOptions) -> Result<Value, SettingsError> {
        let name = options.repository_name().to_string();
        let module = self.get(&name).ok_or_else(|| {
            warn!(module = %name, "Settings addressed to unregistered module");
            SettingsError::UnknownModule { name: name.clone() }
        })?;

        debug!(
            module = %name,
            integration_id = %options.integration_id(),
            function = PROCESS_SETTINGS,
            "Invoking connector module"
        );

        match module.process_settings(options).await {
            Ok(value) => {
                info!(module = %name, function = PROCESS_SETTINGS, "Settings processed");
                Ok(value)
            }
            Err(err) => {
                info!(
                    module = %name,
                    function = PROCESS_SETTINGS,
                    error = %err,
                    "Connector module reported an error"
                );
                Err(err.into())
            }
        }
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.names())
            .finish()
    }
}
