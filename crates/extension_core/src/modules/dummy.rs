//! Reference connector module
//!
//! `dummy-module` echoes the received `postBody` with the invoked function name
//! added. Setting `"error": true` in the body makes it fail instead. The
//! regression suite for the settings endpoint runs against this module.

use async_trait::async_trait;
use serde_json::Value;

use super::ConnectorModule;
use crate::{errors::ModuleError, fields, settings::SettingsOptions, PROCESS_SETTINGS};

#[cfg(test)]
#[path = "dummy_tests.rs"]
mod tests;

/// Registration name of [`DummyModule`]
pub const DUMMY_MODULE_NAME: &str = "dummy-module";

#[derive(Debug, Clone, Copy, Default)]
pub struct DummyModule;

#[async_trait]
impl ConnectorModule for DummyModule {
    fn name(&self) -> &str {
        DUMMY_MODULE_NAME
    }

    async fn process_settings(&self, options: SettingsOptions) -> Result<Value, ModuleError> {
        if options.error_requested() {
            return Err(ModuleError::new("Error", PROCESS_SETTINGS));
        }

        let mut body = options.into_post_body();
        body.insert(
            fields::FUNCTION_NAME.to_string(),
            Value::String(PROCESS_SETTINGS.to_string()),
        );
        Ok(Value::Object(body))
    }
}
