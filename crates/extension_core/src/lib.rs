//! # Integrator Extension Core
//!
//! Domain logic for the integrator extension adaptor. The adaptor receives
//! settings updates for an integration, validates them, and hands them to the
//! connector module named by the request's repository.
//!
//! ## Overview
//!
//! - [`SettingsOptions`] is a validated settings request. Building one checks
//!   that the required fields are present.
//! - [`ConnectorModule`] is the seam a connector implements to process settings.
//! - [`ModuleRegistry`] maps repository names to connector modules and
//!   dispatches validated settings to them.
//! - [`ErrorDetail`] is the wire shape of a single entry in an `errors`
//!   envelope, shared by the HTTP layer and its clients.
//!
//! This crate knows nothing about HTTP. Status codes and headers belong to
//! `extension_api`.

pub mod errors;
pub mod modules;
pub mod settings;

pub use errors::{ErrorDetail, ModuleError, SettingsError};
pub use modules::{builtin_module, dummy::DummyModule, ConnectorModule, ModuleRegistry};
pub use settings::SettingsOptions;

/// Source tag attached to errors raised by the adaptor itself
pub const ADAPTOR_SOURCE: &str = "adaptor";

/// Name of the connector function invoked for settings updates
pub const PROCESS_SETTINGS: &str = "processSettings";

/// Wire names of the fields the adaptor inspects.
pub mod fields {
    pub const BEARER_TOKEN: &str = "bearerToken";
    pub const INTEGRATION_ID: &str = "_integrationId";
    pub const REPOSITORY_NAME: &str = "repository.name";
    pub const PERSISTED: &str = "persisted";
    pub const PENDING: &str = "pending";
    pub const DELTA: &str = "delta";
    pub const ERROR: &str = "error";
    pub const FUNCTION_NAME: &str = "functionName";
}
