//! HTTP request and response models
//!
//! These types exist only in the HTTP layer and are translated to and from
//! `extension_core` types at the API boundary.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{RepositoryRequest, SettingsRequest};
pub use response::HealthCheckResponse;
