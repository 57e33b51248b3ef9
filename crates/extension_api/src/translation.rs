//! Translation between HTTP types and domain types
//!
//! Translation happens at the API boundary and includes validation of the
//! required settings fields.

use extension_core::SettingsOptions;

use crate::{errors::ApiError, models::request::SettingsRequest};

#[cfg(test)]
#[path = "translation_tests.rs"]
mod tests;

/// Convert an HTTP SettingsRequest to validated domain SettingsOptions.
///
/// A missing `postBody` is treated as an empty one, so each of its required
/// fields is reported individually.
///
/// # Errors
///
/// Returns `ApiError::Settings` listing every missing required field.
pub fn http_settings_request_to_domain(
    http_req: SettingsRequest,
) -> Result<SettingsOptions, ApiError> {
    let repository_name = http_req.repository.and_then(|repository| repository.name);
    let post_body = http_req.post_body.unwrap_or_default();

    Ok(SettingsOptions::try_new(repository_name, post_body)?)
}
