//! Assertions over adaptor responses

use reqwest::StatusCode;
use serde_json::Value;
use test_utils::SettingsResponse;

#[cfg(test)]
#[path = "assertions_tests.rs"]
mod tests;

/// Assert the response has `status` and a body deep-equal to `expected_body`.
///
/// # Panics
///
/// Panics with the actual status and body if either differs.
pub fn assert_response(response: &SettingsResponse, status: StatusCode, expected_body: &Value) {
    assert_eq!(
        response.status, status,
        "unexpected status {} with body {}",
        response.status, response.body
    );
    assert_eq!(
        &response.body, expected_body,
        "response body differs from expected"
    );
}

/// Assert a response header is present with exactly `expected`.
///
/// Header names are matched case-insensitively.
///
/// # Panics
///
/// Panics if the header is missing, not valid UTF-8, or has another value.
pub fn assert_header(response: &SettingsResponse, name: &str, expected: &str) {
    match response.header(name) {
        Some(actual) => assert_eq!(actual, expected, "unexpected value for header '{}'", name),
        None => panic!(
            "response has no '{}' header; headers were {:?}",
            name, response.headers
        ),
    }
}
