//! Tests for response assertions

use super::*;
use reqwest::header::{HeaderMap, HeaderValue, WWW_AUTHENTICATE};
use serde_json::json;

fn response(status: StatusCode, body: Value) -> SettingsResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        WWW_AUTHENTICATE,
        HeaderValue::from_static("invalid system token"),
    );
    SettingsResponse {
        status,
        headers,
        body,
    }
}

#[test]
fn test_assert_response_matches() {
    let actual = response(StatusCode::OK, json!({ "a": [1, 2], "b": { "c": null } }));

    assert_response(
        &actual,
        StatusCode::OK,
        &json!({ "b": { "c": null }, "a": [1, 2] }),
    );
}

#[test]
#[should_panic(expected = "unexpected status")]
fn test_assert_response_status_mismatch() {
    let actual = response(StatusCode::UNPROCESSABLE_ENTITY, json!({}));

    assert_response(&actual, StatusCode::OK, &json!({}));
}

#[test]
#[should_panic(expected = "response body differs")]
fn test_assert_response_body_mismatch() {
    let actual = response(StatusCode::OK, json!({ "functionName": "processSettings" }));

    assert_response(&actual, StatusCode::OK, &json!({}));
}

#[test]
fn test_assert_header_is_case_insensitive() {
    let actual = response(StatusCode::UNAUTHORIZED, json!({}));

    assert_header(&actual, "WWW-Authenticate", "invalid system token");
    assert_header(&actual, "www-authenticate", "invalid system token");
}

#[test]
#[should_panic(expected = "has no 'x-request-id' header")]
fn test_assert_header_missing() {
    let actual = response(StatusCode::OK, json!({}));

    assert_header(&actual, "x-request-id", "abc");
}
