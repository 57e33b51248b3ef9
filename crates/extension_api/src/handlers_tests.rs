//! Tests for handlers module

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use extension_core::{DummyModule, ModuleRegistry};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::routes::create_router;

const SYSTEM_TOKEN: &str = "test-system-token";

/// Helper function to create a test app state with the reference module
fn test_app_state() -> AppState {
    AppState::new(
        SYSTEM_TOKEN,
        ModuleRegistry::new().with_module(Arc::new(DummyModule)),
    )
}

fn settings_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/settings")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", SYSTEM_TOKEN))
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response: Response = create_router(test_app_state())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn full_post_body() -> Value {
    json!({
        "persisted": { "fieldOne": "oldValue", "fieldTwo": "oldValue" },
        "pending": { "fieldOne": "oldValue", "fieldTwo": "newValue" },
        "delta": { "fieldTwo": "newValue" },
        "bearerToken": "bearer-123",
        "_integrationId": "_integrationId"
    })
}

// ============================================================================
// Health Check Tests
// ============================================================================

/// Test that health check handler returns proper JSON response
#[tokio::test]
async fn test_health_check_returns_json() {
    let response = health_check(State(test_app_state())).await;

    assert_eq!(response.0.status, "healthy");
    assert_eq!(response.0.version, Some(env!("CARGO_PKG_VERSION").to_string()));
    assert_eq!(response.0.modules, vec!["dummy-module".to_string()]);
}

/// Test that health check timestamp is valid ISO 8601
#[tokio::test]
async fn test_health_check_timestamp_format() {
    let response = health_check(State(test_app_state())).await;

    let parsed = chrono::DateTime::parse_from_rfc3339(&response.0.timestamp);
    assert!(parsed.is_ok(), "Timestamp should be valid ISO 8601 format");
}

// ============================================================================
// Settings Handler Tests
// ============================================================================

/// Test that a complete payload is echoed back with the function name
#[tokio::test]
async fn test_process_settings_success() {
    let request_body = json!({
        "repository": { "name": "dummy-module" },
        "postBody": full_post_body()
    });

    let (status, body) = send(settings_request(&request_body)).await;

    assert_eq!(status, StatusCode::OK);
    let mut expected = full_post_body();
    expected["functionName"] = json!("processSettings");
    assert_eq!(body, expected);
}

/// Test that a module error becomes a 422 without field or source
#[tokio::test]
async fn test_process_settings_module_error() {
    let request_body = json!({
        "repository": { "name": "dummy-module" },
        "postBody": {
            "error": true,
            "bearerToken": "bearer-123",
            "_integrationId": "_integrationId"
        }
    });

    let (status, body) = send(settings_request(&request_body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({ "errors": [{ "code": "Error", "message": "processSettings" }] })
    );
}

/// Test that every missing field is reported in one envelope
#[tokio::test]
async fn test_process_settings_reports_all_missing_fields() {
    let (status, body) = send(settings_request(&json!({}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["bearerToken", "_integrationId", "repository.name"]);
}

/// Test that a missing repository name uses the dotted field path
#[tokio::test]
async fn test_process_settings_missing_repository_name() {
    let request_body = json!({ "postBody": full_post_body() });

    let (status, body) = send(settings_request(&request_body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "errors": [{
                "field": "repository.name",
                "code": "missing_required_field",
                "message": "missing required field in request",
                "source": "adaptor"
            }]
        })
    );
}

/// Test that settings for an unregistered module are rejected
#[tokio::test]
async fn test_process_settings_unknown_module() {
    let request_body = json!({
        "repository": { "name": "other-module" },
        "postBody": full_post_body()
    });

    let (status, body) = send(settings_request(&request_body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "errors": [{
                "field": "repository.name",
                "code": "invalid_module",
                "message": "module other-module is not registered",
                "source": "adaptor"
            }]
        })
    );
}

/// Test that malformed JSON is reported in the error envelope
#[tokio::test]
async fn test_process_settings_malformed_json() {
    let request = Request::builder()
        .method("PUT")
        .uri("/settings")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", SYSTEM_TOKEN))
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["code"], "invalid_request_body");
    assert_eq!(body["errors"][0]["source"], "adaptor");
}

/// Test that a post body of the wrong type is reported as a bad body
#[tokio::test]
async fn test_process_settings_non_object_post_body() {
    let request_body = json!({
        "repository": { "name": "dummy-module" },
        "postBody": ["bearerToken"]
    });

    let (status, body) = send(settings_request(&request_body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["code"], "invalid_request_body");
}

/// Test that the token is checked before the body is looked at
#[tokio::test]
async fn test_process_settings_checks_token_before_body() {
    let request = Request::builder()
        .method("PUT")
        .uri("/settings")
        .header("content-type", "application/json")
        .header("authorization", "Bearer wrong")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0]["code"], "unauthorized");
}

/// Test that repeating a request yields the same body
#[tokio::test]
async fn test_process_settings_is_idempotent() {
    let request_body = json!({
        "repository": { "name": "dummy-module" },
        "postBody": full_post_body()
    });

    let (_, first) = send(settings_request(&request_body)).await;
    let (_, second) = send(settings_request(&request_body)).await;

    assert_eq!(first, second);
}
