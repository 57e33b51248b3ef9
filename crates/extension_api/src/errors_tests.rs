//! Tests for error handling and HTTP conversion

use super::*;
use axum::http::StatusCode;
use extension_core::ModuleError;
use serde_json::json;

async fn response_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_field_error_response() {
    let error = ApiError::from(SettingsError::missing_fields(["bearerToken"]));

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response_json(response).await,
        json!({
            "errors": [{
                "field": "bearerToken",
                "code": "missing_required_field",
                "message": "missing required field in request",
                "source": "adaptor"
            }]
        })
    );
}

#[tokio::test]
async fn test_module_error_response() {
    let error = ApiError::from(SettingsError::from(ModuleError::new(
        "Error",
        "processSettings",
    )));

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response_json(response).await,
        json!({ "errors": [{ "code": "Error", "message": "processSettings" }] })
    );
}

#[tokio::test]
async fn test_invalid_body_response() {
    let error = ApiError::InvalidBody("expected value at line 1 column 1".to_string());

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await,
        json!({
            "errors": [{
                "code": "invalid_request_body",
                "message": "expected value at line 1 column 1",
                "source": "adaptor"
            }]
        })
    );
}

#[test]
fn test_unknown_module_status() {
    let error = ApiError::from(SettingsError::UnknownModule {
        name: "missing".to_string(),
    });

    assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error.to_error_response().errors[0].code, "invalid_module");
}

#[test]
fn test_api_error_display() {
    let error = ApiError::InvalidBody("bad".to_string());
    assert_eq!(error.to_string(), "Invalid request body: bad");

    let error = ApiError::from(SettingsError::missing_fields(["_integrationId"]));
    assert_eq!(
        error.to_string(),
        "Missing required fields in request: _integrationId"
    );
}

#[test]
fn test_error_response_round_trips_through_json() {
    let response = ErrorResponse::new(vec![ErrorDetail::new("unauthorized", "invalid system token")
        .from_adaptor()]);

    let text = serde_json::to_string(&response).unwrap();
    let parsed: ErrorResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, response);
}
