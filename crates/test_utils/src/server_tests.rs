//! Tests for the in-process adaptor

use super::*;
use crate::client::SettingsClient;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_spawn_binds_localhost() {
    let server = TestServer::spawn("system-token").unwrap();

    assert!(server.addr().ip().is_loopback());
    assert_ne!(server.addr().port(), 0);
    assert_eq!(
        server.base_url().as_str(),
        format!("http://127.0.0.1:{}/", server.addr().port())
    );
}

#[tokio::test]
async fn test_spawned_server_answers_settings_requests() {
    let server = TestServer::spawn("system-token").unwrap();
    let client = SettingsClient::new(server.base_url().clone()).unwrap();

    let response = client
        .put_settings(
            &json!({
                "repository": { "name": "dummy-module" },
                "postBody": { "bearerToken": "bearer", "_integrationId": "id" }
            }),
            "system-token",
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["functionName"], "processSettings");
}

#[tokio::test]
async fn test_spawn_with_no_modules_rejects_dummy_module() {
    let server = TestServer::spawn_with_modules("system-token", ModuleRegistry::new()).unwrap();
    let client = SettingsClient::new(server.base_url().clone()).unwrap();

    let response = client
        .put_settings(
            &json!({
                "repository": { "name": "dummy-module" },
                "postBody": { "bearerToken": "bearer", "_integrationId": "id" }
            }),
            "system-token",
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["code"], "invalid_module");
}
