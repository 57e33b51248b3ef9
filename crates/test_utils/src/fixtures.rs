//! Request fixtures and expected responses for the settings contract

use serde_json::{Value, json};

/// Connector module the fixtures address
pub const DUMMY_MODULE: &str = "dummy-module";

/// Integration identifier placed in fixtures
pub const INTEGRATION_ID: &str = "_integrationId";

/// A system token the adaptor must reject
pub const BAD_SYSTEM_TOKEN: &str = "BAD_INTEGRATOR_EXTENSION_SYSTEM_TOKEN";

/// Complete settings payload: one of two fields changed.
pub fn settings_post_body(bearer_token: &str) -> Value {
    json!({
        "persisted": { "fieldOne": "oldValue", "fieldTwo": "oldValue" },
        "pending": { "fieldOne": "oldValue", "fieldTwo": "newValue" },
        "delta": { "fieldTwo": "newValue" },
        "bearerToken": bearer_token,
        "_integrationId": INTEGRATION_ID
    })
}

/// Wrap a post body in a request addressed to [`DUMMY_MODULE`]
pub fn settings_request(post_body: Value) -> Value {
    json!({
        "repository": { "name": DUMMY_MODULE },
        "postBody": post_body
    })
}

/// Remove a top-level member from a JSON object fixture.
///
/// Panics if `value` is not an object or has no such member, since either
/// means the fixture is wrong.
pub fn without(mut value: Value, member: &str) -> Value {
    let removed = value
        .as_object_mut()
        .and_then(|object| object.remove(member));
    assert!(removed.is_some(), "fixture has no member '{}'", member);
    value
}

/// Expected body for a request missing `field`
pub fn missing_required_field(field: &str) -> Value {
    json!({
        "errors": [{
            "field": field,
            "code": "missing_required_field",
            "message": "missing required field in request",
            "source": "adaptor"
        }]
    })
}

/// Expected body for a rejected system token
pub fn unauthorized() -> Value {
    json!({
        "errors": [{
            "code": "unauthorized",
            "message": "invalid system token",
            "source": "adaptor"
        }]
    })
}

/// Expected body when `processSettings` fails
pub fn process_settings_error() -> Value {
    json!({ "errors": [{ "code": "Error", "message": "processSettings" }] })
}
