//! Shared test helpers for composer client tests.

#![allow(dead_code)]

use composer_client::StoreConfig;
use wiremock::MockServer;

/// Initializes test logging once; respects `RUST_LOG` when set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("composer_client=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Returns a config pointing at the mock server, nothing attached.
pub fn mock_config(server: &MockServer) -> StoreConfig {
    StoreConfig::new(server.uri())
}

/// A minimal OK head snapshot as the backend serializes it.
pub fn head_body() -> serde_json::Value {
    serde_json::json!({
        "name": "demo",
        "commit": "a1b2c3",
        "contentType": "OK",
        "revisions": {
            "rev-1": {
                "id": "rev-1",
                "version": "v1",
                "created": "2023-01-15T10:30:00",
                "updated": "2023-01-16T08:00:00",
                "name": "main",
                "head": "val-1",
                "values": [
                    {
                        "id": "val-1",
                        "revisionName": "first",
                        "defId": "def-1",
                        "created": "2023-01-15T10:30:00",
                        "updated": "2023-01-15T10:30:00"
                    }
                ]
            }
        },
        "definitions": {},
        "releases": {},
        "configs": {}
    })
}

/// A minimal joined definition view as the backend serializes it.
pub fn definition_body() -> serde_json::Value {
    serde_json::json!({
        "definition": {
            "id": "def-1",
            "version": "v1",
            "created": "2023-01-15T10:30:00",
            "updated": "2023-01-15T10:30:00",
            "refs": [],
            "processes": [
                {
                    "id": "proc-1",
                    "name": "claim",
                    "desc": "claim intake",
                    "flowId": "flow-1",
                    "formId": "form-1"
                }
            ]
        },
        "dialob": {"forms": {}, "revs": {}},
        "stencil": {"sites": {}},
        "hdes": {"flows": {}, "services": {}, "decisions": {}}
    })
}

/// A service error payload; `errors` stays empty.
pub fn error_body(text: &str, status: u16) -> serde_json::Value {
    serde_json::json!({"text": text, "status": status, "errors": []})
}
