// Integration tests for reconfiguration semantics: each configure call
// replaces the whole snapshot, so flags never accumulate across reloads.

mod common;

use axum::http::StatusCode;
use common::{body_string, create_test_app};
use pwa_delivery::pwa::PwaSettings;
use serde_json::json;

const NOOP_SCRIPT: &str = include_str!("../static/sw/service-worker-noop.js");

#[tokio::test]
async fn test_reconfigure_resets_omitted_fields() {
    let app = create_test_app(PwaSettings {
        enabled: true,
        scope: Some("/app".to_string()),
        manifest: Some(json!({"name": "One App", "short_name": "one-app"})),
        ..Default::default()
    });

    // Enabled with scope and manifest: everything serves.
    let response = app.get(&app.worker_path()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("Service-Worker-Allowed").is_some());
    assert_eq!(
        app.get(&app.manifest_path()).await.status(),
        StatusCode::OK
    );

    // Reload supplying only `noop`: enabled, scope and manifest all reset.
    app.pwa.configure(PwaSettings {
        noop: true,
        ..Default::default()
    });

    let response = app.get(&app.worker_path()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("Service-Worker-Allowed").is_none());
    assert_eq!(body_string(response).await, NOOP_SCRIPT);

    assert_eq!(
        app.get(&app.manifest_path()).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_disabling_turns_both_endpoints_off() {
    let app = create_test_app(PwaSettings {
        enabled: true,
        noop: true,
        escape_hatch: true,
        manifest: Some(json!({"name": "One App"})),
        ..Default::default()
    });

    app.pwa.configure(PwaSettings {
        enabled: false,
        ..Default::default()
    });

    assert_eq!(
        app.get(&app.worker_path()).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get(&app.manifest_path()).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_escape_hatch_reachable_while_disabled() {
    let app = create_test_app(PwaSettings::default());

    app.pwa.configure(PwaSettings {
        escape_hatch: true,
        ..Default::default()
    });

    let response = app.get(&app.worker_path()).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The manifest stays gated on `enabled` alone.
    assert_eq!(
        app.get(&app.manifest_path()).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_requests_observe_one_snapshot_each() {
    let app = create_test_app(PwaSettings {
        noop: true,
        ..Default::default()
    });

    let before = app.get(&app.worker_path()).await;
    app.pwa.configure(PwaSettings::default());
    let after = app.get(&app.worker_path()).await;

    assert_eq!(before.status(), StatusCode::OK);
    assert_eq!(after.status(), StatusCode::NOT_FOUND);
}
