//! # Integration Tests for tlm-api
//!
//! Drives the assembled router end to end: format selection from headers,
//! acceptance envelope, uniform client-error responses, body limits, health
//! probes, and metrics exposition.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use tlm_api::{AppConfig, AppState};
use tlm_core::ValidatorConfig;

/// Helper: build the test app with default configuration.
fn test_app() -> axum::Router {
    tlm_api::app(AppState::new())
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/telemetry")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn post_gzip(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/telemetry")
        .header("content-type", "application/octet-stream")
        .header("content-encoding", "gzip")
        .body(Body::from(body))
        .unwrap()
}

async fn assert_invalid_request_data(response: axum::http::Response<Body>) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_REQUESTED_DATA");
    assert!(body["error"]["message"].is_string());
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- JSON submissions ---------------------------------------------------------

#[tokio::test]
async fn test_flat_form_accepted() {
    let response = test_app()
        .oneshot(post_json(r#"{"events":[{"eid":"START"}]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "api.telemetry");
    assert_eq!(body["responseCode"], "OK");
    assert_eq!(body["params"]["status"], "successful");
    assert!(body["params"]["resmsgid"].is_string());
}

#[tokio::test]
async fn test_wrapped_form_accepted() {
    let response = test_app()
        .oneshot(post_json(r#"{"request":{"events":[{"eid":"START"}]}}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_rejected_without_reason() {
    let response = test_app()
        .oneshot(post_json("not valid json{{{"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_REQUESTED_DATA");
    assert_eq!(
        body["error"]["message"],
        "Requested data for this operation is not valid."
    );
}

#[tokio::test]
async fn test_missing_events_rejected() {
    for payload in [r#"{"foo":"bar"}"#, r#"{"events":[]}"#, r#"{"request":{}}"#] {
        let response = test_app().oneshot(post_json(payload)).await.unwrap();
        assert_invalid_request_data(response).await;
    }
}

#[tokio::test]
async fn test_non_utf8_json_body_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/telemetry")
        .header("content-type", "application/json")
        .body(Body::from(vec![0xff, 0xfe, 0xfd]))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_invalid_request_data(response).await;
}

#[tokio::test]
async fn test_missing_content_type_defaults_to_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/telemetry")
        .body(Body::from(r#"{"events":[{}]}"#))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Binary submissions -------------------------------------------------------

#[tokio::test]
async fn test_gzip_upload_accepted_without_inspection() {
    // Not a valid gzip stream; the validator never decompresses.
    let response = test_app()
        .oneshot(post_gzip(vec![0x00, 0x01, 0x02]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_gzip_upload_rejected() {
    let response = test_app().oneshot(post_gzip(Vec::new())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_REQUESTED_DATA");
    assert_eq!(
        body["error"]["message"],
        "Invalid file: binary payload is empty."
    );
}

#[tokio::test]
async fn test_json_text_sent_as_gzip_is_accepted_as_bytes() {
    let response = test_app()
        .oneshot(post_gzip(br#"{"foo":"bar"}"#.to_vec()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Limits -------------------------------------------------------------------

#[tokio::test]
async fn test_body_limit_enforced() {
    let config = AppConfig {
        max_body_bytes: 16,
        ..AppConfig::default()
    };
    let app = tlm_api::app(AppState::with_config(config));
    let response = app
        .oneshot(post_gzip(vec![0u8; 64]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_event_ceiling_enforced_when_configured() {
    let config = AppConfig {
        validator: ValidatorConfig {
            max_events: 1,
            enforce_max_events: true,
            ..ValidatorConfig::default()
        },
        ..AppConfig::default()
    };
    let app = tlm_api::app(AppState::with_config(config));
    let response = app
        .oneshot(post_json(r#"{"events":[{},{}]}"#))
        .await
        .unwrap();
    assert_invalid_request_data(response).await;
}

#[tokio::test]
async fn test_event_ceiling_inert_by_default() {
    let config = AppConfig {
        validator: ValidatorConfig {
            max_events: 1,
            ..ValidatorConfig::default()
        },
        ..AppConfig::default()
    };
    let app = tlm_api::app(AppState::with_config(config));
    let response = app
        .oneshot(post_json(r#"{"events":[{},{}]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Metrics ------------------------------------------------------------------

#[tokio::test]
async fn test_metrics_record_submission_outcomes() {
    let state = AppState::new();
    let app = tlm_api::app(state.clone());

    app.clone()
        .oneshot(post_json(r#"{"events":[{}]}"#))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json(r#"{"events":[]}"#))
        .await
        .unwrap();
    app.clone().oneshot(post_gzip(Vec::new())).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_string(response).await;
    assert!(text.contains("tlm_submissions_total"));
    assert!(text.contains(r#"outcome="accepted""#));
    assert!(text.contains(r#"outcome="events_missing""#));
    assert!(text.contains(r#"outcome="empty_or_missing_payload""#));
    assert!(text.contains("tlm_http_requests_total"));
    assert_eq!(state.metrics.errors(), 2);
}

#[tokio::test]
async fn test_metrics_endpoint_absent_when_disabled() {
    let config = AppConfig {
        metrics_enabled: false,
        ..AppConfig::default()
    };
    let response = tlm_api::app(AppState::with_config(config))
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
