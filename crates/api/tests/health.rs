//! Integration tests for the health endpoint and the shared middleware
//! stack (request ids, CORS) as seen through the notification routes.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use common::{body_json, get, patch};
use notifyhub_api::config::ServerConfig;
use notifyhub_store::NotificationStore;
use tower::ServiceExt;

/// Send a CORS preflight for `PATCH uri` from `origin`.
async fn preflight(app: Router, uri: &str, origin: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap())
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_service_name_and_timestamp() {
    let response = get(common::build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["service"], "notification-service");
    assert!(json["version"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn unmounted_path_returns_404() {
    let response = get(common::build_test_app(), "/products").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Request ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mark_read_response_carries_generated_request_id() {
    let response = patch(common::build_seeded_app(), "/notifications/1/read").await;

    assert_eq!(response.status(), StatusCode::OK);
    let request_id = header(&response, "x-request-id").expect("missing x-request-id");
    assert_eq!(request_id.len(), 36, "x-request-id should be a UUID string");
}

#[tokio::test]
async fn error_responses_carry_request_id_too() {
    let response = patch(common::build_test_app(), "/notifications/999/read").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(header(&response, "x-request-id").is_some());
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn configured_origin_is_echoed_with_credentials() {
    let response = preflight(
        common::build_seeded_app(),
        "/notifications/1/read",
        "http://localhost:5173",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header(&response, "access-control-allow-origin"),
        Some("http://localhost:5173")
    );
    assert_eq!(header(&response, "access-control-allow-credentials"), Some("true"));
    let methods = header(&response, "access-control-allow-methods").unwrap();
    assert!(methods.contains("PATCH"), "got: {methods}");
}

#[tokio::test]
async fn default_config_allows_any_origin_without_credentials() {
    let config = ServerConfig::from_lookup(|_| None);
    let app = common::build_app_with_config(NotificationStore::with_seed_data(), &config);

    let response = preflight(app, "/notifications/user/1/read-all", "http://x.test").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "access-control-allow-origin"), Some("*"));
    assert!(header(&response, "access-control-allow-credentials").is_none());
}
