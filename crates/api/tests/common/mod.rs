#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use notifyhub_api::config::ServerConfig;
use notifyhub_api::router::build_app_router;
use notifyhub_api::state::AppState;
use notifyhub_store::NotificationStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application router around an empty store.
pub fn build_test_app() -> Router {
    build_test_app_with(NotificationStore::new())
}

/// Build the full application router around the demo data set
/// (ids 1-3; users 1, 1, 2; id 2 already read).
pub fn build_seeded_app() -> Router {
    build_test_app_with(NotificationStore::with_seed_data())
}

/// Build the full application router with all middleware layers, using the
/// same builder as `main.rs`.
pub fn build_test_app_with(store: NotificationStore) -> Router {
    build_app_with_config(store, &test_config())
}

/// Build the router with an explicit configuration, e.g. the env defaults.
pub fn build_app_with_config(store: NotificationStore, config: &ServerConfig) -> Router {
    build_app_router(AppState::new(store), config)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn patch(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
