use axum::{routing::get, Json, Router};
use notifyhub_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "notification-service";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: Timestamp,
}

/// GET /health -- the store is in-process, so reachable means healthy.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now(),
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
