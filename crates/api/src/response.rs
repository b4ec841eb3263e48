//! Shared response body types for API handlers.
//!
//! Prefer these over ad-hoc `serde_json::json!` bodies to get compile-time
//! type safety and consistent serialization.

use serde::Serialize;

/// Body returned by bulk operations: a human-readable summary plus the
/// number of notifications affected.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub message: String,
    pub count: usize,
}
