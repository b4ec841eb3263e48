//! Route definitions for the `/notifications` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /                          -> list_notifications
/// POST   /                          -> create_notification
/// POST   /broadcast                 -> broadcast
/// GET    /{id}                      -> get_notification
/// DELETE /{id}                      -> delete_notification
/// PATCH  /{id}/read                 -> mark_read
///
/// PATCH  /user/{user_id}/read-all   -> mark_all_read
/// GET    /user/{user_id}/stats      -> user_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notification::list_notifications).post(notification::create_notification),
        )
        .route("/broadcast", post(notification::broadcast))
        .route(
            "/{id}",
            get(notification::get_notification).delete(notification::delete_notification),
        )
        .route("/{id}/read", patch(notification::mark_read))
        // Per-user endpoints
        .route("/user/{user_id}/read-all", patch(notification::mark_all_read))
        .route("/user/{user_id}/stats", get(notification::user_stats))
}
