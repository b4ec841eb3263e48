//! Handlers for the `/notifications` resource.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notifyhub_core::notification::{
    validate_message, validate_notification_type, Notification, NotificationStats,
};
use notifyhub_core::types::DbId;
use notifyhub_store::CreateNotification;

use crate::error::AppResult;
use crate::query::{BroadcastParams, NotificationQuery};
use crate::response::CountResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Single notifications
// ---------------------------------------------------------------------------

/// GET /notifications
///
/// List notifications, optionally filtered by `userId` and `status`,
/// newest first.
pub async fn list_notifications(
    State(state): State<AppState>,
    params: Result<Query<NotificationQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Notification>>> {
    let Query(params) = params?;
    let filter = params.into_filter()?;

    Ok(Json(state.store.list(filter).await))
}

/// GET /notifications/{id}
pub async fn get_notification(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Notification>> {
    let Path(id) = id?;

    Ok(Json(state.store.get_by_id(id).await?))
}

/// POST /notifications
///
/// Create an unread notification. Returns 201 with the stored record, or
/// 422 when `userId`/`message` are missing or the message is blank.
pub async fn create_notification(
    State(state): State<AppState>,
    input: Result<Json<CreateNotification>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input?;
    validate_message(&input.message)?;
    if let Some(kind) = &input.kind {
        validate_notification_type(kind)?;
    }

    let notification = state.store.create(input).await;

    Ok((StatusCode::CREATED, Json(notification)))
}

/// PATCH /notifications/{id}/read
///
/// Mark a single notification as read and return it. Repeating the call
/// on a read notification returns it unchanged.
pub async fn mark_read(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Notification>> {
    let Path(id) = id?;

    Ok(Json(state.store.mark_read(id).await?))
}

/// DELETE /notifications/{id}
///
/// Returns 204 No Content on success, 404 if the id does not exist.
pub async fn delete_notification(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.store.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Per-user
// ---------------------------------------------------------------------------

/// PATCH /notifications/user/{user_id}/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    user_id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<CountResponse>> {
    let Path(user_id) = user_id?;
    let count = state.store.mark_all_read_for_user(user_id).await;

    Ok(Json(CountResponse {
        message: format!("{count} notifications marked as read"),
        count,
    }))
}

/// GET /notifications/user/{user_id}/stats
pub async fn user_stats(
    State(state): State<AppState>,
    user_id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<NotificationStats>> {
    let Path(user_id) = user_id?;

    Ok(Json(state.store.stats_for_user(user_id).await))
}

// ---------------------------------------------------------------------------
// Broadcast
// ---------------------------------------------------------------------------

/// POST /notifications/broadcast?message=&notification_type=
///
/// Send one notification to every user that already has at least one.
pub async fn broadcast(
    State(state): State<AppState>,
    params: Result<Query<BroadcastParams>, QueryRejection>,
) -> AppResult<Json<CountResponse>> {
    let Query(params) = params?;
    validate_message(&params.message)?;
    if let Some(kind) = &params.notification_type {
        validate_notification_type(kind)?;
    }

    let count = state
        .store
        .broadcast(&params.message, params.notification_type.as_deref())
        .await;

    Ok(Json(CountResponse {
        message: format!("Notification broadcast to {count} users"),
        count,
    }))
}
