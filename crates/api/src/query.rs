//! Query parameter types for the notification endpoints.

use std::fmt::Display;
use std::str::FromStr;

use notifyhub_core::notification::{NotificationFilter, NotificationStatus};
use notifyhub_core::types::DbId;
use serde::{de, Deserialize, Deserializer};

use crate::error::{AppError, AppResult};

/// Query parameters for `GET /notifications` (`?userId=&status=`).
#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    #[serde(rename = "userId", default, deserialize_with = "empty_as_none")]
    pub user_id: Option<DbId>,
    pub status: Option<String>,
}

impl NotificationQuery {
    /// Convert to a store filter. An empty `userId` or `status` means no
    /// filter on that field; an unrecognised status is a bad request.
    pub fn into_filter(self) -> AppResult<NotificationFilter> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                NotificationStatus::from_str_value(raw)
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            ),
        };

        Ok(NotificationFilter {
            user_id: self.user_id,
            status,
        })
    }
}

/// Deserialize an optional query value, treating `key=` like an absent key.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Query parameters for `POST /notifications/broadcast`.
#[derive(Debug, Deserialize)]
pub struct BroadcastParams {
    pub message: String,
    /// Defaults to `"announcement"` when omitted.
    pub notification_type: Option<String>,
}
