//! Request DTOs accepted by the store.

use notifyhub_core::notification::DEFAULT_NOTIFICATION_TYPE;
use notifyhub_core::types::DbId;
use serde::Deserialize;

/// DTO for creating a single notification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub user_id: DbId,
    pub message: String,
    /// Defaults to `"general"` when omitted.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CreateNotification {
    pub fn new(user_id: DbId, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
            kind: None,
        }
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The type tag to store, falling back to the default.
    pub fn kind_or_default(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_NOTIFICATION_TYPE)
    }
}
