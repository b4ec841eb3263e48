//! Notification entity, status transitions, filtering and per-user statistics.
//!
//! Everything here operates on plain values or slices handed in by the
//! caller. Locking and id assignment live in the store crate.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Type tag used when a created notification does not specify one.
pub const DEFAULT_NOTIFICATION_TYPE: &str = "general";

/// Type tag used by broadcast when the caller does not specify one.
pub const DEFAULT_BROADCAST_TYPE: &str = "announcement";

/// Maximum length of a notification type tag.
pub const MAX_TYPE_LENGTH: usize = 64;

pub const STATUS_UNREAD: &str = "unread";
pub const STATUS_READ: &str = "read";

/// All valid status strings.
pub const VALID_STATUSES: &[&str] = &[STATUS_UNREAD, STATUS_READ];

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Read state of a notification. New notifications always start `Unread`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Unread,
    Read,
}

impl NotificationStatus {
    /// Parse a status from its wire string.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_UNREAD => Ok(Self::Unread),
            STATUS_READ => Ok(Self::Read),
            _ => Err(CoreError::Validation(format!(
                "Invalid notification status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => STATUS_UNREAD,
            Self::Read => STATUS_READ,
        }
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A single message delivered to a single user.
///
/// `read_at` is `Some` exactly when `status` is [`NotificationStatus::Read`];
/// go through [`Notification::new_unread`] and [`Notification::mark_read`]
/// rather than assigning the fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: NotificationStatus,
    pub created_at: Timestamp,
    pub read_at: Option<Timestamp>,
}

impl Notification {
    /// Build a notification in its initial state.
    pub fn new_unread(
        id: DbId,
        user_id: DbId,
        message: impl Into<String>,
        kind: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            message: message.into(),
            kind: kind.into(),
            status: NotificationStatus::Unread,
            created_at: now,
            read_at: None,
        }
    }

    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }

    /// Transition `unread` -> `read`, stamping `read_at` with `now`.
    ///
    /// Already-read notifications keep their original `read_at`. Returns
    /// `true` if a transition happened.
    pub fn mark_read(&mut self, now: Timestamp) -> bool {
        if !self.is_unread() {
            return false;
        }
        self.status = NotificationStatus::Read;
        self.read_at = Some(now);
        true
    }
}

// ---------------------------------------------------------------------------
// Filtering and ordering
// ---------------------------------------------------------------------------

/// Optional, independently applied list filters. Both given means AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationFilter {
    pub user_id: Option<DbId>,
    pub status: Option<NotificationStatus>,
}

impl NotificationFilter {
    pub fn for_user(user_id: DbId) -> Self {
        Self {
            user_id: Some(user_id),
            status: None,
        }
    }

    pub fn with_status(mut self, status: NotificationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        self.user_id.map_or(true, |u| notification.user_id == u)
            && self.status.map_or(true, |s| notification.status == s)
    }
}

/// Order by `created_at`, most recent first. Ties keep their input order.
pub fn sort_newest_first(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Distinct user ids appearing in `notifications`, ascending.
pub fn known_user_ids<'a>(
    notifications: impl IntoIterator<Item = &'a Notification>,
) -> BTreeSet<DbId> {
    notifications.into_iter().map(|n| n.user_id).collect()
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Per-user aggregate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStats {
    pub user_id: DbId,
    pub total: usize,
    pub unread: usize,
    pub read: usize,
    pub by_type: BTreeMap<String, usize>,
}

impl NotificationStats {
    /// Aggregate the notifications owned by `user_id`. Other users' records
    /// in the input are ignored.
    pub fn for_user<'a>(
        user_id: DbId,
        notifications: impl IntoIterator<Item = &'a Notification>,
    ) -> Self {
        let mut total = 0;
        let mut unread = 0;
        let mut by_type = BTreeMap::new();

        for n in notifications.into_iter().filter(|n| n.user_id == user_id) {
            total += 1;
            if n.is_unread() {
                unread += 1;
            }
            *by_type.entry(n.kind.clone()).or_insert(0) += 1;
        }

        Self {
            user_id,
            total,
            unread,
            read: total - unread,
            by_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A message must contain at least one non-whitespace character.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation(
            "message must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// A type tag must be non-empty and at most [`MAX_TYPE_LENGTH`] characters.
pub fn validate_notification_type(kind: &str) -> Result<(), CoreError> {
    if kind.trim().is_empty() {
        return Err(CoreError::Validation("type must not be empty".to_string()));
    }
    let len = kind.chars().count();
    if len > MAX_TYPE_LENGTH {
        return Err(CoreError::Validation(format!(
            "type must be at most {MAX_TYPE_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
