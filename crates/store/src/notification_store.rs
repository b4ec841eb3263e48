use chrono::Utc;
use notifyhub_core::error::CoreError;
use notifyhub_core::notification::{
    known_user_ids, sort_newest_first, Notification, NotificationFilter, NotificationStats,
    DEFAULT_BROADCAST_TYPE,
};
use notifyhub_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::CreateNotification;
use crate::seed;

const ENTITY: &str = "Notification";

/// Collection plus the next id to hand out. Only ever touched under the lock.
struct StoreInner {
    notifications: Vec<Notification>,
    next_id: DbId,
}

impl StoreInner {
    fn position(&self, id: DbId) -> Result<usize, CoreError> {
        self.notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Single-owner notification collection.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Storage order is insertion order. Ids are
/// drawn from a monotonic counter and are never reused after a delete.
pub struct NotificationStore {
    inner: RwLock<StoreInner>,
}

impl NotificationStore {
    /// Create an empty store. The first id handed out is `1`.
    pub fn new() -> Self {
        Self::from_notifications(Vec::new())
    }

    /// Create a store pre-populated with the demo notifications.
    pub fn with_seed_data() -> Self {
        Self::from_notifications(seed::demo_notifications(Utc::now()))
    }

    fn from_notifications(notifications: Vec<Notification>) -> Self {
        let next_id = notifications.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(StoreInner {
                notifications,
                next_id,
            }),
        }
    }

    /// Number of notifications currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.notifications.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Notifications matching `filter`, newest first.
    pub async fn list(&self, filter: NotificationFilter) -> Vec<Notification> {
        let mut matching: Vec<Notification> = self
            .inner
            .read()
            .await
            .notifications
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect();
        sort_newest_first(&mut matching);
        matching
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Notification, CoreError> {
        let inner = self.inner.read().await;
        let idx = inner.position(id)?;
        Ok(inner.notifications[idx].clone())
    }

    /// Append a new unread notification and return it.
    ///
    /// The message is stored as given; callers validate it beforehand.
    pub async fn create(&self, input: CreateNotification) -> Notification {
        let mut inner = self.inner.write().await;
        let id = inner.allocate_id();
        let notification = Notification::new_unread(
            id,
            input.user_id,
            input.message.as_str(),
            input.kind_or_default(),
            Utc::now(),
        );
        inner.notifications.push(notification.clone());
        drop(inner);

        tracing::info!(
            notification_id = id,
            user_id = notification.user_id,
            notification_type = %notification.kind,
            "Notification created"
        );
        notification
    }

    /// Mark one notification as read and return its current state.
    ///
    /// A notification that is already read is returned unchanged.
    pub async fn mark_read(&self, id: DbId) -> Result<Notification, CoreError> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;
        let notification = &mut inner.notifications[idx];
        if notification.mark_read(Utc::now()) {
            tracing::debug!(notification_id = id, "Notification marked read");
        }
        Ok(notification.clone())
    }

    /// Mark every unread notification of `user_id` as read.
    ///
    /// Returns how many notifications transitioned.
    pub async fn mark_all_read_for_user(&self, user_id: DbId) -> usize {
        let now = Utc::now();
        let mut inner = self.inner.write().await;
        let mut count = 0;
        for notification in inner.notifications.iter_mut() {
            if notification.user_id == user_id && notification.mark_read(now) {
                count += 1;
            }
        }
        drop(inner);

        tracing::info!(user_id, count, "Marked notifications read");
        count
    }

    /// Permanently remove a notification.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;
        inner.notifications.remove(idx);
        drop(inner);

        tracing::info!(notification_id = id, "Notification deleted");
        Ok(())
    }

    pub async fn stats_for_user(&self, user_id: DbId) -> NotificationStats {
        let inner = self.inner.read().await;
        NotificationStats::for_user(user_id, &inner.notifications)
    }

    /// Create one unread notification for every user that already owns at
    /// least one notification.
    ///
    /// Recipients are processed in ascending user id order and all records
    /// share one timestamp. Returns the number of notifications created,
    /// which is zero on an empty store.
    pub async fn broadcast(&self, message: &str, kind: Option<&str>) -> usize {
        let kind = kind.unwrap_or(DEFAULT_BROADCAST_TYPE);
        let now = Utc::now();

        let mut inner = self.inner.write().await;
        let recipients = known_user_ids(&inner.notifications);
        for user_id in &recipients {
            let id = inner.allocate_id();
            inner
                .notifications
                .push(Notification::new_unread(id, *user_id, message, kind, now));
        }
        drop(inner);

        let count = recipients.len();
        tracing::info!(count, notification_type = %kind, "Broadcast notification");
        count
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
