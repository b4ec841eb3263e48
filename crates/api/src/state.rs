use std::sync::Arc;

use notifyhub_store::NotificationStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The notification collection. All handlers share this one instance.
    pub store: Arc<NotificationStore>,
}

impl AppState {
    pub fn new(store: NotificationStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
