//! In-memory notification storage.
//!
//! [`NotificationStore`] owns the collection and the id counter. Every
//! operation takes the store's lock exactly once, so each is atomic with
//! respect to concurrent requests.

pub mod models;
pub mod notification_store;
pub mod seed;

pub use models::CreateNotification;
pub use notification_store::NotificationStore;
