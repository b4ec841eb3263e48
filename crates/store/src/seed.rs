//! Demo notifications loaded at startup when `SEED_DEMO_DATA` is enabled.

use notifyhub_core::notification::Notification;
use notifyhub_core::types::Timestamp;

/// Build the demo collection, all stamped at `now`.
///
/// Ids are `1..=3`; the returned records are in insertion order.
pub fn demo_notifications(now: Timestamp) -> Vec<Notification> {
    let welcome = Notification::new_unread(
        1,
        1,
        "Welcome to the platform!",
        "welcome",
        now,
    );

    let mut confirmed = Notification::new_unread(
        2,
        1,
        "Your order #1 has been confirmed.",
        "order_confirmed",
        now,
    );
    confirmed.mark_read(now);

    let shipped = Notification::new_unread(
        3,
        2,
        "Your order #2 has been shipped.",
        "order_shipped",
        now,
    );

    vec![welcome, confirmed, shipped]
}
