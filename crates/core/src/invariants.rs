//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use uuid::Uuid;

use crate::models::{Message, Subscription};
use crate::session::SessionStore;

/// Validate a message before it enters the log
pub fn assert_message_invariants(message: &Message) {
    debug_assert!(
        message.sender_id != Uuid::nil(),
        "Message {} has nil sender_id",
        message.id
    );

    debug_assert!(
        message.receiver_id != Uuid::nil(),
        "Message {} has nil receiver_id",
        message.id
    );

    debug_assert!(
        !message.content.trim().is_empty(),
        "Message {} has empty content",
        message.id
    );
}

/// Validate a subscription window
pub fn assert_subscription_invariants(subscription: &Subscription) {
    debug_assert!(
        subscription.coach_id != Uuid::nil(),
        "Subscription has nil coach_id"
    );

    debug_assert!(
        subscription.started_at <= subscription.ends_at,
        "Subscription to {} ends before it starts",
        subscription.coach_id
    );
}

/// After sign-out no session-scoped data may remain
pub fn assert_signed_out_clean(store: &SessionStore) {
    debug_assert!(
        store.user().is_none(),
        "Sign-out left a current user in place"
    );

    debug_assert!(
        store.subscriptions().is_empty(),
        "Sign-out left {} subscriptions",
        store.subscriptions().len()
    );

    debug_assert!(
        store.messages().is_empty(),
        "Sign-out left {} messages",
        store.messages().len()
    );
}
