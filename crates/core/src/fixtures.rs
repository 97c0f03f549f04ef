//! Seeded demo state
//!
//! The walkthrough and tests boot from the same state the original app
//! shipped with: one client, one active subscription, a short read
//! conversation with the first directory coach.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::directory::CoachDirectory;
use crate::models::{Message, Subscription, User, UserRole};
use crate::session::SessionStore;

/// The seeded client account.
pub fn demo_client() -> User {
    User::new(
        "client@example.com".to_string(),
        UserRole::Client,
        "John Doe".to_string(),
    )
}

/// A session store populated with the demo client, an active subscription to
/// the first seeded coach, and a two-message read conversation.
pub fn demo_store() -> SessionStore {
    let client = demo_client();
    let client_id = client.id;
    let coach_id = first_seeded_coach_id();

    let subscription = Subscription::monthly(coach_id);

    let mut opener = Message::new(
        client_id,
        coach_id,
        "Hello! I'm interested in your weight loss program.".to_string(),
    );
    opener.created_at = Utc::now() - Duration::hours(1);
    opener.read = true;

    let mut reply = Message::new(
        coach_id,
        client_id,
        "Hi! Thanks for your interest. I'd be happy to help you achieve your \
         weight loss goals."
            .to_string(),
    );
    reply.created_at = Utc::now() - Duration::minutes(58);
    reply.read = true;

    SessionStore::with_state(Some(client), vec![subscription], vec![opener, reply])
}

/// Id of the first coach in the seeded directory.
pub fn first_seeded_coach_id() -> Uuid {
    CoachDirectory::seeded()
        .all()
        .first()
        .map(|l| l.id)
        .unwrap_or_else(|| Uuid::from_u128(1))
}
