//! Session store
//!
//! Single authority for the signed-in user and the data scoped to that
//! session (subscriptions, messages). The store is an explicit container
//! passed to its consumers; there is no ambient global. Every mutation is
//! one synchronous state transition, so observers always see strict program
//! order.

use std::time::Duration;

use uuid::Uuid;

use crate::error::Result;
use crate::invariants;
use crate::models::{conversation, Message, ProfileUpdate, Subscription, User, UserRole};
use crate::services::{with_timeout, IdentityProvider};

#[derive(Debug, Default)]
pub struct SessionStore {
    user: Option<User>,
    loading: bool,
    subscriptions: Vec<Subscription>,
    messages: Vec<Message>,
}

impl SessionStore {
    /// An empty, anonymous store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with session-scoped data. Used by fixtures and
    /// tests.
    pub fn with_state(
        user: Option<User>,
        subscriptions: Vec<Subscription>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            user,
            loading: false,
            subscriptions,
            messages,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Replace the current user unconditionally. No validation.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Shallow-merge the given fields into the current user. No-op when
    /// anonymous. Role applicability of the fields is not checked.
    pub fn update_profile(&mut self, update: &ProfileUpdate) {
        if let Some(user) = self.user.as_mut() {
            update.apply(user);
            tracing::debug!(user_id = %user.id, "profile updated");
        }
    }

    /// Resolve credentials through the identity provider and install the
    /// returned user. The deadline is supplied by the caller; the provider
    /// itself never times out.
    pub async fn sign_in<P: IdentityProvider>(
        &mut self,
        provider: &P,
        email: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<()> {
        self.loading = true;
        let outcome = with_timeout(timeout, provider.sign_in(email, password)).await;
        self.loading = false;

        let user = outcome?;
        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        self.user = Some(user);
        Ok(())
    }

    /// Register a new account with the caller-supplied role and install it.
    pub async fn sign_up<P: IdentityProvider>(
        &mut self,
        provider: &P,
        email: &str,
        password: &str,
        role: UserRole,
        timeout: Duration,
    ) -> Result<()> {
        self.loading = true;
        let outcome = with_timeout(timeout, provider.sign_up(email, password, role)).await;
        self.loading = false;

        let user = outcome?;
        tracing::info!(user_id = %user.id, role = %user.role, "signed up");
        self.user = Some(user);
        Ok(())
    }

    /// Clear the user together with all session-scoped data in a single
    /// transition. No partial clear is observable.
    pub fn sign_out(&mut self) {
        if let Some(user) = &self.user {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.user = None;
        self.subscriptions.clear();
        self.messages.clear();
        invariants::assert_signed_out_clean(self);
    }

    /// Append a subscription. No dedupe by coach id; the status is taken as
    /// supplied and never recomputed from the window dates.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        invariants::assert_subscription_invariants(&subscription);
        tracing::info!(coach_id = %subscription.coach_id, status = subscription.status.display_name(), "subscription added");
        self.subscriptions.push(subscription);
    }

    /// Append a message from the current user. Returns the new message id,
    /// or `None` (leaving the log untouched) when anonymous or when the
    /// content trims to empty.
    pub fn send_message(&mut self, receiver_id: Uuid, content: &str) -> Option<Uuid> {
        let sender_id = self.user.as_ref()?.id;
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let message = Message::new(sender_id, receiver_id, content.to_string());
        invariants::assert_message_invariants(&message);
        let id = message.id;
        tracing::debug!(message_id = %id, receiver_id = %receiver_id, "message sent");
        self.messages.push(message);
        Some(id)
    }

    /// Set the read flag on the matching message. Idempotent; no-op when the
    /// id is unknown.
    pub fn mark_message_read(&mut self, message_id: Uuid) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) {
            message.read = true;
        }
    }

    /// Messages exchanged between a coach and a client, in original order.
    pub fn conversation(&self, coach_id: Uuid, client_id: Uuid) -> Vec<&Message> {
        conversation(&self.messages, coach_id, client_id)
    }

    /// Unread messages addressed to the given user.
    pub fn unread_count(&self, user_id: Uuid) -> usize {
        self.messages
            .iter()
            .filter(|m| m.receiver_id == user_id && !m.read)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockIdentityProvider;

    const TIMEOUT: Duration = Duration::from_secs(1);

    fn provider() -> MockIdentityProvider {
        MockIdentityProvider::default()
    }

    fn client_store() -> (SessionStore, Uuid) {
        let user = User::new(
            "client@example.com".to_string(),
            UserRole::Client,
            "John Doe".to_string(),
        );
        let id = user.id;
        (SessionStore::with_state(Some(user), vec![], vec![]), id)
    }

    #[test]
    fn send_message_appends_one_unread_from_current_user() {
        let (mut store, sender) = client_store();
        let receiver = Uuid::from_u128(9);

        let id = store.send_message(receiver, "hi there");

        assert!(id.is_some());
        assert_eq!(store.messages().len(), 1);
        let message = &store.messages()[0];
        assert_eq!(message.sender_id, sender);
        assert_eq!(message.receiver_id, receiver);
        assert_eq!(message.content, "hi there");
        assert!(!message.read);
    }

    #[test]
    fn send_message_trims_whitespace() {
        let (mut store, _) = client_store();
        store.send_message(Uuid::from_u128(9), "  padded  ");
        assert_eq!(store.messages()[0].content, "padded");
    }

    #[test]
    fn send_message_whitespace_only_is_noop() {
        let (mut store, _) = client_store();
        assert!(store.send_message(Uuid::from_u128(9), "   \t ").is_none());
        assert!(store.messages().is_empty());
    }

    #[test]
    fn send_message_anonymous_is_noop() {
        let mut store = SessionStore::new();
        assert!(store.send_message(Uuid::from_u128(9), "hello").is_none());
        assert!(store.messages().is_empty());
    }

    #[test]
    fn mark_message_read_is_idempotent() {
        let (mut store, _) = client_store();
        let id = store.send_message(Uuid::from_u128(9), "hi").unwrap();

        store.mark_message_read(id);
        let once = store.messages().to_vec();
        store.mark_message_read(id);

        assert!(store.messages()[0].read);
        assert_eq!(store.messages().len(), once.len());
        assert_eq!(store.messages()[0].read, once[0].read);
    }

    #[test]
    fn mark_message_read_unknown_id_is_noop() {
        let (mut store, _) = client_store();
        store.send_message(Uuid::from_u128(9), "hi");
        store.mark_message_read(Uuid::from_u128(42));
        assert!(!store.messages()[0].read);
    }

    #[test]
    fn update_profile_anonymous_is_noop() {
        let mut store = SessionStore::new();
        store.update_profile(&ProfileUpdate {
            full_name: Some("Ghost".to_string()),
            ..Default::default()
        });
        assert!(store.user().is_none());
    }

    #[test]
    fn add_subscription_keeps_duplicates() {
        let (mut store, _) = client_store();
        let coach = Uuid::from_u128(7);
        store.add_subscription(Subscription::monthly(coach));
        store.add_subscription(Subscription::monthly(coach));
        assert_eq!(store.subscriptions().len(), 2);
    }

    #[tokio::test]
    async fn sign_out_then_sign_in_clears_scoped_data() {
        let (mut store, _) = client_store();
        store.add_subscription(Subscription::monthly(Uuid::from_u128(7)));
        store.send_message(Uuid::from_u128(9), "hi");

        store.sign_out();
        store
            .sign_in(&provider(), "back@example.com", "pw", TIMEOUT)
            .await
            .unwrap();

        assert!(store.is_authenticated());
        assert!(store.subscriptions().is_empty());
        assert!(store.messages().is_empty());
    }

    #[tokio::test]
    async fn sign_up_honors_role_and_messages_use_new_id() {
        let mut store = SessionStore::new();
        store
            .sign_up(&provider(), "a@b.com", "x", UserRole::Coach, TIMEOUT)
            .await
            .unwrap();

        let user = store.user().unwrap();
        assert_eq!(user.role, UserRole::Coach);
        assert_eq!(user.email, "a@b.com");
        let user_id = user.id;

        let client = Uuid::from_u128(11);
        store.send_message(client, "hi").unwrap();
        assert_eq!(store.messages()[0].sender_id, user_id);
        assert_eq!(store.messages()[0].content, "hi");
    }

    #[tokio::test]
    async fn sign_in_fabricates_client_role() {
        let mut store = SessionStore::new();
        store
            .sign_in(&provider(), "someone@example.com", "ignored", TIMEOUT)
            .await
            .unwrap();
        assert_eq!(store.role(), Some(UserRole::Client));
        assert!(!store.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn sign_in_timeout_resets_loading() {
        let mut store = SessionStore::new();
        let slow = MockIdentityProvider::new(Duration::from_secs(60));

        let outcome = store
            .sign_in(&slow, "a@b.com", "pw", Duration::from_millis(100))
            .await;

        assert!(outcome.is_err());
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn conversation_returns_pair_subsequence() {
        let (mut store, me) = client_store();
        let coach = Uuid::from_u128(2);
        let other = Uuid::from_u128(3);
        store.send_message(coach, "one");
        store.send_message(other, "noise");
        store.send_message(coach, "two");

        let thread = store.conversation(coach, me);
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].content, "one");
        assert_eq!(thread[1].content, "two");
    }

    #[test]
    fn unread_count_tracks_receiver() {
        let me = Uuid::from_u128(1);
        let coach = Uuid::from_u128(2);
        let unread = Message::new(coach, me, "ping".to_string());
        let mut read = Message::new(coach, me, "old".to_string());
        read.read = true;
        let store = SessionStore::with_state(None, vec![], vec![unread, read]);
        assert_eq!(store.unread_count(me), 1);
    }
}
