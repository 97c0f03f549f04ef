//! Conversation view model

use fitlink_core::{Message, SessionStore, UserRole};
use uuid::Uuid;

/// One coach/client conversation plus its composer draft.
#[derive(Debug)]
pub struct ConversationView {
    pub coach_id: Uuid,
    pub client_id: Uuid,
    pub draft: String,
}

impl ConversationView {
    pub fn new(coach_id: Uuid, client_id: Uuid) -> Self {
        Self {
            coach_id,
            client_id,
            draft: String::new(),
        }
    }

    /// The thread in original order.
    pub fn messages<'a>(&self, store: &'a SessionStore) -> Vec<&'a Message> {
        store.conversation(self.coach_id, self.client_id)
    }

    /// The thread rendered as display lines, oldest first.
    pub fn transcript(&self, store: &SessionStore) -> Vec<String> {
        self.messages(store)
            .iter()
            .map(|m| format!("{} {} {}", m.format_date(), m.format_timestamp(), m.content))
            .collect()
    }

    /// Mark everything addressed to the current user in this thread as read.
    /// Called when the conversation is opened.
    pub fn open(&self, store: &mut SessionStore) {
        let Some(me) = store.user().map(|u| u.id) else {
            return;
        };
        let unread: Vec<Uuid> = self
            .messages(store)
            .iter()
            .filter(|m| m.receiver_id == me && !m.read)
            .map(|m| m.id)
            .collect();
        for id in unread {
            store.mark_message_read(id);
        }
    }

    /// Send the draft to the counterpart: coaches write to the client,
    /// everyone else writes to the coach. Clears the draft on success.
    pub fn send(&mut self, store: &mut SessionStore) -> Option<Uuid> {
        let receiver = match store.role() {
            Some(UserRole::Coach) => self.client_id,
            Some(_) => self.coach_id,
            None => return None,
        };

        let id = store.send_message(receiver, &self.draft);
        if id.is_some() {
            self.draft.clear();
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlink_core::User;

    fn store_with(role: UserRole) -> (SessionStore, Uuid) {
        let user = User::new("u@example.com".to_string(), role, "U".to_string());
        let id = user.id;
        (SessionStore::with_state(Some(user), vec![], vec![]), id)
    }

    #[test]
    fn client_sends_to_coach() {
        let (mut store, me) = store_with(UserRole::Client);
        let coach = Uuid::from_u128(2);
        let mut view = ConversationView::new(coach, me);
        view.draft = "hello coach".to_string();

        let id = view.send(&mut store);

        assert!(id.is_some());
        assert!(view.draft.is_empty());
        assert_eq!(store.messages()[0].receiver_id, coach);
    }

    #[test]
    fn coach_sends_to_client() {
        let (mut store, me) = store_with(UserRole::Coach);
        let client = Uuid::from_u128(3);
        let mut view = ConversationView::new(me, client);
        view.draft = "welcome aboard".to_string();

        view.send(&mut store).unwrap();
        assert_eq!(store.messages()[0].receiver_id, client);
    }

    #[test]
    fn transcript_lines_carry_date_and_time() {
        let (mut store, me) = store_with(UserRole::Client);
        let coach = Uuid::from_u128(2);
        let mut view = ConversationView::new(coach, me);
        view.draft = "hello coach".to_string();
        view.send(&mut store);

        let lines = view.transcript(&store);
        assert_eq!(lines.len(), 1);
        let stamp = store.messages()[0].created_at;
        assert_eq!(
            lines[0],
            format!("{} hello coach", stamp.format("%Y-%m-%d %H:%M"))
        );
    }

    #[test]
    fn empty_draft_is_not_sent() {
        let (mut store, me) = store_with(UserRole::Client);
        let mut view = ConversationView::new(Uuid::from_u128(2), me);
        view.draft = "   ".to_string();

        assert!(view.send(&mut store).is_none());
        assert!(store.messages().is_empty());
    }

    #[test]
    fn open_marks_incoming_read_only() {
        let (mut store, me) = store_with(UserRole::Client);
        let coach = Uuid::from_u128(2);
        let view = ConversationView::new(coach, me);

        // one outgoing, one incoming
        let incoming = Message::new(coach, me, "ping".to_string());
        let out_id = store.send_message(coach, "pong").unwrap();
        let in_id = incoming.id;
        let messages: Vec<Message> = store
            .messages()
            .iter()
            .cloned()
            .chain(std::iter::once(incoming))
            .collect();
        let user = store.user().cloned();
        let mut store = SessionStore::with_state(user, vec![], messages);

        view.open(&mut store);

        let read_by_id = |id: Uuid| store.messages().iter().find(|m| m.id == id).unwrap().read;
        assert!(read_by_id(in_id));
        assert!(!read_by_id(out_id));
    }
}
