use chrono::{DateTime, Utc};

use crate::core::filters::filter_candidates;
use crate::models::{
    Candidate, ChatMessage, Conversation, ConversationStatus, Filters, SessionProfile, Topic,
    TopicStatus, UserRole,
};

/// Per-user application state
///
/// Owned by whoever drives the UI; every mutation goes through one of the
/// transition methods below.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user_role: UserRole,
    pub current_user_photo_url: Option<String>,
    pub shortlist: Vec<String>,
    pub filters: Filters,
    pub conversations: Vec<Conversation>,
}

impl Session {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            ..Self::default()
        }
    }

    /// Apply the stored `app_mode` / `photo_url` for the signed-in user.
    /// `None` means nobody is signed in and resets both.
    pub fn apply_stored(&mut self, stored: Option<&SessionProfile>) {
        let Some(stored) = stored else {
            self.user_role = UserRole::Seeker;
            self.current_user_photo_url = None;
            return;
        };

        if let Some(role) = stored.app_mode.as_deref().and_then(UserRole::from_stored) {
            self.user_role = role;
        }
        self.current_user_photo_url = stored.photo_url.clone();
    }

    pub fn set_user_role(&mut self, role: UserRole) {
        self.user_role = role;
    }

    pub fn set_photo_url(&mut self, url: Option<String>) {
        self.current_user_photo_url = url;
    }

    /// Returns false if the id was already shortlisted
    pub fn add_to_shortlist(&mut self, id: &str) -> bool {
        if self.is_in_shortlist(id) {
            return false;
        }
        self.shortlist.push(id.to_string());
        true
    }

    pub fn remove_from_shortlist(&mut self, id: &str) {
        self.shortlist.retain(|item| item != id);
    }

    pub fn is_in_shortlist(&self, id: &str) -> bool {
        self.shortlist.iter().any(|item| item == id)
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
    }

    pub fn filtered_candidates<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        filter_candidates(candidates, &self.filters)
    }

    pub fn update_conversation_status(&mut self, id: &str, status: ConversationStatus) {
        if let Some(conversation) = self.conversation_mut(id) {
            conversation.status = status;
        }
    }

    /// Append a message from the current role. Returns the new message, or
    /// `None` when the conversation does not exist.
    pub fn send_message(
        &mut self,
        conversation_id: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Option<ChatMessage> {
        let sender = self.user_role;
        let conversation = self.conversation_mut(conversation_id)?;

        let message = ChatMessage {
            id: format!("m{}", now.timestamp_millis()),
            sender_id: sender,
            text: text.to_string(),
            timestamp: now.to_rfc3339(),
        };
        conversation.messages.push(message.clone());
        conversation.last_updated = now.format("%Y-%m-%d").to_string();

        Some(message)
    }

    /// Toggle the current role's "covered" flag on a topic
    pub fn mark_topic_covered(&mut self, conversation_id: &str, topic_id: &str) {
        let role = self.user_role;
        let Some(topic) = self
            .conversation_mut(conversation_id)
            .and_then(|c| c.topics.iter_mut().find(|t| t.id == topic_id))
        else {
            return;
        };

        match role {
            UserRole::Seeker => topic.seeker_covered = !topic.seeker_covered,
            UserRole::Candidate => topic.candidate_covered = !topic.candidate_covered,
        }
    }

    fn conversation_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }
}

pub fn topic_status(topic: &Topic) -> TopicStatus {
    match (topic.seeker_covered, topic.candidate_covered) {
        (true, true) => TopicStatus::Covered,
        (true, false) | (false, true) => TopicStatus::Partial,
        (false, false) => TopicStatus::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn conversation() -> Conversation {
        Conversation {
            id: "c1".to_string(),
            candidate_id: "cand-1".to_string(),
            status: ConversationStatus::Active,
            messages: vec![],
            topics: vec![Topic {
                id: "t1".to_string(),
                title: "Schooling".to_string(),
                seeker_covered: false,
                candidate_covered: false,
            }],
            last_updated: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_apply_stored() {
        let mut session = Session::default();
        session.apply_stored(Some(&SessionProfile {
            app_mode: Some("candidate".to_string()),
            photo_url: Some("https://x/p.jpg".to_string()),
        }));
        assert_eq!(session.user_role, UserRole::Candidate);
        assert_eq!(session.current_user_photo_url.as_deref(), Some("https://x/p.jpg"));

        // Unknown modes keep the current role
        session.apply_stored(Some(&SessionProfile {
            app_mode: Some("admin".to_string()),
            photo_url: None,
        }));
        assert_eq!(session.user_role, UserRole::Candidate);
        assert_eq!(session.current_user_photo_url, None);

        session.apply_stored(None);
        assert_eq!(session.user_role, UserRole::Seeker);
    }

    #[test]
    fn test_shortlist() {
        let mut session = Session::default();
        assert!(session.add_to_shortlist("a"));
        assert!(!session.add_to_shortlist("a"));
        assert!(session.add_to_shortlist("b"));
        assert_eq!(session.shortlist, vec!["a", "b"]);

        session.remove_from_shortlist("a");
        assert!(!session.is_in_shortlist("a"));
        assert!(session.is_in_shortlist("b"));
    }

    #[test]
    fn test_send_message() {
        let mut session = Session::new(vec![conversation()]);
        session.set_user_role(UserRole::Candidate);
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();

        let message = session.send_message("c1", "Hello", now).unwrap();

        assert_eq!(message.id, format!("m{}", now.timestamp_millis()));
        assert_eq!(message.sender_id, UserRole::Candidate);
        assert_eq!(session.conversations[0].messages.len(), 1);
        assert_eq!(session.conversations[0].last_updated, "2024-03-05");
        assert!(session.send_message("missing", "Hello", now).is_none());
    }

    #[test]
    fn test_topic_toggling_per_role() {
        let mut session = Session::new(vec![conversation()]);

        session.mark_topic_covered("c1", "t1");
        assert_eq!(topic_status(&session.conversations[0].topics[0]), TopicStatus::Partial);

        session.set_user_role(UserRole::Candidate);
        session.mark_topic_covered("c1", "t1");
        assert_eq!(topic_status(&session.conversations[0].topics[0]), TopicStatus::Covered);

        session.mark_topic_covered("c1", "t1");
        assert!(!session.conversations[0].topics[0].candidate_covered);
        assert!(session.conversations[0].topics[0].seeker_covered);
    }

    #[test]
    fn test_update_status() {
        let mut session = Session::new(vec![conversation()]);
        session.update_conversation_status("c1", ConversationStatus::Paused);
        assert_eq!(session.conversations[0].status, ConversationStatus::Paused);
    }
}
