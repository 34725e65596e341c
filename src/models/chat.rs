use serde::{Deserialize, Serialize};

use super::domain::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Paused,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: UserRole,
    pub text: String,
    /// RFC 3339
    pub timestamp: String,
}

/// A discussion topic both parties tick off independently
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub seeker_covered: bool,
    pub candidate_covered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    None,
    Partial,
    Covered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub candidate_id: String,
    pub status: ConversationStatus,
    pub messages: Vec<ChatMessage>,
    pub topics: Vec<Topic>,
    /// YYYY-MM-DD
    pub last_updated: String,
}
