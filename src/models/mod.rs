// Model exports
pub mod chat;
pub mod domain;
pub mod requests;
pub mod responses;

pub use chat::{ChatMessage, Conversation, ConversationStatus, Topic, TopicStatus};
pub use domain::{
    Alcohol, Candidate, Exercise, Filters, Gender, Invitation, InvitationStatus, LookingFor,
    PreferredMethod, ScoringWeights, SessionProfile, Smoking, StoredProfile, Substance, UserRole,
};
pub use requests::{InvitationRequest, SearchCandidatesRequest, SetRoleRequest};
pub use responses::{
    ErrorResponse, HealthResponse, InvitationResponse, SearchCandidatesResponse, SessionResponse,
};
