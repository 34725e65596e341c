use serde::{Deserialize, Serialize};
use crate::models::domain::{Candidate, UserRole};

/// Response for the invitation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResponse {
    pub success: bool,
    pub admin_email_sent: bool,
    pub confirmation_email_sent: bool,
}

/// Response for candidate search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCandidatesResponse {
    pub candidates: Vec<Candidate>,
    pub total_candidates: usize,
}

/// Current user's session state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub role: UserRole,
    pub photo_url: Option<String>,
    /// `photo_url`, or a stable placeholder when none is set
    pub avatar_url: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cache_entries: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
