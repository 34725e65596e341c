use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::domain::{Filters, UserRole};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Founding-candidate invitation request
///
/// Missing fields deserialize as empty strings so that they fail validation
/// with a 400 instead of a JSON decoding error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvitationRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub email: String,
}

/// Request to list candidates through the filter pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCandidatesRequest {
    /// Profile id of the viewer; enables compatibility scoring
    #[serde(alias = "viewer_id", rename = "viewerId", default)]
    pub viewer_id: Option<String>,
    #[serde(default)]
    pub filters: Filters,
}

/// Request to switch the user's app mode
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetRoleRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub role: UserRole,
}
