use actix_web::{web, HttpResponse};
use validator::Validate;

use super::AppState;
use crate::models::InvitationRequest;
use crate::services::{submit_invitation, InvitationError};

/// Configure invitation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/invitations", web::post().to(request_invitation));
}

/// Founding-candidate invitation endpoint
///
/// POST /api/v1/invitations
///
/// Request body:
/// ```json
/// { "name": "string", "email": "string" }
/// ```
///
/// Email delivery failures are reported through `adminEmailSent` /
/// `confirmationEmailSent`, never as an error status.
async fn request_invitation(
    state: web::Data<AppState>,
    req: web::Json<InvitationRequest>,
) -> Result<HttpResponse, InvitationError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for invitation request: {}", errors);
        return Err(InvitationError::MissingFields);
    }

    let response = submit_invitation(
        state.store.as_deref(),
        state.mailer.as_deref(),
        &state.notices,
        &req.name,
        &req.email,
    )
    .await?;

    Ok(HttpResponse::Ok().json(response))
}
