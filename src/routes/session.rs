use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use validator::Validate;

use super::{misconfigured, AppState};
use crate::core::{photo_or_placeholder, Session};
use crate::models::{ErrorResponse, SessionResponse, SetRoleRequest};
use crate::services::{StoreError, SupabaseClient};

/// Configure session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/session", web::get().to(get_session))
        .route("/session/role", web::put().to(set_role));
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    #[serde(alias = "user_id", rename = "userId")]
    user_id: String,
}

fn session_response(user_id: &str, session: &Session) -> SessionResponse {
    SessionResponse {
        user_id: user_id.to_string(),
        role: session.user_role,
        photo_url: session.current_user_photo_url.clone(),
        avatar_url: photo_or_placeholder(session.current_user_photo_url.as_deref(), Some(user_id)),
    }
}

/// Stored session for `user_id`; a user without a profile row yet gets the defaults
async fn load_session(store: &SupabaseClient, user_id: &str) -> Result<Session, HttpResponse> {
    let mut session = Session::default();
    match store.get_session_profile(user_id).await {
        Ok(stored) => session.apply_stored(Some(&stored)),
        Err(StoreError::NotFound(_)) => {
            tracing::debug!("No profile row for {}, using default session", user_id);
        }
        Err(e) => {
            tracing::error!("Failed to fetch session for {}: {}", user_id, e);
            return Err(HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch session".to_string(),
                message: e.to_string(),
                status_code: 500,
            }));
        }
    }
    Ok(session)
}

/// Load the user's role and photo
///
/// GET /api/v1/session?userId={userId}
async fn get_session(state: web::Data<AppState>, query: web::Query<SessionQuery>) -> impl Responder {
    let Some(store) = state.store.as_ref() else {
        return misconfigured();
    };

    match load_session(store, &query.user_id).await {
        Ok(session) => HttpResponse::Ok().json(session_response(&query.user_id, &session)),
        Err(response) => response,
    }
}

/// Switch between seeker and candidate mode
///
/// PUT /api/v1/session/role
///
/// Request body:
/// ```json
/// { "userId": "string", "role": "seeker|candidate" }
/// ```
async fn set_role(state: web::Data<AppState>, req: web::Json<SetRoleRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let Some(store) = state.store.as_ref() else {
        return misconfigured();
    };

    let mut session = match load_session(store, &req.user_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };
    session.set_user_role(req.role);

    if let Err(e) = store.update_app_mode(&req.user_id, req.role).await {
        tracing::error!("Failed to update app mode for {}: {}", req.user_id, e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to update role".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    tracing::info!("User {} switched to {}", req.user_id, req.role.as_str());

    HttpResponse::Ok().json(session_response(&req.user_id, &session))
}
