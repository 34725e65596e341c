use actix_web::{web, HttpResponse, Responder};

use super::{misconfigured, AppState};
use crate::models::{
    ErrorResponse, HealthResponse, SearchCandidatesRequest, SearchCandidatesResponse, StoredProfile,
};
use crate::services::{CacheKey, StoreError};

/// Configure candidate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/candidates/search", web::post().to(search_candidates));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache_entries: state.cache.stats().entries,
        timestamp: chrono::Utc::now(),
    })
}

/// Raw profile rows, from cache when fresh
async fn load_profiles(state: &AppState) -> Option<Result<Vec<StoredProfile>, StoreError>> {
    let store = state.store.as_ref()?;
    let key = CacheKey::profiles();

    if let Ok(profiles) = state.cache.get::<Vec<StoredProfile>>(&key).await {
        return Some(Ok(profiles));
    }

    let result = store.fetch_profiles().await;
    if let Ok(profiles) = &result {
        if let Err(e) = state.cache.set(&key, profiles).await {
            tracing::warn!("Failed to cache profiles: {}", e);
        }
    }
    Some(result)
}

/// Search candidates endpoint
///
/// POST /api/v1/candidates/search
///
/// Request body:
/// ```json
/// {
///   "viewerId": "string",
///   "filters": {
///     "ageRange": [25, 50],
///     "ethnicity": [],
///     "languages": [],
///     "lookingFor": [],
///     "custodyRange": [0, 100]
///   }
/// }
/// ```
async fn search_candidates(
    state: web::Data<AppState>,
    req: web::Json<SearchCandidatesRequest>,
) -> impl Responder {
    let profiles = match load_profiles(&state).await {
        None => return misconfigured(),
        Some(Ok(profiles)) => profiles,
        Some(Err(e)) => {
            tracing::error!("Failed to fetch profiles: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let viewer = req.viewer_id.as_deref().and_then(|viewer_id| {
        profiles.iter().find(|p| {
            p.id.as_deref() == Some(viewer_id) || p.user_id.as_deref() == Some(viewer_id)
        })
    });
    if let (Some(viewer_id), None) = (&req.viewer_id, viewer) {
        tracing::warn!("Viewer {} has no profile; scoring disabled", viewer_id);
    }

    let result = state.matcher.find_candidates(&profiles, viewer, &req.filters);

    tracing::info!(
        "Returning {} candidates (from {} profiles)",
        result.candidates.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchCandidatesResponse {
        candidates: result.candidates,
        total_candidates: result.total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            cache_entries: 0,
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
