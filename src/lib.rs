//! Kindly Match - candidate pipeline for the Kindly co-parenting app
//!
//! This library turns raw profile records into scored, filterable candidates
//! and serves them over HTTP, together with the founding-candidate
//! invitation endpoint.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_profile_completion, compatibility_score, filter_candidates, Matcher};
pub use models::{Candidate, Filters, ScoringWeights, StoredProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::with_default_weights();
        let result = matcher.find_candidates(&[StoredProfile::default()], None, &Filters::default());
        assert_eq!(result.total_candidates, 1);
    }
}
