use crate::models::{Candidate, Filters, ScoringWeights, StoredProfile};
use crate::core::{filters::matches_filters, mapper::map_profiles_to_candidates};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub candidates: Vec<Candidate>,
    pub total_candidates: usize,
}

/// Candidate pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Profile mapping (with profile completion)
/// 2. Compatibility scoring against the viewer, if any
/// 3. Filtering, order preserving
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights: weights.normalized(),
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Map stored profiles to candidates without filtering
    pub fn build_candidates(
        &self,
        profiles: &[StoredProfile],
        viewer: Option<&StoredProfile>,
    ) -> Vec<Candidate> {
        map_profiles_to_candidates(profiles, viewer, &self.weights)
    }

    /// Run the full pipeline over `profiles`
    ///
    /// The viewer's own profile is left out of the result. Candidates come
    /// back in the order of `profiles`; ranking is up to the caller.
    pub fn find_candidates(
        &self,
        profiles: &[StoredProfile],
        viewer: Option<&StoredProfile>,
        filters: &Filters,
    ) -> MatchResult {
        let viewer_id = viewer.and_then(|v| v.id.as_deref());

        let candidates: Vec<Candidate> = self
            .build_candidates(profiles, viewer)
            .into_iter()
            .filter(|candidate| viewer_id != Some(candidate.id.as_str()))
            .collect();
        let total_candidates = candidates.len();

        let candidates = candidates
            .into_iter()
            .filter(|candidate| matches_filters(candidate, filters))
            .collect();

        MatchResult {
            candidates,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_profile(id: &str, age: u8, ethnicity: Option<&str>) -> StoredProfile {
        serde_json::from_value(json!({
            "id": id,
            "full_name": format!("User {}", id),
            "age": age,
            "ethnicity": ethnicity,
            "languages": ["English"],
            "involvement_percent": 50,
        }))
        .unwrap()
    }

    #[test]
    fn test_find_candidates_basic() {
        let matcher = Matcher::with_default_weights();
        let profiles = vec![
            create_profile("1", 30, Some("asian")),
            create_profile("2", 60, Some("asian")),  // Too old
            create_profile("3", 35, None),           // No ethnicity
        ];
        let filters = Filters {
            ethnicity: vec!["asian".to_string()],
            ..Filters::default()
        };

        let result = matcher.find_candidates(&profiles, None, &filters);

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].id, "1");
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_viewer_is_excluded_and_scores_set() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_profile("me", 33, None);
        let profiles = vec![
            create_profile("me", 33, None),
            create_profile("1", 31, None),
        ];

        let result = matcher.find_candidates(&profiles, Some(&viewer), &Filters::default());

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].id, "1");
        assert!(result.candidates[0].compatibility_score > 0);
    }

    #[test]
    fn test_order_preserved() {
        let matcher = Matcher::with_default_weights();
        let profiles: Vec<StoredProfile> = (0..20)
            .map(|i| create_profile(&i.to_string(), 20 + i as u8 * 2, None))
            .collect();

        let result = matcher.find_candidates(&profiles, None, &Filters::default());
        let ages: Vec<u8> = result.candidates.iter().map(|c| c.age).collect();

        let mut sorted = ages.clone();
        sorted.sort();
        assert_eq!(ages, sorted);
        assert!(ages.iter().all(|age| (25..=50).contains(age)));
    }
}
