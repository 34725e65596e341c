use crate::models::{Candidate, Filters};

/// Custody share used when the involvement text names no known split
const DEFAULT_CUSTODY_PERCENT: u8 = 50;

/// Extract a custody percentage from an involvement description
///
/// Only the "50/50", "60/40" and "40/60" splits are recognised, checked in
/// that order; anything else counts as 50.
#[inline]
pub fn custody_percent(involvement: &str) -> u8 {
    if involvement.contains("50/50") {
        50
    } else if involvement.contains("60/40") {
        60
    } else if involvement.contains("40/60") {
        40
    } else {
        DEFAULT_CUSTODY_PERCENT
    }
}

#[inline]
pub fn matches_age(candidate: &Candidate, filters: &Filters) -> bool {
    let (min_age, max_age) = filters.age_range;
    candidate.age >= min_age && candidate.age <= max_age
}

/// A candidate without an ethnicity never passes a non-empty ethnicity filter
#[inline]
pub fn matches_ethnicity(candidate: &Candidate, filters: &Filters) -> bool {
    if filters.ethnicity.is_empty() {
        return true;
    }
    candidate
        .ethnicity
        .as_ref()
        .is_some_and(|ethnicity| filters.ethnicity.contains(ethnicity))
}

/// Exact, case-sensitive language match
#[inline]
pub fn matches_languages(candidate: &Candidate, filters: &Filters) -> bool {
    filters.languages.is_empty()
        || filters
            .languages
            .iter()
            .any(|language| candidate.languages.contains(language))
}

/// Any keyword appearing (case-insensitively) in the looking-for text
#[inline]
pub fn matches_looking_for(candidate: &Candidate, filters: &Filters) -> bool {
    if filters.looking_for.is_empty() {
        return true;
    }
    let looking_for = candidate.looking_for.to_lowercase();
    filters
        .looking_for
        .iter()
        .any(|term| looking_for.contains(&term.to_lowercase()))
}

#[inline]
pub fn matches_custody(candidate: &Candidate, filters: &Filters) -> bool {
    let (min_percent, max_percent) = filters.custody_range;
    let percent = custody_percent(&candidate.involvement);
    percent >= min_percent && percent <= max_percent
}

/// All predicate groups must pass
#[inline]
pub fn matches_filters(candidate: &Candidate, filters: &Filters) -> bool {
    matches_age(candidate, filters)
        && matches_ethnicity(candidate, filters)
        && matches_languages(candidate, filters)
        && matches_looking_for(candidate, filters)
        && matches_custody(candidate, filters)
}

/// Candidates passing `filters`, in their original order
pub fn filter_candidates<'a>(candidates: &'a [Candidate], filters: &Filters) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|candidate| matches_filters(candidate, filters))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapper::map_profile_to_candidate;
    use crate::models::StoredProfile;

    fn create_candidate(id: &str, age: u8) -> Candidate {
        let mut candidate = map_profile_to_candidate(&StoredProfile::default());
        candidate.id = id.to_string();
        candidate.age = age;
        candidate
    }

    #[test]
    fn test_custody_percent_heuristic() {
        assert_eq!(custody_percent("My 60/40 custody arrangement works well"), 60);
        assert_eq!(custody_percent("50/50 custody"), 50);
        assert_eq!(custody_percent("40/60 custody"), 40);
        assert_eq!(custody_percent("70/30 custody"), 50);
        assert_eq!(custody_percent(""), 50);
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let filters = Filters::default();
        assert!(matches_age(&create_candidate("a", 25), &filters));
        assert!(matches_age(&create_candidate("b", 50), &filters));
        assert!(!matches_age(&create_candidate("c", 24), &filters));
        assert!(!matches_age(&create_candidate("d", 51), &filters));
    }

    #[test]
    fn test_ethnicity_requires_value() {
        let filters = Filters {
            ethnicity: vec!["asian".to_string()],
            ..Filters::default()
        };

        let unknown = create_candidate("a", 30);
        let mut asian = create_candidate("b", 30);
        asian.ethnicity = Some("asian".to_string());
        let mut other = create_candidate("c", 30);
        other.ethnicity = Some("hispanic".to_string());

        assert!(!matches_ethnicity(&unknown, &filters));
        assert!(matches_ethnicity(&asian, &filters));
        assert!(!matches_ethnicity(&other, &filters));
    }

    #[test]
    fn test_languages_case_sensitive() {
        let filters = Filters {
            languages: vec!["English".to_string(), "Spanish".to_string()],
            ..Filters::default()
        };
        let mut candidate = create_candidate("a", 30);
        candidate.languages = vec!["english".to_string()];
        assert!(!matches_languages(&candidate, &filters));

        candidate.languages.push("Spanish".to_string());
        assert!(matches_languages(&candidate, &filters));
    }

    #[test]
    fn test_looking_for_substring_case_insensitive() {
        let filters = Filters {
            looking_for: vec!["CO-PARENT".to_string()],
            ..Filters::default()
        };
        let mut candidate = create_candidate("a", 30);
        candidate.looking_for = "Co-parenting, friendship".to_string();
        assert!(matches_looking_for(&candidate, &filters));

        candidate.looking_for = "friendship".to_string();
        assert!(!matches_looking_for(&candidate, &filters));
    }

    #[test]
    fn test_custody_range() {
        let filters = Filters {
            custody_range: (55, 100),
            ..Filters::default()
        };
        let mut candidate = create_candidate("a", 30);
        candidate.involvement = "60/40 custody".to_string();
        assert!(matches_custody(&candidate, &filters));

        candidate.involvement = "Flexible".to_string();
        assert!(!matches_custody(&candidate, &filters));
    }

    #[test]
    fn test_filter_preserves_order() {
        let candidates = vec![
            create_candidate("1", 40),
            create_candidate("2", 20),
            create_candidate("3", 30),
            create_candidate("4", 60),
            create_candidate("5", 25),
        ];

        let ids: Vec<&str> = filter_candidates(&candidates, &Filters::default())
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();

        assert_eq!(ids, vec!["1", "3", "5"]);
    }
}
