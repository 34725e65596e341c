use std::collections::HashSet;

use crate::core::filters::custody_percent;
use crate::core::mapper::{present, resolve_involvement, resolve_looking_for, resolve_values};
use crate::models::{Alcohol, ScoringWeights, Smoking, StoredProfile};

/// Age difference (years) at which the age component reaches zero
const AGE_SPAN_YEARS: f64 = 15.0;

/// Intent words shorter than this are ignored ("a", "to", ...)
const MIN_KEYWORD_LEN: usize = 3;

/// Per-attribute similarity, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompatibilityBreakdown {
    pub languages: f64,
    pub intent: f64,
    pub age: f64,
    pub involvement: f64,
    pub values: f64,
    pub lifestyle: f64,
    pub location: f64,
}

impl CompatibilityBreakdown {
    /// Weighted total on a 0-100 scale
    pub fn total(&self, weights: &ScoringWeights) -> u8 {
        let w = weights.normalized();
        let total = (self.languages * w.languages
            + self.intent * w.intent
            + self.age * w.age
            + self.involvement * w.involvement
            + self.values * w.values
            + self.lifestyle * w.lifestyle
            + self.location * w.location)
            * 100.0;

        total.round().clamp(0.0, 100.0) as u8
    }
}

/// Compatibility (0-100) of `candidate` from the viewer's point of view
///
/// Scoring formula:
/// score = (
///     languages   * 0.20 +   # shared languages
///     intent      * 0.15 +   # shared "looking for" keywords
///     age         * 0.15 +   # closer ages score higher
///     involvement * 0.20 +   # custody splits that add up to 100%
///     values      * 0.15 +   # shared core values
///     lifestyle   * 0.10 +   # same smoking / alcohol habits
///     location    * 0.05     # same city or country, or open to relocating
/// )
///
/// Returns 0 when there is no viewer.
pub fn compatibility_score(
    viewer: Option<&StoredProfile>,
    candidate: &StoredProfile,
    weights: &ScoringWeights,
) -> u8 {
    match viewer {
        Some(viewer) => compatibility_breakdown(viewer, candidate).total(weights),
        None => 0,
    }
}

/// Attribute comparisons behind [`compatibility_score`]. Every comparison is
/// symmetric; an attribute missing on either side contributes 0.
pub fn compatibility_breakdown(a: &StoredProfile, b: &StoredProfile) -> CompatibilityBreakdown {
    CompatibilityBreakdown {
        languages: overlap_ratio(
            &normalized_set(a.languages.as_deref().unwrap_or_default()),
            &normalized_set(b.languages.as_deref().unwrap_or_default()),
        ),
        intent: overlap_ratio(&intent_keywords(a), &intent_keywords(b)),
        age: age_score(a.age, b.age),
        involvement: involvement_score(involvement_share(a), involvement_share(b)),
        values: overlap_ratio(
            &normalized_set(&resolve_values(a)),
            &normalized_set(&resolve_values(b)),
        ),
        lifestyle: lifestyle_score(a, b),
        location: location_score(a, b),
    }
}

fn normalized_set(items: &[String]) -> HashSet<String> {
    items
        .iter()
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// |A ∩ B| / min(|A|, |B|), or 0 when either side is empty
#[inline]
fn overlap_ratio(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / smaller as f64
}

fn intent_keywords(profile: &StoredProfile) -> HashSet<String> {
    resolve_looking_for(profile)
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .map(str::to_string)
        .collect()
}

#[inline]
fn age_score(a: Option<u8>, b: Option<u8>) -> f64 {
    match (a.filter(|age| *age > 0), b.filter(|age| *age > 0)) {
        (Some(a), Some(b)) => {
            let diff = (a as f64 - b as f64).abs();
            (1.0 - diff / AGE_SPAN_YEARS).max(0.0)
        }
        _ => 0.0,
    }
}

/// The profile's own share of parenting time, in percent
fn involvement_share(profile: &StoredProfile) -> Option<i32> {
    if let Some(percent) = profile.involvement_percent.filter(|p| (0..=100).contains(p)) {
        return Some(percent);
    }
    let involvement = resolve_involvement(profile);
    if involvement.is_empty() {
        None
    } else {
        Some(custody_percent(&involvement) as i32)
    }
}

/// Complementary splits (60 + 40) score 1.0; the score falls off linearly
/// as the combined share moves away from 100%
#[inline]
fn involvement_score(a: Option<i32>, b: Option<i32>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => {
            let gap = ((a + b) - 100).abs() as f64;
            (1.0 - gap / 50.0).max(0.0)
        }
        _ => 0.0,
    }
}

fn lifestyle_score(a: &StoredProfile, b: &StoredProfile) -> f64 {
    let smoking = |p: &StoredProfile| p.smoking.as_deref().and_then(Smoking::from_stored);
    let alcohol = |p: &StoredProfile| {
        p.drinking
            .as_deref()
            .or(p.alcohol.as_deref())
            .and_then(Alcohol::from_stored)
    };

    let mut score = 0.0;
    if let (Some(x), Some(y)) = (smoking(a), smoking(b)) {
        if x == y {
            score += 0.5;
        }
    }
    if let (Some(x), Some(y)) = (alcohol(a), alcohol(b)) {
        if x == y {
            score += 0.5;
        }
    }
    score
}

fn location_score(a: &StoredProfile, b: &StoredProfile) -> f64 {
    let same = |x: &Option<String>, y: &Option<String>| match (present(x.as_ref()), present(y.as_ref())) {
        (Some(x), Some(y)) => x.trim().eq_ignore_ascii_case(y.trim()),
        _ => false,
    };

    let mut score: f64 = if same(&a.city, &b.city) {
        1.0
    } else if same(&a.country, &b.country) {
        0.5
    } else {
        0.0
    };

    // Relocation only helps when both sides say something about location
    let has_location = |p: &StoredProfile| {
        present(p.city.as_ref()).is_some()
            || present(p.country.as_ref()).is_some()
            || p.open_to_relocation.is_some()
    };
    let relocating = a.open_to_relocation.unwrap_or(false) || b.open_to_relocation.unwrap_or(false);
    if relocating && has_location(a) && has_location(b) {
        score = score.max(0.5);
    }
    score
}
