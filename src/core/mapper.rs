use crate::core::{completion::calculate_profile_completion, scoring::compatibility_score};
use crate::models::{
    Alcohol, Candidate, Exercise, Gender, LookingFor, PreferredMethod, ScoringWeights, Smoking,
    StoredProfile, Substance,
};

/// Treat empty strings like missing values
#[inline]
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

#[inline]
fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[inline]
fn optional_text(value: &Option<String>) -> Option<String> {
    present(value.as_ref()).map(str::to_string)
}

/// First space-delimited token, or the whole name when that token is empty
fn first_token(name: &str) -> &str {
    name.split(' ').next().filter(|s| !s.is_empty()).unwrap_or(name)
}

/// Display name: full name, first name, display name, email local-part, "Unknown"
pub fn resolve_display_name(profile: &StoredProfile) -> String {
    present(profile.full_name.as_ref())
        .or_else(|| present(profile.first_name.as_ref()))
        .or_else(|| present(profile.display_name.as_ref()))
        .or_else(|| {
            present(profile.email.as_ref())
                .and_then(|email| email.split('@').next())
                .filter(|local| !local.is_empty())
        })
        .unwrap_or("Unknown")
        .to_string()
}

/// First name: explicit first name, else the first token of full name,
/// display name, or the resolved display name
pub fn resolve_first_name(profile: &StoredProfile, display_name: &str) -> String {
    present(profile.first_name.as_ref())
        .or_else(|| present(profile.full_name.as_ref()).map(first_token))
        .or_else(|| present(profile.display_name.as_ref()).map(first_token))
        .unwrap_or_else(|| first_token(display_name))
        .to_string()
}

pub fn resolve_looking_for(profile: &StoredProfile) -> String {
    match &profile.looking_for {
        Some(LookingFor::List(items)) => items.join(", "),
        other => present(profile.looking_for_text.as_ref())
            .or(match other {
                Some(LookingFor::Text(raw)) if !raw.is_empty() => Some(raw.as_str()),
                _ => None,
            })
            .unwrap_or_default()
            .to_string(),
    }
}

pub fn resolve_occupation(profile: &StoredProfile) -> String {
    present(profile.occupation.as_ref())
        .or_else(|| present(profile.profession.as_ref()))
        .unwrap_or_default()
        .to_string()
}

/// Core values live in `qualities` (onboarding) with `values` as the older column
pub fn resolve_values(profile: &StoredProfile) -> Vec<String> {
    profile
        .qualities
        .clone()
        .or_else(|| profile.values.clone())
        .unwrap_or_default()
}

/// Format a custody percentage as "p/(100-p) custody"
pub fn format_involvement(percent: Option<i32>) -> String {
    match percent {
        None => String::new(),
        Some(50) => "50/50 custody".to_string(),
        Some(60) => "60/40 custody".to_string(),
        Some(40) => "40/60 custody".to_string(),
        Some(70) => "70/30 custody".to_string(),
        Some(30) => "30/70 custody".to_string(),
        Some(p) => format!("{}/{} custody", p, 100 - i64::from(p)),
    }
}

pub fn resolve_involvement(profile: &StoredProfile) -> String {
    present(profile.involvement.as_ref())
        .map(str::to_string)
        .unwrap_or_else(|| format_involvement(profile.involvement_percent))
}

/// `drinking` is the current column; `alcohol` is read when it is absent
fn resolve_alcohol(profile: &StoredProfile) -> Alcohol {
    profile
        .drinking
        .as_deref()
        .or(profile.alcohol.as_deref())
        .and_then(Alcohol::from_stored)
        .unwrap_or_default()
}

/// Convert a stored profile into a candidate. Never fails; missing or
/// malformed fields fall back to defaults.
pub fn map_profile_to_candidate(profile: &StoredProfile) -> Candidate {
    let display_name = resolve_display_name(profile);
    let first_name = resolve_first_name(profile, &display_name);

    Candidate {
        id: text(&profile.id),
        first_name,
        display_name,
        gender: profile
            .gender
            .as_deref()
            .and_then(Gender::from_stored)
            .unwrap_or_default(),
        age: profile.age.unwrap_or(0),
        city: text(&profile.city),
        country: text(&profile.country),
        nationality: text(&profile.nationality),
        languages: profile.languages.clone().unwrap_or_default(),
        photo: text(&profile.photo_url),
        bio: text(&profile.bio),
        looking_for: resolve_looking_for(profile),
        vision: text(&profile.vision),
        values: resolve_values(profile),
        parenting_philosophy: text(&profile.parenting_philosophy),
        involvement: resolve_involvement(profile),
        involvement_flexibility: text(&profile.involvement_flexibility),
        preferred_method: PreferredMethod::Open,
        open_to_relocation: profile.open_to_relocation.unwrap_or(false),
        relationship_status: text(&profile.relationship_status),
        parenting_status: text(&profile.parenting_status),
        occupation: resolve_occupation(profile),
        education: text(&profile.education),
        financial_situation: text(&profile.financial_situation),
        lifestyle_rhythm: text(&profile.lifestyle_rhythm),
        family_support: text(&profile.family_support),
        smoking: profile
            .smoking
            .as_deref()
            .and_then(Smoking::from_stored)
            .unwrap_or_default(),
        alcohol: resolve_alcohol(profile),
        exercise: profile
            .exercise
            .as_deref()
            .and_then(Exercise::from_stored)
            .unwrap_or_default(),
        diet: text(&profile.diet),
        cannabis: profile.cannabis.as_deref().and_then(Substance::from_stored),
        drugs: profile.drugs.as_deref().and_then(Substance::from_stored),
        height: profile.height.filter(|h| *h > 0),
        weight: profile.weight.filter(|w| *w > 0),
        religion: optional_text(&profile.religion),
        politics: optional_text(&profile.politics),
        ethnicity: optional_text(&profile.ethnicity),
        star_sign: optional_text(&profile.star_sign),
        pets: optional_text(&profile.pets),
        compatibility_score: 0,
        profile_completion: calculate_profile_completion(profile),
    }
}

/// Map a list of stored profiles, scoring each against `viewer` when one is given
pub fn map_profiles_to_candidates(
    profiles: &[StoredProfile],
    viewer: Option<&StoredProfile>,
    weights: &ScoringWeights,
) -> Vec<Candidate> {
    profiles
        .iter()
        .map(|profile| {
            let mut candidate = map_profile_to_candidate(profile);
            if viewer.is_some() {
                candidate.compatibility_score = compatibility_score(viewer, profile, weights);
            }
            candidate
        })
        .collect()
}
