use crate::core::mapper::{
    present, resolve_involvement, resolve_looking_for, resolve_occupation, resolve_values,
};
use crate::models::StoredProfile;

type FieldCheck = fn(&StoredProfile) -> bool;

fn has_text(value: &Option<String>) -> bool {
    present(value.as_ref()).is_some_and(|s| !s.trim().is_empty())
}

fn has_list(value: &Option<Vec<String>>) -> bool {
    value.as_ref().is_some_and(|items| !items.is_empty())
}

/// Fields a complete profile is expected to have. Alternate column names
/// count toward the same entry.
const TRACKED_FIELDS: &[(&str, FieldCheck)] = &[
    ("name", |p| {
        has_text(&p.first_name) || has_text(&p.full_name) || has_text(&p.display_name)
    }),
    ("age", |p| p.age.is_some_and(|age| age > 0)),
    ("gender", |p| has_text(&p.gender)),
    ("city", |p| has_text(&p.city)),
    ("country", |p| has_text(&p.country)),
    ("nationality", |p| has_text(&p.nationality)),
    ("languages", |p| has_list(&p.languages)),
    ("photo", |p| has_text(&p.photo_url)),
    ("bio", |p| has_text(&p.bio)),
    ("looking_for", |p| !resolve_looking_for(p).trim().is_empty()),
    ("vision", |p| has_text(&p.vision)),
    ("values", |p| !resolve_values(p).is_empty() || has_list(&p.values)),
    ("parenting_philosophy", |p| has_text(&p.parenting_philosophy)),
    ("involvement", |p| !resolve_involvement(p).is_empty()),
    ("occupation", |p| !resolve_occupation(p).trim().is_empty()),
    ("education", |p| has_text(&p.education)),
    ("relationship_status", |p| has_text(&p.relationship_status)),
    ("parenting_status", |p| has_text(&p.parenting_status)),
    ("smoking", |p| has_text(&p.smoking)),
    ("alcohol", |p| has_text(&p.drinking) || has_text(&p.alcohol)),
    ("exercise", |p| has_text(&p.exercise)),
    ("diet", |p| has_text(&p.diet)),
    ("height", |p| p.height.is_some_and(|h| h > 0)),
    ("religion", |p| has_text(&p.religion)),
    ("ethnicity", |p| has_text(&p.ethnicity)),
];

/// Names of the tracked fields that are still empty
pub fn missing_fields(profile: &StoredProfile) -> Vec<&'static str> {
    TRACKED_FIELDS
        .iter()
        .filter(|(_, check)| !check(profile))
        .map(|(name, _)| *name)
        .collect()
}

/// Percentage (0-100, rounded) of tracked fields that are filled
pub fn calculate_profile_completion(profile: &StoredProfile) -> u8 {
    let total = TRACKED_FIELDS.len();
    let filled = TRACKED_FIELDS
        .iter()
        .filter(|(_, check)| check(profile))
        .count();

    ((filled * 100 + total / 2) / total) as u8
}
