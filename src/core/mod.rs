// Core pipeline exports
pub mod completion;
pub mod filters;
pub mod mapper;
pub mod matcher;
pub mod placeholder;
pub mod scoring;
pub mod session;

pub use completion::{calculate_profile_completion, missing_fields};
pub use filters::{custody_percent, filter_candidates, matches_filters};
pub use mapper::{map_profile_to_candidate, map_profiles_to_candidates};
pub use matcher::{Matcher, MatchResult};
pub use placeholder::{photo_or_placeholder, placeholder_photo};
pub use scoring::{compatibility_breakdown, compatibility_score, CompatibilityBreakdown};
pub use session::{topic_status, Session};
