use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode a field leniently: a value of the wrong JSON type is treated as absent
/// instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `looking_for` is stored either as a list of intents or as free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookingFor {
    List(Vec<String>),
    Text(String),
}

/// Profile record as stored in the `profiles` table
///
/// Every field is optional and several concepts live under more than one
/// column name. The mapper resolves this into a [`Candidate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredProfile {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub age: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub looking_for: Option<LookingFor>,
    #[serde(default, deserialize_with = "lenient")]
    pub looking_for_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub vision: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub qualities: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub values: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub parenting_philosophy: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub involvement: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub involvement_percent: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub involvement_flexibility: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub open_to_relocation: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub relationship_status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub parenting_status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub profession: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub financial_situation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub lifestyle_rhythm: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub family_support: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub smoking: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub drinking: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alcohol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub exercise: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub diet: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cannabis: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub drugs: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<u16>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<u16>,
    #[serde(default, deserialize_with = "lenient")]
    pub religion: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub politics: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ethnicity: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub star_sign: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pets: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    NonBinary,
}

impl Gender {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "non-binary" | "non_binary" | "nonbinary" => Some(Self::NonBinary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoking {
    #[default]
    Never,
    Occasionally,
    Regularly,
    Former,
}

impl Smoking {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "never" => Some(Self::Never),
            "occasionally" => Some(Self::Occasionally),
            "regularly" => Some(Self::Regularly),
            "former" => Some(Self::Former),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alcohol {
    #[default]
    Never,
    Rarely,
    Socially,
    Regularly,
}

impl Alcohol {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "never" => Some(Self::Never),
            "rarely" => Some(Self::Rarely),
            "socially" => Some(Self::Socially),
            "regularly" => Some(Self::Regularly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Daily,
    SeveralWeekly,
    Weekly,
    Occasionally,
    #[default]
    Rarely,
}

impl Exercise {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "several_weekly" => Some(Self::SeveralWeekly),
            "weekly" => Some(Self::Weekly),
            "occasionally" => Some(Self::Occasionally),
            "rarely" => Some(Self::Rarely),
            _ => None,
        }
    }
}

/// Cannabis / drug use frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Substance {
    Never,
    Sometimes,
    Often,
}

impl Substance {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "never" => Some(Self::Never),
            "sometimes" => Some(Self::Sometimes),
            "often" => Some(Self::Often),
            _ => None,
        }
    }
}

/// Deprecated conception preference, superseded by per-profile method lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredMethod {
    Natural,
    Assisted,
    #[default]
    Open,
}

/// Canonical, UI-ready candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub display_name: String,
    pub gender: Gender,
    pub age: u8,
    pub city: String,
    pub country: String,
    pub nationality: String,
    pub languages: Vec<String>,
    pub photo: String,
    pub bio: String,
    pub looking_for: String,
    pub vision: String,
    pub values: Vec<String>,
    pub parenting_philosophy: String,
    pub involvement: String,
    pub involvement_flexibility: String,
    pub preferred_method: PreferredMethod,
    pub open_to_relocation: bool,
    pub relationship_status: String,
    pub parenting_status: String,
    pub occupation: String,
    pub education: String,
    pub financial_situation: String,
    pub lifestyle_rhythm: String,
    pub family_support: String,
    pub smoking: Smoking,
    pub alcohol: Alcohol,
    pub exercise: Exercise,
    pub diet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cannabis: Option<Substance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drugs: Option<Substance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub politics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_sign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pets: Option<String>,
    /// Relative to a single viewer; 0 when no viewer was supplied
    pub compatibility_score: u8,
    pub profile_completion: u8,
}

/// User-set candidate filters
///
/// Omitted fields fall back to their defaults, so a partial JSON object is a
/// valid filter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filters {
    pub age_range: (u8, u8),
    pub location: String,
    pub max_distance: u32,
    pub open_to_relocation: bool,
    pub ethnicity: Vec<String>,
    pub languages: Vec<String>,
    pub looking_for: Vec<String>,
    pub custody_range: (u8, u8),
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            age_range: (25, 50),
            location: String::new(),
            max_distance: 500,
            open_to_relocation: false,
            ethnicity: vec![],
            languages: vec![],
            looking_for: vec![],
            custody_range: (0, 100),
        }
    }
}

/// Compatibility weights, one per compared attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub languages: f64,
    pub intent: f64,
    pub age: f64,
    pub involvement: f64,
    pub values: f64,
    pub lifestyle: f64,
    pub location: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.languages
            + self.intent
            + self.age
            + self.involvement
            + self.values
            + self.lifestyle
            + self.location
    }

    /// Clamp negative weights to zero and rescale so the weights sum to 1.0.
    /// An all-zero set falls back to the defaults.
    pub fn normalized(&self) -> Self {
        let clamped = Self {
            languages: self.languages.max(0.0),
            intent: self.intent.max(0.0),
            age: self.age.max(0.0),
            involvement: self.involvement.max(0.0),
            values: self.values.max(0.0),
            lifestyle: self.lifestyle.max(0.0),
            location: self.location.max(0.0),
        };
        let sum = clamped.sum();
        if sum <= f64::EPSILON {
            return Self::default();
        }

        Self {
            languages: clamped.languages / sum,
            intent: clamped.intent / sum,
            age: clamped.age / sum,
            involvement: clamped.involvement / sum,
            values: clamped.values / sum,
            lifestyle: clamped.lifestyle / sum,
            location: clamped.location / sum,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            languages: 0.20,
            intent: 0.15,
            age: 0.15,
            involvement: 0.20,
            values: 0.15,
            lifestyle: 0.10,
            location: 0.05,
        }
    }
}

/// Which side of the app the user is currently using
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Seeker,
    Candidate,
}

impl UserRole {
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "seeker" => Some(Self::Seeker),
            "candidate" => Some(Self::Candidate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Candidate => "candidate",
        }
    }
}

/// Session-relevant columns of the current user's profile row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionProfile {
    #[serde(default, deserialize_with = "lenient")]
    pub app_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub photo_url: Option<String>,
}

/// Invitation request row persisted for the admin review queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub code: String,
    pub email: String,
    pub name: String,
    pub status: InvitationStatus,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Revoked,
}
