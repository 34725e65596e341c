use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub email: EmailSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Storage backend settings
///
/// `url` and `service_role_key` stay optional so the service can start
/// without them; endpoints that need storage answer 500 instead.
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: Option<String>,
    pub service_role_key: Option<String>,
    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,
    #[serde(default = "default_invitations_table")]
    pub invitations_table: String,
}

impl Default for SupabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            service_role_key: None,
            profiles_table: default_profiles_table(),
            invitations_table: default_invitations_table(),
        }
    }
}

impl SupabaseSettings {
    /// URL and key, if both are set and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let key = self
            .service_role_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some((url, key))
    }
}

fn default_profiles_table() -> String { "profiles".to_string() }
fn default_invitations_table() -> String { "invitations".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub resend_api_key: Option<String>,
    #[serde(default = "default_email_api_base")]
    pub api_base: String,
    #[serde(default = "default_email_from")]
    pub from: String,
    #[serde(default = "default_admin_recipients")]
    pub admin_recipients: Vec<String>,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            api_base: default_email_api_base(),
            from: default_email_from(),
            admin_recipients: default_admin_recipients(),
        }
    }
}

impl EmailSettings {
    pub fn api_key(&self) -> Option<&str> {
        self.resend_api_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn default_email_api_base() -> String { "https://api.resend.com".to_string() }
fn default_email_from() -> String { "Kindly <hello@impactfuel.ch>".to_string() }
fn default_admin_recipients() -> Vec<String> { vec!["info@impactfuel.ch".to_string()] }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_capacity() -> u64 { 100 }
fn default_cache_ttl() -> u64 { 60 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_languages_weight")]
    pub languages: f64,
    #[serde(default = "default_intent_weight")]
    pub intent: f64,
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_involvement_weight")]
    pub involvement: f64,
    #[serde(default = "default_values_weight")]
    pub values: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            languages: default_languages_weight(),
            intent: default_intent_weight(),
            age: default_age_weight(),
            involvement: default_involvement_weight(),
            values: default_values_weight(),
            lifestyle: default_lifestyle_weight(),
            location: default_location_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            languages: config.languages,
            intent: config.intent,
            age: config.age,
            involvement: config.involvement,
            values: config.values,
            lifestyle: config.lifestyle,
            location: config.location,
        }
    }
}

fn default_languages_weight() -> f64 { 0.20 }
fn default_intent_weight() -> f64 { 0.15 }
fn default_age_weight() -> f64 { 0.15 }
fn default_involvement_weight() -> f64 { 0.20 }
fn default_values_weight() -> f64 { 0.15 }
fn default_lifestyle_weight() -> f64 { 0.10 }
fn default_location_weight() -> f64 { 0.05 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with KINDLY__)
    /// 4. The bare SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY and RESEND_API_KEY variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., KINDLY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("KINDLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("KINDLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)
}

/// Pick up the credentials the hosting platform injects without the
/// KINDLY__ prefix. Prefixed values win.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("supabase.url", "SUPABASE_URL", "KINDLY__SUPABASE__URL"),
        (
            "supabase.service_role_key",
            "SUPABASE_SERVICE_ROLE_KEY",
            "KINDLY__SUPABASE__SERVICE_ROLE_KEY",
        ),
        ("email.resend_api_key", "RESEND_API_KEY", "KINDLY__EMAIL__RESEND_API_KEY"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (key, bare, prefixed) in overrides {
        if env::var(prefixed).is_ok() {
            continue;
        }
        if let Ok(value) = env::var(bare) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
