use crate::models::ScoringWeights;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchingSettings {
    pub default_top_n: Option<usize>,
    pub max_top_n: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Scoring weights as loaded from config. The defaults are the shipped
/// policy table; operators can override individual weights, but the
/// overrides should still sum to 1.0.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_cleanliness_weight")]
    pub cleanliness: f64,
    #[serde(default = "default_noise_weight")]
    pub noise: f64,
    #[serde(default = "default_sleep_schedule_weight")]
    pub sleep_schedule: f64,
    #[serde(default = "default_social_weight")]
    pub social: f64,
    #[serde(default = "default_guests_weight")]
    pub guests: f64,
    #[serde(default = "default_work_schedule_weight")]
    pub work_schedule: f64,
    #[serde(default = "default_dealbreakers_weight")]
    pub dealbreakers: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            cleanliness: default_cleanliness_weight(),
            noise: default_noise_weight(),
            sleep_schedule: default_sleep_schedule_weight(),
            social: default_social_weight(),
            guests: default_guests_weight(),
            work_schedule: default_work_schedule_weight(),
            dealbreakers: default_dealbreakers_weight(),
            interests: default_interests_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            cleanliness: config.cleanliness,
            noise: config.noise,
            sleep_schedule: config.sleep_schedule,
            social: config.social,
            guests: config.guests,
            work_schedule: config.work_schedule,
            dealbreakers: config.dealbreakers,
            interests: config.interests,
        }
    }
}

fn default_cleanliness_weight() -> f64 { 0.25 }
fn default_noise_weight() -> f64 { 0.15 }
fn default_sleep_schedule_weight() -> f64 { 0.15 }
fn default_social_weight() -> f64 { 0.10 }
fn default_guests_weight() -> f64 { 0.10 }
fn default_work_schedule_weight() -> f64 { 0.10 }
fn default_dealbreakers_weight() -> f64 { 0.10 }
fn default_interests_weight() -> f64 { 0.05 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ROOMIE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ROOMIE_)
            // e.g., ROOMIE_SCORING__WEIGHTS__CLEANLINESS -> scoring.weights.cleanliness
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
