use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use validator::Validate;

/// A tenant's lifestyle preferences, as stored by the preference service.
///
/// Scale fields use a 1-5 range; `validate()` enforces it at the boundary.
/// The scoring engine itself never panics on out-of-range values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TenantPreference {
    pub tenant_id: String,
    /// 1 = tolerant of mess, 5 = requires very clean
    #[serde(default = "default_scale")]
    #[validate(range(min = 1, max = 5))]
    pub cleanliness_importance: u8,
    /// 1 = needs quiet, 5 = tolerates loud
    #[serde(default = "default_scale")]
    #[validate(range(min = 1, max = 5))]
    pub noise_tolerance: u8,
    /// 1 = never hosts, 5 = hosts often
    #[serde(default = "default_scale")]
    #[validate(range(min = 1, max = 5))]
    pub guest_frequency: u8,
    /// 1 = introvert, 5 = extrovert
    #[serde(default = "default_scale")]
    #[validate(range(min = 1, max = 5))]
    pub social_preference: u8,
    #[serde(default)]
    pub sleep_schedule: SleepSchedule,
    #[serde(default)]
    pub work_schedule: WorkSchedule,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub pets: bool,
    #[serde(default = "default_true")]
    pub overnight_guests: bool,
    /// Free-text, comma-separated tags, e.g. "fitness,cooking,gaming"
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TenantPreference {
    /// Normalized interest tags: split on comma, trimmed, lower-cased,
    /// empty entries dropped.
    pub fn interest_tags(&self) -> BTreeSet<String> {
        self.interests
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

fn default_scale() -> u8 {
    3
}

fn default_true() -> bool {
    true
}

/// Sleep schedule tag. Unrecognized tags are preserved as `Other` and
/// fall through to the lookup-miss score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepSchedule {
    EarlyBird,
    NightOwl,
    Flexible,
    #[serde(untagged)]
    Other(String),
}

impl Default for SleepSchedule {
    fn default() -> Self {
        SleepSchedule::Flexible
    }
}

/// Work schedule tag. Same handling of unrecognized tags as `SleepSchedule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSchedule {
    Remote,
    Office,
    Hybrid,
    Student,
    #[serde(untagged)]
    Other(String),
}

impl Default for WorkSchedule {
    fn default() -> Self {
        WorkSchedule::Remote
    }
}

/// The eight scored compatibility factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Cleanliness,
    Noise,
    SleepSchedule,
    Social,
    Guests,
    WorkSchedule,
    Dealbreakers,
    Interests,
}

/// Per-pair compatibility outcome: weighted overall score, per-factor
/// breakdown, and the shared interest tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub overall: f64,
    pub breakdown: BTreeMap<Factor, f64>,
    pub common_interests: Vec<String>,
}

impl CompatibilityResult {
    /// Degenerate zero result for a missing preference record.
    pub fn absent() -> Self {
        Self {
            overall: 0.0,
            breakdown: BTreeMap::new(),
            common_interests: Vec::new(),
        }
    }
}

/// Scored match result for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoommateMatch {
    pub tenant_id: String,
    #[serde(flatten)]
    pub compatibility: CompatibilityResult,
}

/// Scoring weights, one per factor. Must sum to 1.0 for the overall
/// score to stay on the 0-100 scale.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub cleanliness: f64,
    pub noise: f64,
    pub sleep_schedule: f64,
    pub social: f64,
    pub guests: f64,
    pub work_schedule: f64,
    pub dealbreakers: f64,
    pub interests: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cleanliness: 0.25,
            noise: 0.15,
            sleep_schedule: 0.15,
            social: 0.10,
            guests: 0.10,
            work_schedule: 0.10,
            dealbreakers: 0.10,
            interests: 0.05,
        }
    }
}
