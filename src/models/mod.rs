// Model exports
pub mod domain;

pub use domain::{
    CompatibilityResult, Factor, RoommateMatch, ScoringWeights, SleepSchedule, TenantPreference,
    WorkSchedule,
};
