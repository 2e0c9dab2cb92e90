//! Roomie Match - roommate compatibility engine for co-living properties
//!
//! This library provides the compatibility scoring and ranking core used by
//! the property-management backend. Given one tenant's lifestyle preferences
//! and a pre-filtered pool of other tenants' preferences, it computes a
//! weighted multi-factor compatibility score per pair and returns a ranked
//! top-N match list.
//!
//! The engine is pure and stateless: no I/O, no shared state, safe to call
//! concurrently from any number of request handlers. Fetching preference
//! records, filtering the candidate pool (same property, active lease), and
//! enriching matches for display are the caller's responsibility.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{compatibility_score, compatibility_score_opt, Matcher};
pub use crate::models::{
    CompatibilityResult, Factor, RoommateMatch, ScoringWeights, SleepSchedule, TenantPreference,
    WorkSchedule,
};
