use crate::core::interests::interests_compatibility;
use crate::core::schedules::{sleep_compatibility, work_compatibility};
use crate::models::{CompatibilityResult, Factor, ScoringWeights, TenantPreference};
use std::collections::BTreeMap;

/// Calculate the compatibility score (0-100) between two tenants
///
/// Scoring formula:
/// overall = (
///     cleanliness * 0.25 +     # 1-5 scale proximity
///     noise * 0.15 +           # 1-5 scale proximity
///     sleep_schedule * 0.15 +  # lookup table
///     social * 0.10 +          # 1-5 scale proximity
///     guests * 0.10 +          # 1-5 scale proximity
///     work_schedule * 0.10 +   # lookup table
///     dealbreakers * 0.10 +    # fixed penalties per mismatched flag
///     interests * 0.05         # shared-tag bonus
/// )
///
/// Pure and symmetric: swapping the arguments changes nothing. Every
/// per-factor score is floored at 0 before weighting.
pub fn compatibility_score(
    a: &TenantPreference,
    b: &TenantPreference,
    weights: &ScoringWeights,
) -> CompatibilityResult {
    let cleanliness = scale_proximity(a.cleanliness_importance, b.cleanliness_importance, 25.0);
    let noise = scale_proximity(a.noise_tolerance, b.noise_tolerance, 25.0);
    let social = scale_proximity(a.social_preference, b.social_preference, 20.0);
    let guests = scale_proximity(a.guest_frequency, b.guest_frequency, 25.0);

    let sleep = sleep_compatibility(&a.sleep_schedule, &b.sleep_schedule);
    let work = work_compatibility(&a.work_schedule, &b.work_schedule);

    let dealbreakers = dealbreaker_score(a, b);
    let (interest_score, common_interests) = interests_compatibility(a, b);

    let overall = (cleanliness * weights.cleanliness
        + noise * weights.noise
        + sleep * weights.sleep_schedule
        + social * weights.social
        + guests * weights.guests
        + work * weights.work_schedule
        + dealbreakers * weights.dealbreakers
        + interest_score * weights.interests)
        .clamp(0.0, 100.0);

    let mut breakdown = BTreeMap::new();
    breakdown.insert(Factor::Cleanliness, cleanliness);
    breakdown.insert(Factor::Noise, noise);
    breakdown.insert(Factor::SleepSchedule, sleep);
    breakdown.insert(Factor::Social, social);
    breakdown.insert(Factor::Guests, guests);
    breakdown.insert(Factor::WorkSchedule, work);
    breakdown.insert(Factor::Dealbreakers, dealbreakers);
    breakdown.insert(Factor::Interests, interest_score);

    CompatibilityResult {
        overall,
        breakdown,
        common_interests,
    }
}

/// Variant for callers that may be missing a preference record entirely:
/// either side absent yields the degenerate zero result.
pub fn compatibility_score_opt(
    a: Option<&TenantPreference>,
    b: Option<&TenantPreference>,
    weights: &ScoringWeights,
) -> CompatibilityResult {
    match (a, b) {
        (Some(a), Some(b)) => compatibility_score(a, b, weights),
        _ => CompatibilityResult::absent(),
    }
}

/// Proximity score on a 1-5 scale: each step of difference costs
/// `step_penalty` points, floored at 0.
#[inline]
fn scale_proximity(a: u8, b: u8, step_penalty: f64) -> f64 {
    let diff = (f64::from(a) - f64::from(b)).abs();
    (100.0 - diff * step_penalty).max(0.0)
}

/// Dealbreaker score: fixed, cumulative penalties for mismatched flags,
/// floored at 0 (all three mismatched would otherwise go to -0).
#[inline]
fn dealbreaker_score(a: &TenantPreference, b: &TenantPreference) -> f64 {
    let mut score: f64 = 100.0;
    if a.smoking != b.smoking {
        score -= 50.0; // Major incompatibility
    }
    if a.pets != b.pets {
        score -= 30.0; // Moderate incompatibility
    }
    if a.overnight_guests != b.overnight_guests {
        score -= 20.0; // Minor incompatibility
    }
    score.max(0.0)
}
