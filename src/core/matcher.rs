use crate::core::scoring::compatibility_score;
use crate::models::{CompatibilityResult, RoommateMatch, ScoringWeights, TenantPreference};
use tracing::debug;

/// Ranking orchestrator: scores a subject against a candidate pool and
/// selects the top-N matches.
///
/// The caller is responsible for pre-filtering the pool (same property,
/// active lease, and so on); the matcher only re-applies self-exclusion
/// as a safety net.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score a single pair with this matcher's weights.
    pub fn score(&self, a: &TenantPreference, b: &TenantPreference) -> CompatibilityResult {
        compatibility_score(a, b, &self.weights)
    }

    /// Find the best roommate matches for a tenant.
    ///
    /// Scores every candidate (skipping the subject itself), sorts
    /// descending by overall score, and truncates to `top_n`. The sort is
    /// stable, so exact ties keep the candidate input order. `top_n == 0`
    /// and an empty pool both return an empty list.
    pub fn find_matches(
        &self,
        subject: &TenantPreference,
        candidates: &[TenantPreference],
        top_n: usize,
    ) -> Vec<RoommateMatch> {
        let mut matches: Vec<RoommateMatch> = candidates
            .iter()
            .filter(|candidate| candidate.tenant_id != subject.tenant_id)
            .map(|candidate| RoommateMatch {
                tenant_id: candidate.tenant_id.clone(),
                compatibility: compatibility_score(subject, candidate, &self.weights),
            })
            .collect();

        // Stable descending sort: ties keep candidate input order
        matches.sort_by(|a, b| {
            b.compatibility
                .overall
                .partial_cmp(&a.compatibility.overall)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(top_n);

        debug!(
            tenant_id = %subject.tenant_id,
            candidates = candidates.len(),
            returned = matches.len(),
            "ranked roommate matches"
        );

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
