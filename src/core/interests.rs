use crate::models::TenantPreference;

/// Interest-overlap compatibility.
///
/// Returns the overlap score (0-100) and the shared tags, sorted. Every
/// shared tag is worth 25 points, capped at 100. A tenant with no interests
/// listed scores a neutral 50 - absence of data is not incompatibility.
pub fn interests_compatibility(a: &TenantPreference, b: &TenantPreference) -> (f64, Vec<String>) {
    let tags_a = a.interest_tags();
    let tags_b = b.interest_tags();

    if tags_a.is_empty() || tags_b.is_empty() {
        return (50.0, Vec::new());
    }

    // BTreeSet intersection keeps the shared tags sorted
    let common: Vec<String> = tags_a.intersection(&tags_b).cloned().collect();
    let score = (common.len() as f64 * 25.0).min(100.0);

    (score, common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SleepSchedule, WorkSchedule};

    fn pref_with_interests(id: &str, interests: Option<&str>) -> TenantPreference {
        TenantPreference {
            tenant_id: id.to_string(),
            cleanliness_importance: 3,
            noise_tolerance: 3,
            guest_frequency: 3,
            social_preference: 3,
            sleep_schedule: SleepSchedule::Flexible,
            work_schedule: WorkSchedule::Remote,
            smoking: false,
            pets: false,
            overnight_guests: true,
            interests: interests.map(|s| s.to_string()),
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_either_side_empty_is_neutral() {
        let a = pref_with_interests("a", None);
        let b = pref_with_interests("b", Some("hiking,cooking"));

        assert_eq!(interests_compatibility(&a, &b), (50.0, vec![]));
        assert_eq!(interests_compatibility(&b, &a), (50.0, vec![]));

        // Whitespace-only input parses to an empty tag set
        let blank = pref_with_interests("c", Some(" , ,"));
        assert_eq!(interests_compatibility(&blank, &b), (50.0, vec![]));
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let a = pref_with_interests("a", Some("hiking,cooking"));
        let b = pref_with_interests("b", Some("gaming,music"));

        let (score, common) = interests_compatibility(&a, &b);
        assert_eq!(score, 0.0);
        assert!(common.is_empty());
    }

    #[test]
    fn test_each_shared_tag_worth_25() {
        let a = pref_with_interests("a", Some("hiking,cooking,gaming"));
        let b = pref_with_interests("b", Some("hiking,cooking,music"));

        let (score, common) = interests_compatibility(&a, &b);
        assert_eq!(score, 50.0);
        assert_eq!(common, vec!["cooking", "hiking"]);
    }

    #[test]
    fn test_overlap_capped_at_100() {
        let a = pref_with_interests("a", Some("hiking,cooking,gaming,music,yoga"));
        let b = pref_with_interests("b", Some("hiking,cooking,gaming,music,yoga"));

        let (score, common) = interests_compatibility(&a, &b);
        assert_eq!(score, 100.0);
        assert_eq!(common.len(), 5);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let a = pref_with_interests("a", Some("Hiking, COOKING"));
        let b = pref_with_interests("b", Some("hiking,cooking"));

        let (score, common) = interests_compatibility(&a, &b);
        assert_eq!(score, 50.0);
        assert_eq!(common, vec!["cooking", "hiking"]);
    }
}
