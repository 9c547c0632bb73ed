//! Property-based tests for scoring heuristics, venue resolution and identity matching.

use proptest::prelude::*;
use scholar_recruiter_mcp::models::IdentityMatch;
use scholar_recruiter_mcp::scoring::{
    AcademicWeights, ActivityRating, ActivitySignals, ActivityWeights, ScoringWeights,
    academic_score, activity_score, composite_score, rising_star_score,
};
use scholar_recruiter_mcp::venues::VenueTable;

fn arb_signals() -> impl Strategy<Value = ActivitySignals> {
    (any::<u64>(), any::<u64>(), any::<u64>(), 0u64..1_000, 0u64..1_000, any::<bool>()).prop_map(
        |(followers, total_stars, public_repos, recent_events, push_events, has_bio)| {
            ActivitySignals {
                followers,
                total_stars,
                public_repos,
                recent_events,
                push_events,
                has_bio,
            }
        },
    )
}

proptest! {
    /// Activity score stays in range and is a pure function of its inputs.
    #[test]
    fn activity_score_bounded_and_deterministic(signals in arb_signals()) {
        let weights = ActivityWeights::default();
        let score = activity_score(&signals, &weights);
        prop_assert!(score <= 100);
        prop_assert_eq!(score, activity_score(&signals, &weights));
    }

    /// More followers never lowers the activity score.
    #[test]
    fn activity_score_monotonic_in_followers(signals in arb_signals(), extra in 0u64..10_000) {
        let weights = ActivityWeights::default();
        let more =
            ActivitySignals { followers: signals.followers.saturating_add(extra), ..signals };
        prop_assert!(activity_score(&more, &weights) >= activity_score(&signals, &weights));
    }

    /// Every score maps to a rating tier consistent with its thresholds.
    #[test]
    fn rating_tiers_follow_thresholds(score in 0u8..=100) {
        let rating = ActivityRating::from_score(score);
        let expected = match score {
            80.. => ActivityRating::Excellent,
            60..=79 => ActivityRating::Good,
            40..=59 => ActivityRating::Moderate,
            20..=39 => ActivityRating::Low,
            _ => ActivityRating::Minimal,
        };
        prop_assert_eq!(rating, expected);
    }

    /// Academic score stays in range for any h-index and citation count.
    #[test]
    fn academic_score_bounded(h_index in any::<i32>(), citations in any::<i64>()) {
        let score = academic_score(h_index, citations, &AcademicWeights::default());
        prop_assert!(score <= 100);
    }

    /// The composite lies between its two inputs.
    #[test]
    fn composite_between_inputs(academic in 0u8..=100, github in 0u8..=100) {
        let composite = composite_score(academic, Some(github), &ScoringWeights::default());
        prop_assert!(composite >= academic.min(github));
        prop_assert!(composite <= academic.max(github));
    }

    /// Without GitHub the composite is the academic score.
    #[test]
    fn composite_without_github(academic in 0u8..=100) {
        prop_assert_eq!(composite_score(academic, None, &ScoringWeights::default()), academic);
    }

    /// Rising-star score is finite and non-negative.
    #[test]
    fn rising_star_score_non_negative(citations in any::<i64>(), h_index in any::<i32>()) {
        let score = rising_star_score(citations, h_index);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    /// Strings that are not shortcuts pass through resolution unchanged.
    #[test]
    fn unknown_venue_passthrough(venue in "[A-Za-z ]{0,40}") {
        let table = VenueTable::default();
        prop_assume!(table.get(&venue).is_none());
        prop_assert_eq!(table.resolve(&venue), venue);
    }

    /// Shortcuts resolve to their canonical name regardless of case.
    #[test]
    fn known_venue_resolves(index in 0usize..100, upper in any::<bool>()) {
        let table = VenueTable::default();
        let entry = &table.entries()[index % table.len()];
        let key = if upper { entry.shortcut.to_uppercase() } else { entry.shortcut.clone() };
        prop_assert_eq!(table.resolve(&key), entry.canonical());
    }

    /// Name comparison is symmetric and a name always matches itself.
    #[test]
    fn identity_match_symmetric(a in "[A-Za-z .]{0,20}", b in "[A-Za-z .]{0,20}") {
        prop_assert_eq!(IdentityMatch::compare(&a, &b), IdentityMatch::compare(&b, &a));
        if !a.trim().is_empty() {
            prop_assert_eq!(IdentityMatch::compare(&a, &a), IdentityMatch::Exact);
        }
    }
}
