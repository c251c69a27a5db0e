//! Property-based tests for the scoring engine.
//!
//! These verify invariants that should hold for all inputs:
//! - The clamped score stays in [0, 100]
//! - The recommendation list is never empty
//! - Assessment is deterministic
//! - The score decomposes into base plus independent adjustments
//! - Form sanitization never fails

use biorisk::risk::history;
use biorisk::{
    AssessmentForm, FeedSource, RiskAssessmentInput, RiskLevel, RiskScorer, VaccinationLevel,
    VisitorProtocol,
};
use proptest::prelude::*;

fn vaccination_level() -> impl Strategy<Value = Option<VaccinationLevel>> {
    proptest::option::of(prop_oneof![
        Just(VaccinationLevel::None),
        Just(VaccinationLevel::Basic),
        Just(VaccinationLevel::Standard),
        Just(VaccinationLevel::Comprehensive),
    ])
}

fn visitor_protocol() -> impl Strategy<Value = Option<VisitorProtocol>> {
    proptest::option::of(prop_oneof![
        Just(VisitorProtocol::None),
        Just(VisitorProtocol::SignIn),
        Just(VisitorProtocol::ControlledAccess),
    ])
}

fn feed_source() -> impl Strategy<Value = Option<FeedSource>> {
    proptest::option::of(prop_oneof![
        Just(FeedSource::OnFarm),
        Just(FeedSource::LocalSupplier),
        Just(FeedSource::CertifiedSupplier),
        Just(FeedSource::Mixed),
    ])
}

fn arbitrary_input() -> impl Strategy<Value = RiskAssessmentInput> {
    (
        vaccination_level(),
        visitor_protocol(),
        feed_source(),
        ".{0,80}",
        ".{0,80}",
    )
        .prop_map(
            |(vaccination, visitor, feed, measures, history)| RiskAssessmentInput {
                vaccination_level: vaccination,
                visitor_protocol: visitor,
                feed_source: feed,
                biosecurity_measures: measures,
                disease_history: history,
                ..Default::default()
            },
        )
}

proptest! {
    #[test]
    fn prop_score_is_clamped(input in arbitrary_input()) {
        let result = RiskScorer::default().assess(&input);
        prop_assert!(result.risk_score <= 100);
    }

    #[test]
    fn prop_recommendations_never_empty(input in arbitrary_input()) {
        let result = RiskScorer::default().assess(&input);
        prop_assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn prop_assessment_is_deterministic(input in arbitrary_input()) {
        let scorer = RiskScorer::default();
        prop_assert_eq!(scorer.assess(&input), scorer.assess(&input));
    }

    /// The score is the clamped sum of base and per-category adjustments,
    /// so summation order cannot matter.
    #[test]
    fn prop_score_decomposes_into_adjustments(input in arbitrary_input()) {
        let result = RiskScorer::default().assess(&input);

        let expected = 50
            + input.vaccination_level.map_or(0, |v| v.adjustment())
            + input.visitor_protocol.map_or(0, |v| v.adjustment())
            + input.feed_source.map_or(0, |f| f.adjustment())
            + history::scan(&input.disease_history).adjustment();

        prop_assert_eq!(result.risk_score, expected.clamp(0, 100) as u32);
    }

    #[test]
    fn prop_risk_level_matches_thresholds(input in arbitrary_input()) {
        let result = RiskScorer::default().assess(&input);

        let expected = if result.risk_score < 35 {
            RiskLevel::Low
        } else if result.risk_score < 65 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        };
        prop_assert_eq!(result.risk_level, expected);
    }

    /// Sanitizing arbitrary raw answers never fails, and scoring the result
    /// upholds the same invariants.
    #[test]
    fn prop_sanitize_is_total(
        vaccination in ".{0,20}",
        visitor in ".{0,20}",
        feed in ".{0,20}",
        history in ".{0,80}",
    ) {
        let form = AssessmentForm {
            vaccination_level: vaccination,
            visitor_protocol: visitor,
            feed_source: feed,
            disease_history: history,
            ..Default::default()
        };

        let result = RiskScorer::default().assess(&form.sanitize());
        prop_assert!(result.risk_score <= 100);
        prop_assert!(!result.recommendations.is_empty());
    }
}
