//! Property tests over the evaluation engine and the triage aggregators.

use domain_policy::{
    calculate_complexity, evaluate_criteria, triage_summary, Complexity, CriterionStatus,
};
use proptest::prelude::*;
use test_utils::fixtures;
use test_utils::generators::{arb_case_data, arb_criteria, arb_evaluations};

proptest! {
    // Output mirrors input positionally: same length, and id/type/required
    // carried through unchanged at every index.
    #[test]
    fn evaluation_mirrors_criterion_list(case_data in arb_case_data(), criteria in arb_criteria(12)) {
        let evaluations = evaluate_criteria(&case_data, &criteria);

        prop_assert_eq!(evaluations.len(), criteria.len());
        for (criterion, evaluation) in criteria.iter().zip(&evaluations) {
            prop_assert_eq!(&evaluation.id, &criterion.id);
            prop_assert_eq!(evaluation.criterion_type, criterion.criterion_type);
            prop_assert_eq!(evaluation.required, criterion.required);
        }
    }

    #[test]
    fn evaluation_is_deterministic(case_data in arb_case_data(), criteria in arb_criteria(12)) {
        let first = evaluate_criteria(&case_data, &criteria);
        let second = evaluate_criteria(&case_data, &criteria);
        prop_assert_eq!(first, second);
    }

    // High complexity exactly when some required entry is unmet or unknown.
    #[test]
    fn complexity_tracks_required_subset(evaluations in arb_evaluations(16)) {
        let expected_high = evaluations.iter().any(|e| {
            e.required
                && matches!(e.status, CriterionStatus::Unmet | CriterionStatus::Unknown)
        });

        let complexity = calculate_complexity(&evaluations);
        prop_assert_eq!(complexity == Complexity::High, expected_high);
    }

    // all_required_met exactly when every required entry is met; vacuously
    // true when nothing is required.
    #[test]
    fn all_required_met_is_an_iff(evaluations in arb_evaluations(16)) {
        let expected = evaluations
            .iter()
            .filter(|e| e.required)
            .all(|e| e.status == CriterionStatus::Met);

        let summary = triage_summary(&evaluations);
        prop_assert_eq!(summary.all_required_met, expected);
    }

    #[test]
    fn summary_counts_partition_the_list(evaluations in arb_evaluations(16)) {
        let summary = triage_summary(&evaluations);
        prop_assert_eq!(summary.met + summary.unmet + summary.unknown, summary.total_criteria);
        prop_assert!(summary.required_met <= summary.required_criteria);
    }
}

#[test]
fn complexity_of_empty_list_is_low() {
    assert_eq!(calculate_complexity(&[]), Complexity::Low);
    assert!(triage_summary(&[]).all_required_met);
}

#[test]
fn full_policy_evaluation_stays_aligned() {
    let case_data = fixtures::stage_iv_nsclc_case();
    let criteria = fixtures::keytruda_criteria();

    let evaluations = evaluate_criteria(&case_data, &criteria);
    assert_eq!(evaluations.len(), criteria.len());
    for (criterion, evaluation) in criteria.iter().zip(&evaluations) {
        assert_eq!(evaluation.id, criterion.id);
    }
}
