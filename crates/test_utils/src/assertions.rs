//! Custom Test Assertions
//!
//! Assertion helpers for evaluation results that produce more meaningful
//! failure messages than standard assertions.

use domain_policy::{CriterionEvaluation, CriterionStatus};

/// Asserts that the evaluation for the given criterion id has the expected
/// verdict.
///
/// # Panics
///
/// Panics if no evaluation carries the id, or if the verdict differs. The
/// failure message includes the recorded evidence.
pub fn assert_criterion_status(
    evaluations: &[CriterionEvaluation],
    id: &str,
    expected: CriterionStatus,
) {
    let evaluation = evaluations
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("No evaluation found for criterion {}", id));

    assert_eq!(
        evaluation.status, expected,
        "Criterion {} expected {}, got {} (evidence: {:?})",
        id, expected, evaluation.status, evaluation.evidence
    );
}

/// Asserts that every evaluation in the list is met.
pub fn assert_all_met(evaluations: &[CriterionEvaluation]) {
    for evaluation in evaluations {
        assert_eq!(
            evaluation.status,
            CriterionStatus::Met,
            "Criterion {} is {} (evidence: {:?})",
            evaluation.id,
            evaluation.status,
            evaluation.evidence
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::EvaluationBuilder;

    #[test]
    fn test_assert_criterion_status_passes() {
        let evaluations = vec![EvaluationBuilder::new("C1").met().build()];
        assert_criterion_status(&evaluations, "C1", CriterionStatus::Met);
    }

    #[test]
    #[should_panic(expected = "No evaluation found for criterion C9")]
    fn test_assert_criterion_status_missing_id() {
        let evaluations = vec![EvaluationBuilder::new("C1").met().build()];
        assert_criterion_status(&evaluations, "C9", CriterionStatus::Met);
    }

    #[test]
    #[should_panic(expected = "Criterion C1 expected met")]
    fn test_assert_criterion_status_wrong_verdict() {
        let evaluations = vec![EvaluationBuilder::new("C1").unmet().build()];
        assert_criterion_status(&evaluations, "C1", CriterionStatus::Met);
    }
}
