//! Verdict aggregation: complexity classification and triage counts

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::criteria::{CriterionEvaluation, CriterionStatus};

/// Case complexity derived from the required criteria subset.
///
/// `Low` means every required criterion is met and the case is a candidate
/// for streamlined review; `High` means at least one required criterion is
/// unmet or unresolved and the case needs full clinical review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Low => write!(f, "low"),
            Complexity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = crate::error::PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Complexity::Low),
            "high" => Ok(Complexity::High),
            other => Err(crate::error::PolicyError::ParseError(format!(
                "unknown complexity: {}",
                other
            ))),
        }
    }
}

/// Aggregate counts over an evaluation list, used for dashboards and for
/// recommendation inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageSummary {
    pub total_criteria: usize,
    pub met: usize,
    pub unmet: usize,
    pub unknown: usize,
    pub required_criteria: usize,
    pub required_met: usize,
    pub all_required_met: bool,
    pub has_unmet_required: bool,
    pub has_unknown_required: bool,
}

/// Classifies case complexity from the required criteria subset.
///
/// Optional criteria never affect the result, and an empty evaluation list
/// is `Low` (vacuously, nothing required is outstanding).
pub fn calculate_complexity(evaluations: &[CriterionEvaluation]) -> Complexity {
    let needs_review = evaluations.iter().any(|evaluation| {
        evaluation.required
            && matches!(
                evaluation.status,
                CriterionStatus::Unmet | CriterionStatus::Unknown
            )
    });

    if needs_review {
        Complexity::High
    } else {
        Complexity::Low
    }
}

/// Computes the triage counts for an evaluation list.
///
/// `all_required_met` holds exactly when every required criterion is met,
/// which on the empty list is vacuously true.
pub fn triage_summary(evaluations: &[CriterionEvaluation]) -> TriageSummary {
    let met = count_status(evaluations, CriterionStatus::Met);
    let unmet = count_status(evaluations, CriterionStatus::Unmet);
    let unknown = count_status(evaluations, CriterionStatus::Unknown);

    let required: Vec<&CriterionEvaluation> =
        evaluations.iter().filter(|e| e.required).collect();
    let required_met = required
        .iter()
        .filter(|e| e.status == CriterionStatus::Met)
        .count();
    let has_unmet_required = required
        .iter()
        .any(|e| e.status == CriterionStatus::Unmet);
    let has_unknown_required = required
        .iter()
        .any(|e| e.status == CriterionStatus::Unknown);

    TriageSummary {
        total_criteria: evaluations.len(),
        met,
        unmet,
        unknown,
        required_criteria: required.len(),
        required_met,
        all_required_met: required_met == required.len()
            && !has_unmet_required
            && !has_unknown_required,
        has_unmet_required,
        has_unknown_required,
    }
}

fn count_status(evaluations: &[CriterionEvaluation], status: CriterionStatus) -> usize {
    evaluations.iter().filter(|e| e.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriterionType;

    fn evaluation(required: bool, status: CriterionStatus) -> CriterionEvaluation {
        CriterionEvaluation {
            id: "C1".to_string(),
            description: "test".to_string(),
            criterion_type: CriterionType::Clinical,
            required,
            status,
            evidence: String::new(),
            details: String::new(),
        }
    }

    #[test]
    fn test_all_required_met_is_low_complexity() {
        let evaluations = vec![
            evaluation(true, CriterionStatus::Met),
            evaluation(true, CriterionStatus::Met),
            evaluation(false, CriterionStatus::Unmet),
        ];
        assert_eq!(calculate_complexity(&evaluations), Complexity::Low);
    }

    #[test]
    fn test_required_unknown_is_high_complexity() {
        let evaluations = vec![
            evaluation(true, CriterionStatus::Met),
            evaluation(true, CriterionStatus::Unknown),
        ];
        assert_eq!(calculate_complexity(&evaluations), Complexity::High);
    }

    #[test]
    fn test_required_unmet_is_high_complexity() {
        let evaluations = vec![evaluation(true, CriterionStatus::Unmet)];
        assert_eq!(calculate_complexity(&evaluations), Complexity::High);
    }

    #[test]
    fn test_optional_criteria_never_raise_complexity() {
        let evaluations = vec![
            evaluation(false, CriterionStatus::Unknown),
            evaluation(false, CriterionStatus::Unmet),
        ];
        assert_eq!(calculate_complexity(&evaluations), Complexity::Low);
    }

    #[test]
    fn test_empty_list_is_low_complexity() {
        assert_eq!(calculate_complexity(&[]), Complexity::Low);
    }

    #[test]
    fn test_summary_counts() {
        let evaluations = vec![
            evaluation(true, CriterionStatus::Met),
            evaluation(true, CriterionStatus::Unmet),
            evaluation(true, CriterionStatus::Unknown),
            evaluation(false, CriterionStatus::Met),
        ];

        let summary = triage_summary(&evaluations);
        assert_eq!(summary.total_criteria, 4);
        assert_eq!(summary.met, 2);
        assert_eq!(summary.unmet, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.required_criteria, 3);
        assert_eq!(summary.required_met, 1);
        assert!(!summary.all_required_met);
        assert!(summary.has_unmet_required);
        assert!(summary.has_unknown_required);
    }

    #[test]
    fn test_empty_list_summary_is_vacuously_clean() {
        let summary = triage_summary(&[]);
        assert_eq!(summary.total_criteria, 0);
        assert!(summary.all_required_met);
        assert!(!summary.has_unmet_required);
        assert!(!summary.has_unknown_required);
    }

    #[test]
    fn test_all_required_met_tracks_required_subset_only() {
        let evaluations = vec![
            evaluation(true, CriterionStatus::Met),
            evaluation(false, CriterionStatus::Unknown),
        ];

        let summary = triage_summary(&evaluations);
        assert!(summary.all_required_met);
        assert_eq!(summary.unknown, 1);
    }
}
