//! Recommendation generation
//!
//! A deterministic mapping from the required-criteria verdicts: any unknown
//! required criterion pends the case (missing information beats denial),
//! any unmet required criterion denies it, and only a fully met required
//! set recommends approval.

use domain_policy::{Complexity, CriterionEvaluation, CriterionStatus, Policy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The recommended determination. Advisory only; the Medical Director
/// records the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedAction {
    Approve,
    Deny,
    Pend,
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendedAction::Approve => write!(f, "approve"),
            RecommendedAction::Deny => write!(f, "deny"),
            RecommendedAction::Pend => write!(f, "pend"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// The reviewer-facing recommendation package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: RecommendedAction,
    pub confidence: Confidence,
    pub complexity: Complexity,
    pub primary_reasons: Vec<String>,
    /// Required criteria that could not be evaluated, when pending
    pub information_gaps: Vec<String>,
    pub clinical_rationale: String,
    pub guideline_alignment: String,
    pub risk_considerations: Vec<String>,
    pub alternative_options: Vec<String>,
}

/// Builds the recommendation from the policy and its evaluation verdicts.
pub fn generate_recommendation(
    policy: &Policy,
    evaluations: &[CriterionEvaluation],
) -> Recommendation {
    let required: Vec<&CriterionEvaluation> =
        evaluations.iter().filter(|e| e.required).collect();
    let required_unmet: Vec<&&CriterionEvaluation> = required
        .iter()
        .filter(|e| e.status == CriterionStatus::Unmet)
        .collect();
    let required_unknown: Vec<&&CriterionEvaluation> = required
        .iter()
        .filter(|e| e.status == CriterionStatus::Unknown)
        .collect();

    let (recommendation, confidence, complexity, primary_reasons, information_gaps, rationale);

    if !required_unknown.is_empty() {
        recommendation = RecommendedAction::Pend;
        confidence = Confidence::Medium;
        complexity = Complexity::High;
        primary_reasons = vec![
            format!(
                "{} required criteria cannot be evaluated due to missing information",
                required_unknown.len()
            ),
            "Additional documentation needed before determination can be made".to_string(),
        ];
        information_gaps = required_unknown
            .iter()
            .map(|e| e.description.clone())
            .collect();
        rationale = format!(
            "This case requires additional information before a determination can be made. \
             {} required policy criteria have unknown status and need clarification.",
            required_unknown.len()
        );
    } else if !required_unmet.is_empty() {
        recommendation = RecommendedAction::Deny;
        confidence = Confidence::High;
        complexity = Complexity::High;
        primary_reasons = required_unmet
            .iter()
            .take(3)
            .map(|e| format!("Criterion not met: {} - {}", e.description, e.evidence))
            .collect();
        information_gaps = Vec::new();
        rationale = format!(
            "This request does not meet {} required policy criteria. The clinical evidence \
             documented in the request does not satisfy the coverage requirements.",
            required_unmet.len()
        );
    } else {
        recommendation = RecommendedAction::Approve;
        confidence = Confidence::High;
        complexity = Complexity::Low;
        primary_reasons = vec![
            format!("All {} required policy criteria are met", required.len()),
            "Clinical documentation supports medical necessity".to_string(),
            "Treatment aligns with current clinical guidelines".to_string(),
        ];
        information_gaps = Vec::new();
        rationale = format!(
            "Patient meets all required criteria for {}. Clinical evidence demonstrates \
             medical necessity for the requested treatment.",
            policy.drug_name
        );
    }

    Recommendation {
        recommendation,
        confidence,
        complexity,
        primary_reasons,
        information_gaps,
        clinical_rationale: rationale,
        guideline_alignment: format!(
            "Recommendation aligns with {} treatment guidelines.",
            policy.indication
        ),
        risk_considerations: Vec::new(),
        alternative_options: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PolicyId;
    use domain_policy::{Criterion, CriterionEvaluation, CriterionType};

    fn policy() -> Policy {
        Policy {
            id: PolicyId::new_v7(),
            code: "POL-ONC-001".to_string(),
            drug_name: "Keytruda (Pembrolizumab)".to_string(),
            indication: "Non-Small Cell Lung Cancer (NSCLC)".to_string(),
            description: String::new(),
            criteria: vec![Criterion {
                id: "C1".to_string(),
                description: "Stage IV disease".to_string(),
                criterion_type: CriterionType::Stage,
                required: true,
            }],
            guidelines: Vec::new(),
        }
    }

    fn evaluation(id: &str, required: bool, status: CriterionStatus) -> CriterionEvaluation {
        CriterionEvaluation {
            id: id.to_string(),
            description: format!("criterion {}", id),
            criterion_type: CriterionType::Clinical,
            required,
            status,
            evidence: "documented evidence".to_string(),
            details: String::new(),
        }
    }

    #[test]
    fn test_unknown_required_pends() {
        let evaluations = vec![
            evaluation("C1", true, CriterionStatus::Met),
            evaluation("C2", true, CriterionStatus::Unknown),
            evaluation("C3", true, CriterionStatus::Unmet),
        ];

        let rec = generate_recommendation(&policy(), &evaluations);
        assert_eq!(rec.recommendation, RecommendedAction::Pend);
        assert_eq!(rec.confidence, Confidence::Medium);
        assert_eq!(rec.complexity, Complexity::High);
        assert_eq!(rec.information_gaps, vec!["criterion C2"]);
    }

    #[test]
    fn test_unmet_required_denies() {
        let evaluations = vec![
            evaluation("C1", true, CriterionStatus::Met),
            evaluation("C2", true, CriterionStatus::Unmet),
        ];

        let rec = generate_recommendation(&policy(), &evaluations);
        assert_eq!(rec.recommendation, RecommendedAction::Deny);
        assert_eq!(rec.confidence, Confidence::High);
        assert!(rec.primary_reasons[0].starts_with("Criterion not met:"));
        assert!(rec.information_gaps.is_empty());
    }

    #[test]
    fn test_deny_reasons_capped_at_three() {
        let evaluations: Vec<_> = (1..=5)
            .map(|i| evaluation(&format!("C{}", i), true, CriterionStatus::Unmet))
            .collect();

        let rec = generate_recommendation(&policy(), &evaluations);
        assert_eq!(rec.primary_reasons.len(), 3);
    }

    #[test]
    fn test_all_required_met_approves() {
        let evaluations = vec![
            evaluation("C1", true, CriterionStatus::Met),
            evaluation("C2", false, CriterionStatus::Unmet),
        ];

        let rec = generate_recommendation(&policy(), &evaluations);
        assert_eq!(rec.recommendation, RecommendedAction::Approve);
        assert_eq!(rec.complexity, Complexity::Low);
        assert!(rec.clinical_rationale.contains("Keytruda"));
        assert!(rec.guideline_alignment.contains("NSCLC"));
    }

    #[test]
    fn test_empty_evaluation_list_approves_vacuously() {
        let rec = generate_recommendation(&policy(), &[]);
        assert_eq!(rec.recommendation, RecommendedAction::Approve);
        assert!(rec.primary_reasons[0].contains("All 0 required"));
    }
}
