//! The PA case aggregate and its status lifecycle

use chrono::{DateTime, Datelike, Utc};
use core_kernel::{CaseData, CaseId, PolicyId};
use domain_policy::{Complexity, CriterionEvaluation};
use domain_review::{Recommendation, ReviewOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CaseError;

/// Lifecycle status of a PA case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Submitted, awaiting automated processing
    Pending,
    /// Pipeline outputs attached, awaiting the Medical Director
    Processed,
    /// Final determination recorded
    Decided,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Pending => write!(f, "pending"),
            CaseStatus::Processed => write!(f, "processed"),
            CaseStatus::Decided => write!(f, "decided"),
        }
    }
}

impl CaseStatus {
    /// Whether a transition to `next` is allowed from this status.
    /// The lifecycle is strictly forward: pending, processed, decided.
    pub fn can_transition_to(&self, next: CaseStatus) -> bool {
        use CaseStatus::*;
        matches!((self, next), (Pending, Processed) | (Processed, Decided))
    }
}

impl std::str::FromStr for CaseStatus {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CaseStatus::Pending),
            "processed" => Ok(CaseStatus::Processed),
            "decided" => Ok(CaseStatus::Decided),
            other => Err(CaseError::UnknownStatus(other.to_string())),
        }
    }
}

/// The Medical Director's final determination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalDecision {
    Approve,
    Deny,
    Pend,
}

impl fmt::Display for FinalDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalDecision::Approve => write!(f, "approve"),
            FinalDecision::Deny => write!(f, "deny"),
            FinalDecision::Pend => write!(f, "pend"),
        }
    }
}

impl std::str::FromStr for FinalDecision {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(FinalDecision::Approve),
            "deny" => Ok(FinalDecision::Deny),
            "pend" => Ok(FinalDecision::Pend),
            other => Err(CaseError::UnknownDecision(other.to_string())),
        }
    }
}

/// A prior authorization case
///
/// Carries the raw submission, the policy it was submitted against, and,
/// once processed, the full set of pipeline outputs the reviewer sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaCase {
    pub id: CaseId,
    /// Human-readable case number
    pub case_number: String,
    pub title: String,
    /// Raw submission text as received
    pub raw_text: String,
    pub policy_id: PolicyId,
    pub status: CaseStatus,
    pub extracted_data: Option<CaseData>,
    pub criteria_evaluation: Vec<CriterionEvaluation>,
    pub recommendation: Option<Recommendation>,
    pub provider_letter: Option<String>,
    pub member_letter: Option<String>,
    pub complexity: Option<Complexity>,
    pub final_decision: Option<FinalDecision>,
    pub decision_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub decided_at: Option<DateTime<Utc>>,
    /// Minutes from intake to final decision
    pub turnaround_minutes: Option<i64>,
}

impl PaCase {
    /// Creates a new pending case from a raw submission.
    pub fn new(
        title: String,
        raw_text: String,
        policy_id: PolicyId,
    ) -> Result<Self, CaseError> {
        if raw_text.trim().is_empty() {
            return Err(CaseError::EmptySubmission);
        }

        let id = CaseId::new_v7();
        Ok(Self {
            id,
            case_number: generate_case_number(&id),
            title,
            raw_text,
            policy_id,
            status: CaseStatus::Pending,
            extracted_data: None,
            criteria_evaluation: Vec::new(),
            recommendation: None,
            provider_letter: None,
            member_letter: None,
            complexity: None,
            final_decision: None,
            decision_notes: None,
            created_at: Utc::now(),
            processed_at: None,
            decided_at: None,
            turnaround_minutes: None,
        })
    }

    fn transition_to(&mut self, next: CaseStatus) -> Result<(), CaseError> {
        if !self.status.can_transition_to(next) {
            return Err(CaseError::InvalidStateTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Attaches pipeline outputs and moves the case to `Processed`.
    pub fn record_processing(&mut self, outcome: ReviewOutcome) -> Result<(), CaseError> {
        self.transition_to(CaseStatus::Processed)?;

        self.extracted_data = Some(outcome.extracted_data);
        self.criteria_evaluation = outcome.evaluations;
        self.complexity = Some(outcome.complexity);
        self.recommendation = Some(outcome.recommendation);
        self.provider_letter = Some(outcome.letters.provider_letter);
        self.member_letter = Some(outcome.letters.member_letter);
        self.processed_at = Some(Utc::now());

        tracing::info!(
            case_number = %self.case_number,
            complexity = %outcome.complexity,
            "case processed"
        );
        Ok(())
    }

    /// Records the final determination and computes turnaround from intake.
    pub fn record_decision(
        &mut self,
        decision: FinalDecision,
        notes: Option<String>,
    ) -> Result<(), CaseError> {
        self.transition_to(CaseStatus::Decided)?;

        let decided_at = Utc::now();
        self.final_decision = Some(decision);
        self.decision_notes = notes;
        self.decided_at = Some(decided_at);
        self.turnaround_minutes = Some((decided_at - self.created_at).num_minutes());

        tracing::info!(
            case_number = %self.case_number,
            decision = %decision,
            "decision recorded"
        );
        Ok(())
    }
}

/// Builds the human-readable case number from the case id. The suffix is
/// the tail of the uuid, so cases created in the same instant still get
/// distinct numbers (the column carries a UNIQUE constraint).
fn generate_case_number(id: &CaseId) -> String {
    let hex = id.as_uuid().simple().to_string();
    format!(
        "PA-{}-{}",
        Utc::now().year(),
        hex[24..].to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_policy::{triage_summary, Complexity};
    use domain_review::{Confidence, LetterSet, RecommendedAction, ReviewOutcome};

    fn test_case() -> PaCase {
        PaCase::new(
            "Keytruda - Stage IV NSCLC".to_string(),
            "PRIOR AUTHORIZATION REQUEST ...".to_string(),
            PolicyId::new_v7(),
        )
        .unwrap()
    }

    fn test_outcome() -> ReviewOutcome {
        let recommendation = Recommendation {
            recommendation: RecommendedAction::Approve,
            confidence: Confidence::High,
            complexity: Complexity::Low,
            primary_reasons: vec!["All required criteria met".to_string()],
            information_gaps: Vec::new(),
            clinical_rationale: String::new(),
            guideline_alignment: String::new(),
            risk_considerations: Vec::new(),
            alternative_options: Vec::new(),
        };
        ReviewOutcome {
            extracted_data: CaseData::default(),
            evaluations: Vec::new(),
            complexity: Complexity::Low,
            summary: triage_summary(&[]),
            recommendation,
            letters: LetterSet {
                provider_letter: "Dear Provider".to_string(),
                member_letter: "Dear Member".to_string(),
            },
        }
    }

    #[test]
    fn test_new_case_is_pending() {
        let case = test_case();
        assert_eq!(case.status, CaseStatus::Pending);
        assert!(case.case_number.starts_with("PA-"));
        assert!(case.extracted_data.is_none());
    }

    #[test]
    fn test_case_numbers_are_distinct_for_rapid_intake() {
        let numbers: std::collections::HashSet<String> = (0..64)
            .map(|i| {
                PaCase::new(
                    format!("case {}", i),
                    "PRIOR AUTHORIZATION REQUEST ...".to_string(),
                    PolicyId::new_v7(),
                )
                .unwrap()
                .case_number
            })
            .collect();
        assert_eq!(numbers.len(), 64);
    }

    #[test]
    fn test_empty_submission_rejected() {
        let result = PaCase::new("t".to_string(), "   ".to_string(), PolicyId::new_v7());
        assert!(matches!(result, Err(CaseError::EmptySubmission)));
    }

    #[test]
    fn test_processing_attaches_outputs() {
        let mut case = test_case();
        case.record_processing(test_outcome()).unwrap();

        assert_eq!(case.status, CaseStatus::Processed);
        assert!(case.extracted_data.is_some());
        assert_eq!(case.complexity, Some(Complexity::Low));
        assert!(case.provider_letter.is_some());
        assert!(case.processed_at.is_some());
    }

    #[test]
    fn test_decision_requires_processed_status() {
        let mut case = test_case();
        let result = case.record_decision(FinalDecision::Approve, None);
        assert!(matches!(
            result,
            Err(CaseError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn test_decision_computes_turnaround() {
        let mut case = test_case();
        case.record_processing(test_outcome()).unwrap();
        case.record_decision(FinalDecision::Approve, Some("Agree".to_string()))
            .unwrap();

        assert_eq!(case.status, CaseStatus::Decided);
        assert_eq!(case.final_decision, Some(FinalDecision::Approve));
        assert!(case.turnaround_minutes.is_some());
        assert!(case.turnaround_minutes.unwrap() >= 0);
    }

    #[test]
    fn test_cannot_process_twice() {
        let mut case = test_case();
        case.record_processing(test_outcome()).unwrap();
        let result = case.record_processing(test_outcome());
        assert!(matches!(
            result,
            Err(CaseError::InvalidStateTransition { .. })
        ));
    }
}
