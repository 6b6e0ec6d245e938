//! Case audit trail

use chrono::{DateTime, Utc};
use core_kernel::{AuditEventId, CaseId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Actions recorded against a case, in pipeline stage order plus the
/// terminal decision action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    ProcessingStarted,
    CaseExtracted,
    ExtractionError,
    CriteriaEvaluated,
    RecommendationGenerated,
    LettersDrafted,
    ProcessingCompleted,
    DecisionFinalized,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuditAction::ProcessingStarted => "processing_started",
            AuditAction::CaseExtracted => "case_extracted",
            AuditAction::ExtractionError => "extraction_error",
            AuditAction::CriteriaEvaluated => "criteria_evaluated",
            AuditAction::RecommendationGenerated => "recommendation_generated",
            AuditAction::LettersDrafted => "letters_drafted",
            AuditAction::ProcessingCompleted => "processing_completed",
            AuditAction::DecisionFinalized => "decision_finalized",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for AuditAction {
    type Err = crate::error::CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing_started" => Ok(AuditAction::ProcessingStarted),
            "case_extracted" => Ok(AuditAction::CaseExtracted),
            "extraction_error" => Ok(AuditAction::ExtractionError),
            "criteria_evaluated" => Ok(AuditAction::CriteriaEvaluated),
            "recommendation_generated" => Ok(AuditAction::RecommendationGenerated),
            "letters_drafted" => Ok(AuditAction::LettersDrafted),
            "processing_completed" => Ok(AuditAction::ProcessingCompleted),
            "decision_finalized" => Ok(AuditAction::DecisionFinalized),
            other => Err(crate::error::CaseError::UnknownAction(other.to_string())),
        }
    }
}

/// One entry in a case's audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: AuditEventId,
    pub case_id: CaseId,
    pub action: AuditAction,
    /// Free-text detail, e.g. "5 criteria evaluated, 1 unknown"
    pub details: String,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(case_id: CaseId, action: AuditAction, details: impl Into<String>) -> Self {
        Self {
            id: AuditEventId::new_v7(),
            case_id,
            action,
            details: details.into(),
            occurred_at: Utc::now(),
        }
    }
}
