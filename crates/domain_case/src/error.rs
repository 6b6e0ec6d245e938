//! Case domain errors

use thiserror::Error;

use crate::case::CaseStatus;

/// Errors raised by case lifecycle operations
#[derive(Debug, Error)]
pub enum CaseError {
    /// The requested transition is not allowed from the current status
    #[error("Invalid case transition from {from} to {to}")]
    InvalidStateTransition { from: CaseStatus, to: CaseStatus },

    /// Raw submission text was empty
    #[error("Case submission text cannot be empty")]
    EmptySubmission,

    /// A stored status string did not match any known status
    #[error("Unknown case status: {0}")]
    UnknownStatus(String),

    /// A stored decision string did not match any known decision
    #[error("Unknown final decision: {0}")]
    UnknownDecision(String),

    /// A stored audit action string did not match any known action
    #[error("Unknown audit action: {0}")]
    UnknownAction(String),
}
