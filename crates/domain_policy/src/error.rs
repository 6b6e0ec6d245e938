//! Policy domain errors
//!
//! The evaluation engine itself is total and never fails; errors here cover
//! the policy document boundary (loading and decoding stored policies).

use thiserror::Error;

/// Errors raised when handling policy documents
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Failed to decode a stored policy document
    #[error("Failed to parse policy document: {0}")]
    ParseError(String),

    /// A required policy field was missing or empty
    #[error("Missing required field: {0}")]
    MissingField(String),
}
