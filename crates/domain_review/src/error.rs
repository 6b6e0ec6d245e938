//! Review domain errors

use thiserror::Error;

/// Errors raised by extraction and the review pipeline
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Extraction could not produce structured data from the submission
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// The upstream language model call failed
    #[error("Upstream model error: {0}")]
    Upstream(String),

    /// The upstream model returned something that is not the expected JSON
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}
