//! Extraction port

use async_trait::async_trait;
use core_kernel::CaseData;

use crate::error::ReviewError;

/// Turns raw submission text into the structured clinical contract.
///
/// Implementations must be total over arbitrary text: anything they cannot
/// find stays at its default value rather than failing the whole case.
#[async_trait]
pub trait CaseExtractor: Send + Sync {
    async fn extract(&self, raw_text: &str) -> Result<CaseData, ReviewError>;
}

/// How extraction runs, derived from configuration at the edge.
/// The evaluation core never sees this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewMode {
    /// Deterministic regex extraction, no external calls
    Demo,
    /// OpenAI-compatible model extraction
    Live,
}

impl ReviewMode {
    /// Live when a non-empty API key is configured, demo otherwise.
    pub fn from_api_key(api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) if !key.trim().is_empty() => ReviewMode::Live,
            _ => ReviewMode::Demo,
        }
    }
}
