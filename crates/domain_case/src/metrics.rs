//! Review throughput metrics
//!
//! Aggregates are computed by persistence queries; this module only owns
//! the typed shape handed to the API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caseload and decision metrics for the review dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseMetrics {
    pub total: i64,
    pub pending: i64,
    pub processed: i64,
    pub decided: i64,
    /// Average intake-to-decision time over decided cases, if any
    pub avg_turnaround_minutes: Option<f64>,
    /// Final decision counts keyed by decision name
    pub decisions: BTreeMap<String, i64>,
    /// Processed case counts keyed by complexity
    pub complexity_distribution: BTreeMap<String, i64>,
}
