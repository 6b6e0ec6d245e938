//! Criterion definitions and per-criterion evaluation records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a policy criterion; selects the evaluator function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionType {
    Stage,
    Biomarker,
    PriorTherapy,
    Clinical,
}

/// Verdict for a single criterion.
///
/// `Unknown` is the pre-dispatch default: categories or keyword branches
/// that do not recognize a criterion leave the verdict untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionStatus {
    Met,
    Unmet,
    #[default]
    Unknown,
}

impl fmt::Display for CriterionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionStatus::Met => write!(f, "met"),
            CriterionStatus::Unmet => write!(f, "unmet"),
            CriterionStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// One testable rule within a coverage policy.
///
/// The `description` text is the de facto rule specification: the evaluator
/// matches keyword phrases in it to decide which sub-rule applies, so new
/// criteria can be added to a policy without code changes as long as their
/// wording matches an existing phrase pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Short identifier, unique within a policy (e.g. "C1")
    pub id: String,
    /// Natural-language rule statement
    pub description: String,
    /// Category selecting the evaluator function
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
    /// Whether an unmet/unknown verdict on this criterion drives complexity
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

/// Evaluation record for a single criterion.
///
/// Mirrors its source criterion's `id`, `description`, `criterion_type`,
/// and `required` exactly; the evaluation list always has the same length
/// and order as the input criterion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionEvaluation {
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
    pub required: bool,
    /// The verdict; `unknown` until a recognized branch decides otherwise
    pub status: CriterionStatus,
    /// Human-readable justification; empty when no applicable rule matched
    #[serde(default)]
    pub evidence: String,
    /// Optional supplementary detail (e.g. metastatic site list)
    #[serde(default)]
    pub details: String,
}

impl CriterionEvaluation {
    /// Creates the pre-dispatch record for a criterion: verdict `unknown`,
    /// no evidence, no details.
    pub fn pending(criterion: &Criterion) -> Self {
        Self {
            id: criterion.id.clone(),
            description: criterion.description.clone(),
            criterion_type: criterion.criterion_type,
            required: criterion.required,
            status: CriterionStatus::Unknown,
            evidence: String::new(),
            details: String::new(),
        }
    }
}
