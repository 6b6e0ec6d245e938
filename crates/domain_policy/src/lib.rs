//! Coverage Policy Domain
//!
//! This crate implements the decision core of the PA co-pilot: given the
//! structured clinical data extracted from a submission and the criterion
//! list of a coverage policy, it produces a per-criterion verdict, a
//! complexity classification, and a triage summary.
//!
//! # Architecture
//!
//! Policies are data, not code. Each criterion carries a category
//! (`stage`, `biomarker`, `prior_therapy`, `clinical`) that selects an
//! evaluator function, and the evaluator then matches keyword phrases in the
//! criterion's free-text description to pick the applicable sub-rule. A
//! description that matches no known phrase evaluates to `unknown` with no
//! evidence - uncertainty, never silent approval.
//!
//! The whole core is pure: no I/O, no shared state, deterministic for
//! identical inputs, and total over well-formed-but-incomplete case data.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{evaluate_criteria, calculate_complexity, triage_summary};
//!
//! let evaluations = evaluate_criteria(&case_data, &policy.criteria);
//! let complexity = calculate_complexity(&evaluations);
//! let summary = triage_summary(&evaluations);
//! ```

pub mod criteria;
pub mod engine;
pub mod error;
pub mod policy;
pub mod triage;

pub use criteria::{Criterion, CriterionEvaluation, CriterionStatus, CriterionType};
pub use engine::evaluate_criteria;
pub use error::PolicyError;
pub use policy::{Guideline, Policy};
pub use triage::{calculate_complexity, triage_summary, Complexity, TriageSummary};
