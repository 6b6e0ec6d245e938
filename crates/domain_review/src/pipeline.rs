//! The case processing pipeline
//!
//! extract -> evaluate -> classify -> recommend -> draft letters.
//! Only extraction can fail; everything downstream is pure and total.

use std::sync::Arc;

use core_kernel::CaseData;
use domain_policy::{
    calculate_complexity, evaluate_criteria, triage_summary, Complexity, CriterionEvaluation,
    Policy, TriageSummary,
};

use crate::error::ReviewError;
use crate::letters::{draft_letters, LetterSet};
use crate::ports::CaseExtractor;
use crate::recommendation::{generate_recommendation, Recommendation};

/// Everything processing produces for a case, in one bundle.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub extracted_data: CaseData,
    pub evaluations: Vec<CriterionEvaluation>,
    pub complexity: Complexity,
    pub summary: TriageSummary,
    pub recommendation: Recommendation,
    pub letters: LetterSet,
}

/// Orchestrates the processing stages for one submission.
pub struct ReviewPipeline {
    extractor: Arc<dyn CaseExtractor>,
}

impl ReviewPipeline {
    pub fn new(extractor: Arc<dyn CaseExtractor>) -> Self {
        Self { extractor }
    }

    pub async fn run(&self, raw_text: &str, policy: &Policy) -> Result<ReviewOutcome, ReviewError> {
        let extracted_data = self.extractor.extract(raw_text).await?;
        tracing::info!(policy = %policy.code, "case data extracted");

        let evaluations = evaluate_criteria(&extracted_data, &policy.criteria);
        let complexity = calculate_complexity(&evaluations);
        let summary = triage_summary(&evaluations);
        tracing::info!(
            met = summary.met,
            unmet = summary.unmet,
            unknown = summary.unknown,
            complexity = %complexity,
            "criteria evaluated"
        );

        let recommendation = generate_recommendation(policy, &evaluations);
        tracing::info!(recommendation = %recommendation.recommendation, "recommendation generated");

        let letters = draft_letters(policy, &recommendation);

        Ok(ReviewOutcome {
            extracted_data,
            evaluations,
            complexity,
            summary,
            recommendation,
            letters,
        })
    }
}
