//! Case Review Domain
//!
//! Everything between a raw submission and a reviewable case: structured
//! data extraction (a deterministic regex extractor for demo mode, an
//! OpenAI-compatible adapter for live mode), the recommendation generator,
//! draft determination letters, and the pipeline that strings the stages
//! together.
//!
//! The recommendation never decides anything by itself. It is an input to
//! the Medical Director's review, derived mechanically from the policy
//! evaluation verdicts.

pub mod error;
pub mod extraction;
pub mod letters;
pub mod llm;
pub mod pipeline;
pub mod ports;
pub mod recommendation;

pub use error::ReviewError;
pub use extraction::DemoExtractor;
pub use letters::{draft_letters, LetterSet};
pub use llm::OpenAiExtractor;
pub use pipeline::{ReviewOutcome, ReviewPipeline};
pub use ports::{CaseExtractor, ReviewMode};
pub use recommendation::{
    generate_recommendation, Confidence, Recommendation, RecommendedAction,
};
