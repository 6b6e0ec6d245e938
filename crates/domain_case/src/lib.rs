//! Prior Authorization Case Domain
//!
//! The `PaCase` aggregate owns a submission's lifecycle from intake through
//! automated processing to the Medical Director's final decision. Every
//! state change is guarded; skipping a stage is an error, not a silent
//! overwrite. The audit module records what happened to a case and when.

pub mod audit;
pub mod case;
pub mod error;
pub mod metrics;

pub use audit::{AuditAction, AuditEvent};
pub use case::{CaseStatus, FinalDecision, PaCase};
pub use error::CaseError;
pub use metrics::CaseMetrics;
