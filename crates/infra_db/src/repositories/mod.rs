//! Repository implementations

pub mod audit;
pub mod cases;
pub mod metrics;
pub mod policies;

pub use audit::AuditRepository;
pub use cases::{CaseRecord, CaseRepository};
pub use metrics::MetricsRepository;
pub use policies::PolicyRepository;
