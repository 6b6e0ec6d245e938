//! Test Utilities Crate
//!
//! Shared test infrastructure for the PA co-pilot test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built clinical cases, policies, and a sample request
//! - `builders`: Builder patterns for case data and evaluation records
//! - `database`: In-memory SQLite helpers for repository and API tests
//! - `assertions`: Custom assertion helpers for evaluation results
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod database;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
