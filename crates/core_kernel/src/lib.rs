//! Core Kernel - Foundational types for the PA co-pilot
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for cases, policies, and audit events
//! - The structured clinical case-data contract shared between the extraction
//!   collaborator and the policy evaluation engine

pub mod clinical;
pub mod identifiers;

pub use clinical::{
    BiomarkerResult, Biomarkers, CaseData, Diagnosis, DiseaseStage, DrugRequest, LabPanel,
    MarkerResult, PatientInfo, PerformanceStatus, PriorTherapy, Provider,
};
pub use identifiers::{AuditEventId, CaseId, PolicyId};
