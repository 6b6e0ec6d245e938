//! Structured clinical case data
//!
//! This is the contract between the extraction collaborator (regex demo
//! extractor or external language model) and the policy evaluation engine.
//! Every field is optional in the wire sense: extraction may produce empty
//! strings, empty lists, or omit whole sections. Deserialization therefore
//! defaults every field, and consumers must treat absence as "not documented"
//! rather than as an error.

use serde::{Deserialize, Serialize};

/// Complete structured view of a prior authorization submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseData {
    pub patient_info: PatientInfo,
    pub diagnosis: Diagnosis,
    pub disease_stage: DiseaseStage,
    pub biomarkers: Biomarkers,
    pub labs: LabPanel,
    pub performance_status: PerformanceStatus,
    pub prior_therapy: PriorTherapy,
    pub comorbidities: Vec<String>,
    pub requesting_provider: Provider,
    pub drug_requested: DrugRequest,
}

/// Patient identification as written on the submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInfo {
    pub name: String,
    pub dob: String,
    pub member_id: String,
}

/// Primary diagnosis details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    pub primary: String,
    pub icd10: String,
    pub histology: String,
}

/// Disease staging as documented, e.g. "Stage IV" plus TNM notation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseStage {
    pub stage: String,
    pub tnm: String,
    pub metastatic_sites: Vec<String>,
}

/// Biomarker panel. The named markers carry a small controlled status
/// vocabulary (positive / negative / pending / not tested / wild type /
/// mutated); anything else is open-ended and lands in `other_markers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Biomarkers {
    pub pd_l1: BiomarkerResult,
    pub egfr: BiomarkerResult,
    pub alk: BiomarkerResult,
    pub other_markers: Vec<MarkerResult>,
}

/// Result of a single named biomarker test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomarkerResult {
    pub status: String,
    pub value: String,
    pub mutation: String,
    pub test_date: String,
}

/// Free-form named marker result, e.g. {"BRAF", "V600E mutation"}.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerResult {
    pub name: String,
    pub result: String,
}

/// Relevant laboratory values, kept as documented text with units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabPanel {
    pub wbc: String,
    pub hemoglobin: String,
    pub platelets: String,
    pub creatinine: String,
    pub alt: String,
    pub ast: String,
    pub other: Vec<String>,
}

/// ECOG performance status. The score stays textual; the evaluator parses
/// it and degrades to an unknown verdict when it is not a clean integer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceStatus {
    pub ecog: String,
    pub description: String,
}

/// Prior systemic therapy history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorTherapy {
    pub has_prior_systemic: bool,
    pub treatments: Vec<String>,
    pub immunotherapy_history: String,
}

/// Requesting provider details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub name: String,
    pub npi: String,
    pub facility: String,
}

/// The medication being requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrugRequest {
    pub name: String,
    pub dose: String,
    pub duration: String,
}
