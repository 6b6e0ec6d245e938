//! Pre-built Test Fixtures
//!
//! Ready-to-use clinical cases and coverage policies mirroring the seeded
//! oncology content. Fixtures are consistent and predictable: the NSCLC
//! case satisfies every Keytruda criterion and the melanoma case satisfies
//! every Opdivo criterion, so tests perturb a single field and assert on
//! the one verdict that should change.

use core_kernel::{CaseData, MarkerResult, PolicyId};
use domain_policy::{Criterion, CriterionType, Guideline, Policy};

fn criterion(id: &str, description: &str, criterion_type: CriterionType, required: bool) -> Criterion {
    Criterion {
        id: id.to_string(),
        description: description.to_string(),
        criterion_type,
        required,
    }
}

/// Stage IV NSCLC case that meets the full Keytruda criterion set:
/// high PD-L1, wild-type EGFR, ALK negative, ECOG 1, treatment-naive.
pub fn stage_iv_nsclc_case() -> CaseData {
    let mut data = CaseData::default();
    data.patient_info.name = "John Smith".to_string();
    data.patient_info.member_id = "MEM-789456123".to_string();
    data.diagnosis.primary =
        "Metastatic Non-Small Cell Lung Cancer (NSCLC) - Adenocarcinoma".to_string();
    data.diagnosis.icd10 = "C34.90".to_string();
    data.diagnosis.histology = "Adenocarcinoma".to_string();
    data.disease_stage.stage = "Stage IV (T3N2M1a)".to_string();
    data.disease_stage.tnm = "T3N2M1a".to_string();
    data.disease_stage.metastatic_sites = vec![
        "contralateral lung nodules".to_string(),
        "mediastinal lymph nodes".to_string(),
    ];
    data.biomarkers.pd_l1.status = "positive".to_string();
    data.biomarkers.pd_l1.value = "75%".to_string();
    data.biomarkers.egfr.status = "wild type".to_string();
    data.biomarkers.alk.status = "negative".to_string();
    data.performance_status.ecog = "1".to_string();
    data.performance_status.description =
        "Restricted in strenuous activity but ambulatory".to_string();
    data.prior_therapy.has_prior_systemic = false;
    data.prior_therapy.treatments = vec!["No prior systemic therapy".to_string()];
    data.prior_therapy.immunotherapy_history = "none".to_string();
    data.drug_requested.name = "Keytruda (pembrolizumab) 200mg IV every 3 weeks".to_string();
    data
}

/// Stage IV melanoma case that meets the full Opdivo criterion set:
/// BRAF status determined (wild type), ECOG 0, no brain metastases.
pub fn melanoma_case() -> CaseData {
    let mut data = CaseData::default();
    data.patient_info.name = "Angela Williams".to_string();
    data.patient_info.member_id = "MEM-654987321".to_string();
    data.diagnosis.primary = "Metastatic Melanoma".to_string();
    data.diagnosis.icd10 = "C43.9".to_string();
    data.diagnosis.histology = "Melanoma, Breslow depth 4.2mm, ulcerated".to_string();
    data.disease_stage.stage = "Stage IV (M1c)".to_string();
    data.disease_stage.tnm = "M1c".to_string();
    data.disease_stage.metastatic_sites = vec!["liver".to_string(), "lung".to_string()];
    data.biomarkers.other_markers = vec![
        MarkerResult {
            name: "BRAF V600E".to_string(),
            result: "Negative (Wild type)".to_string(),
        },
        MarkerResult {
            name: "LDH".to_string(),
            result: "285 U/L (elevated)".to_string(),
        },
    ];
    data.performance_status.ecog = "0".to_string();
    data.performance_status.description = "Fully active, no restrictions".to_string();
    data.prior_therapy.has_prior_systemic = false;
    data.prior_therapy.immunotherapy_history = "none".to_string();
    data.drug_requested.name = "Opdivo (nivolumab) 480mg IV every 4 weeks".to_string();
    data
}

/// The Keytruda NSCLC criterion set. C5 (first-line) is informational only.
pub fn keytruda_criteria() -> Vec<Criterion> {
    vec![
        criterion(
            "C1",
            "Patient has histologically or cytologically confirmed metastatic NSCLC (Stage IV)",
            CriterionType::Stage,
            true,
        ),
        criterion(
            "C2",
            "Tumor expresses PD-L1 (Tumor Proportion Score >= 50%) as determined by FDA-approved test",
            CriterionType::Biomarker,
            true,
        ),
        criterion(
            "C3",
            "No EGFR or ALK genomic tumor aberrations present",
            CriterionType::Biomarker,
            true,
        ),
        criterion("C4", "ECOG Performance Status 0-1", CriterionType::Clinical, true),
        criterion(
            "C5",
            "No prior systemic chemotherapy for metastatic NSCLC (first-line treatment)",
            CriterionType::PriorTherapy,
            false,
        ),
    ]
}

/// The Opdivo melanoma criterion set.
pub fn opdivo_criteria() -> Vec<Criterion> {
    vec![
        criterion(
            "C1",
            "Patient has histologically confirmed unresectable Stage III or metastatic Stage IV melanoma",
            CriterionType::Stage,
            true,
        ),
        criterion(
            "C2",
            "BRAF mutation status has been determined",
            CriterionType::Biomarker,
            true,
        ),
        criterion("C3", "ECOG Performance Status 0-2", CriterionType::Clinical, true),
        criterion(
            "C4",
            "No active brain metastases (treated and stable brain metastases allowed)",
            CriterionType::Clinical,
            true,
        ),
    ]
}

/// Full Keytruda coverage policy document.
pub fn keytruda_policy() -> Policy {
    Policy {
        id: PolicyId::new_v7(),
        code: "POL-ONC-001".to_string(),
        drug_name: "Keytruda (Pembrolizumab)".to_string(),
        indication: "Non-Small Cell Lung Cancer (NSCLC)".to_string(),
        description: "Coverage policy for Keytruda (pembrolizumab) for the treatment of \
                      metastatic non-small cell lung cancer with high PD-L1 expression."
            .to_string(),
        criteria: keytruda_criteria(),
        guidelines: vec![Guideline {
            source: "NCCN Guidelines".to_string(),
            text: "Pembrolizumab is recommended as first-line therapy for patients with \
                   metastatic NSCLC with PD-L1 expression >= 50% and no EGFR/ALK aberrations."
                .to_string(),
        }],
    }
}

/// Full Opdivo coverage policy document.
pub fn opdivo_policy() -> Policy {
    Policy {
        id: PolicyId::new_v7(),
        code: "POL-ONC-002".to_string(),
        drug_name: "Opdivo (Nivolumab)".to_string(),
        indication: "Advanced Melanoma".to_string(),
        description: "Coverage policy for Opdivo (nivolumab) for the treatment of \
                      unresectable or metastatic melanoma."
            .to_string(),
        criteria: opdivo_criteria(),
        guidelines: vec![Guideline {
            source: "NCCN Guidelines".to_string(),
            text: "Nivolumab is recommended as first-line therapy for unresectable or \
                   metastatic melanoma regardless of BRAF status."
                .to_string(),
        }],
    }
}

const SAMPLE_REQUEST: &str = r#"PRIOR AUTHORIZATION REQUEST

Patient: John Smith (DOB: 03/15/1958)
Member ID: MEM-789456123
Date of Request: 11/28/2024
Requesting Provider: Dr. Sarah Chen, MD - Valley Oncology Associates
NPI: 1234567890

MEDICATION REQUESTED: Keytruda (pembrolizumab) 200mg IV every 3 weeks

CLINICAL INFORMATION:

Diagnosis: Metastatic Non-Small Cell Lung Cancer (NSCLC) - Adenocarcinoma
ICD-10: C34.90, C78.00

Disease Stage: Stage IV (T3N2M1a) - diagnosed October 2024
Metastatic sites: Contralateral lung nodules, mediastinal lymph nodes

Histology: Adenocarcinoma confirmed by CT-guided biopsy (10/15/2024)

BIOMARKER TESTING (Foundation Medicine CDx - 10/22/2024):
- PD-L1 TPS: 75% (Positive, High Expression)
- EGFR: Wild type (No mutations detected)
- ALK: Negative (No rearrangement)
- ROS1: Negative
- BRAF: Wild type

PERFORMANCE STATUS: ECOG 1 - Restricted in strenuous activity but ambulatory

PRIOR TREATMENTS:
- No prior systemic therapy for lung cancer
- No prior immunotherapy or checkpoint inhibitors

COMORBIDITIES:
- Hypertension (controlled on lisinopril)
- No autoimmune conditions

RATIONALE FOR KEYTRUDA:
Patient meets criteria for first-line pembrolizumab monotherapy per NCCN Guidelines based on
high PD-L1 expression, absence of targetable driver mutations, and good performance status.

REQUESTING: Approval for Keytruda 200mg IV Q3W x 24 months or until progression
"#;

/// A raw PA request that the demo extractor parses into a case meeting
/// every Keytruda criterion. Tests perturb specific lines (e.g. the PD-L1
/// or EGFR result) to drive the other determination paths.
pub fn sample_request_text() -> &'static str {
    SAMPLE_REQUEST
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_policy::{evaluate_criteria, CriterionStatus};

    #[test]
    fn test_nsclc_fixture_meets_all_keytruda_criteria() {
        let evaluations = evaluate_criteria(&stage_iv_nsclc_case(), &keytruda_criteria());
        assert!(evaluations
            .iter()
            .all(|e| e.status == CriterionStatus::Met));
    }

    #[test]
    fn test_melanoma_fixture_meets_all_opdivo_criteria() {
        let evaluations = evaluate_criteria(&melanoma_case(), &opdivo_criteria());
        assert!(evaluations
            .iter()
            .all(|e| e.status == CriterionStatus::Met));
    }

    #[test]
    fn test_sample_request_carries_the_perturbation_anchors() {
        let text = sample_request_text();
        assert!(text.contains("PD-L1 TPS: 75%"));
        assert!(text.contains("EGFR: Wild type"));
    }
}
