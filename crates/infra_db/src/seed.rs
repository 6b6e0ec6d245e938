//! Seed data: two oncology coverage policies and a set of sample PA
//! requests that exercise each determination path. Seeding is idempotent;
//! an already-populated database is left alone.

use core_kernel::PolicyId;
use domain_case::PaCase;
use domain_policy::{Criterion, CriterionType, Guideline, Policy};
use sqlx::SqlitePool;

use crate::error::DatabaseError;
use crate::repositories::{CaseRepository, PolicyRepository};

fn criterion(id: &str, description: &str, criterion_type: CriterionType, required: bool) -> Criterion {
    Criterion {
        id: id.to_string(),
        description: description.to_string(),
        criterion_type,
        required,
    }
}

fn guideline(source: &str, text: &str) -> Guideline {
    Guideline {
        source: source.to_string(),
        text: text.to_string(),
    }
}

fn keytruda_policy() -> Policy {
    Policy {
        id: PolicyId::new_v7(),
        code: "POL-ONC-001".to_string(),
        drug_name: "Keytruda (Pembrolizumab)".to_string(),
        indication: "Non-Small Cell Lung Cancer (NSCLC)".to_string(),
        description: "Coverage policy for Keytruda (pembrolizumab) for the treatment of \
                      metastatic non-small cell lung cancer with high PD-L1 expression."
            .to_string(),
        criteria: vec![
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
        ],
        guidelines: vec![
            guideline(
                "NCCN Guidelines",
                "Pembrolizumab is recommended as first-line therapy for patients with metastatic \
                 NSCLC with PD-L1 expression >= 50% and no EGFR/ALK aberrations. The \
                 recommendation is Category 1, based on high-level evidence from KEYNOTE-024 and \
                 KEYNOTE-042 trials showing significant improvement in overall survival compared \
                 to platinum-based chemotherapy.",
            ),
            guideline(
                "ICER Report",
                "ICER's 2020 assessment found pembrolizumab monotherapy for first-line NSCLC with \
                 high PD-L1 expression to be cost-effective at a threshold of $150,000 per QALY. \
                 The incremental cost-effectiveness ratio was estimated at $122,000/QALY compared \
                 to chemotherapy alone.",
            ),
            guideline(
                "Internal Clinical Policy",
                "Keytruda is approved for first-line treatment of metastatic NSCLC when: (1) \
                 PD-L1 TPS >= 50%, (2) No targetable mutations (EGFR, ALK, ROS1, BRAF, NTRK, MET, \
                 RET), (3) Adequate organ function, (4) No active autoimmune disease requiring \
                 systemic treatment. Treatment should be administered at 200mg Q3W or 400mg Q6W \
                 until disease progression or unacceptable toxicity, up to 24 months.",
            ),
        ],
    }
}

fn opdivo_policy() -> Policy {
    Policy {
        id: PolicyId::new_v7(),
        code: "POL-ONC-002".to_string(),
        drug_name: "Opdivo (Nivolumab)".to_string(),
        indication: "Advanced Melanoma".to_string(),
        description: "Coverage policy for Opdivo (nivolumab) for the treatment of unresectable \
                      or metastatic melanoma."
            .to_string(),
        criteria: vec![
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
        ],
        guidelines: vec![
            guideline(
                "NCCN Guidelines",
                "Nivolumab is recommended as first-line therapy for unresectable or metastatic \
                 melanoma regardless of BRAF status. For BRAF-mutant melanoma, both immunotherapy \
                 and targeted therapy are options; immunotherapy preferred for patients with low \
                 tumor burden and good performance status.",
            ),
            guideline(
                "Internal Clinical Policy",
                "Opdivo is approved for first-line or subsequent treatment of unresectable or \
                 metastatic melanoma. Dosing: 480mg IV every 4 weeks or 240mg IV every 2 weeks. \
                 Treatment continues until disease progression, unacceptable toxicity, or \
                 completion of 2 years of therapy.",
            ),
        ],
    }
}

const CASE_HIGH_PDL1: &str = r#"PRIOR AUTHORIZATION REQUEST

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
- KRAS: G12C mutation detected

LABORATORY VALUES (11/20/2024):
- WBC: 7.2 x10^9/L (Normal)
- Hemoglobin: 12.1 g/dL (Slightly low)
- Platelets: 245 x10^9/L (Normal)
- Creatinine: 0.9 mg/dL (Normal)
- ALT: 28 U/L (Normal)
- AST: 32 U/L (Normal)

PERFORMANCE STATUS: ECOG 1 - Restricted in strenuous activity but ambulatory

PRIOR TREATMENTS:
- No prior systemic therapy for lung cancer
- Former smoker (quit 2019, 30 pack-year history)
- No prior immunotherapy or checkpoint inhibitors

COMORBIDITIES:
- Hypertension (controlled on lisinopril)
- Type 2 Diabetes (controlled, A1C 6.8%)
- No autoimmune conditions

RATIONALE FOR KEYTRUDA:
Patient meets criteria for first-line pembrolizumab monotherapy per NCCN Guidelines based on
high PD-L1 expression (TPS 75%), absence of targetable driver mutations (EGFR, ALK negative),
and good performance status.

REQUESTING: Approval for Keytruda 200mg IV Q3W x 24 months or until progression
"#;

const CASE_LOW_PDL1: &str = r#"PRIOR AUTHORIZATION REQUEST

Patient: Maria Garcia (DOB: 07/22/1965)
Member ID: MEM-456789012
Date of Request: 11/29/2024
Requesting Provider: Dr. Michael Brown, MD - City Cancer Center
NPI: 9876543210

MEDICATION REQUESTED: Keytruda (pembrolizumab) 200mg IV every 3 weeks

CLINICAL INFORMATION:

Diagnosis: Metastatic Non-Small Cell Lung Cancer (NSCLC) - Squamous Cell Carcinoma
ICD-10: C34.11, C78.01

Disease Stage: Stage IV (T4N3M1b) - diagnosed September 2024
Metastatic sites: Liver, bone (L3 vertebra)

Histology: Squamous cell carcinoma confirmed by bronchoscopic biopsy (09/10/2024)

BIOMARKER TESTING (PD-L1 IHC 22C3 - 09/18/2024):
- PD-L1 TPS: 15% (Low Expression)
- EGFR: Not tested (squamous histology)
- ALK: Not tested (squamous histology)

PERFORMANCE STATUS: ECOG 2 - Capable of self-care but unable to work

PRIOR TREATMENTS:
- No prior systemic therapy for lung cancer

COMORBIDITIES:
- COPD (on home oxygen 2L)
- Coronary artery disease (stent placed 2020)
- Chronic kidney disease Stage 3

RATIONALE FOR KEYTRUDA:
Patient has metastatic squamous NSCLC. Requesting pembrolizumab monotherapy.

REQUESTING: Approval for Keytruda 200mg IV Q3W
"#;

const CASE_PENDING_BIOMARKERS: &str = r#"PRIOR AUTHORIZATION REQUEST

Patient: Robert Johnson (DOB: 11/08/1952)
Member ID: MEM-321654987
Date of Request: 11/30/2024
Requesting Provider: Dr. Emily White, MD - Regional Medical Oncology
NPI: 5678901234

MEDICATION REQUESTED: Keytruda (pembrolizumab) 200mg IV every 3 weeks

CLINICAL INFORMATION:

Diagnosis: Non-Small Cell Lung Cancer (NSCLC) - Adenocarcinoma
ICD-10: C34.31

Disease Stage: Stage IV (metastatic to brain) - diagnosed November 2024
Metastatic sites: Multiple brain lesions (treated with SRS 11/15/2024)

Histology: Adenocarcinoma confirmed by CT-guided biopsy (11/05/2024)

BIOMARKER TESTING:
- PD-L1: PENDING - specimen sent to reference lab, results expected in 5-7 days
- EGFR/ALK: Testing ordered but results not yet available

PERFORMANCE STATUS: ECOG 1

PRIOR TREATMENTS:
- Stereotactic radiosurgery to brain metastases (11/15/2024)
- No prior systemic therapy

COMORBIDITIES:
- Well-controlled hypertension
- No autoimmune conditions

RATIONALE FOR KEYTRUDA:
Patient has newly diagnosed metastatic NSCLC with brain metastases now treated with SRS.
Biomarker testing is in progress. Requesting expedited review and conditional approval
pending biomarker results to avoid treatment delays.

REQUESTING: Expedited approval for Keytruda pending biomarker confirmation
"#;

const CASE_MELANOMA: &str = r#"PRIOR AUTHORIZATION REQUEST

Patient: Angela Williams (DOB: 05/30/1970)
Member ID: MEM-654987321
Date of Request: 12/01/2024
Requesting Provider: Dr. James Lee, MD - Dermatology & Oncology Specialists
NPI: 3456789012

MEDICATION REQUESTED: Opdivo (nivolumab) 480mg IV every 4 weeks

CLINICAL INFORMATION:

Diagnosis: Metastatic Melanoma
ICD-10: C43.9, C78.7

Disease Stage: Stage IV (M1c) - initially diagnosed Stage IIIB in 2023, progressed October 2024
Metastatic sites: Liver (3 lesions), lung nodules

Primary Site: Left upper back, surgically excised in 2023
Histology: Melanoma confirmed by biopsy, Breslow depth 4.2mm, ulcerated

BIOMARKER TESTING (11/15/2024):
- BRAF V600E: Negative (Wild type)
- NRAS: Wild type
- LDH: 285 U/L (Elevated, 1.3x ULN)

IMAGING:
- PET-CT (11/10/2024): Multiple hepatic metastases, bilateral pulmonary nodules
- Brain MRI (11/12/2024): No evidence of brain metastases

PERFORMANCE STATUS: ECOG 0 - Fully active, no restrictions

PRIOR TREATMENTS:
- Wide local excision with sentinel lymph node biopsy (2023)
- Adjuvant radiation to primary site (2023)
- No prior systemic therapy for melanoma

COMORBIDITIES:
- Hypothyroidism (on levothyroxine)
- No autoimmune conditions

RATIONALE FOR OPDIVO:
Patient has BRAF wild-type metastatic melanoma with visceral disease. Immunotherapy with
nivolumab is first-line treatment per NCCN Guidelines.

REQUESTING: Approval for Opdivo 480mg IV Q4W x 24 months or until progression
"#;

const CASE_EGFR_MUTATION: &str = r#"PRIOR AUTHORIZATION REQUEST

Patient: David Chen (DOB: 02/14/1968)
Member ID: MEM-147258369
Date of Request: 12/02/2024
Requesting Provider: Dr. Lisa Park, MD - University Oncology
NPI: 7890123456

MEDICATION REQUESTED: Keytruda (pembrolizumab) 200mg IV every 3 weeks

CLINICAL INFORMATION:

Diagnosis: Metastatic Non-Small Cell Lung Cancer (NSCLC) - Adenocarcinoma
ICD-10: C34.90, C78.00

Disease Stage: Stage IV (T2N2M1a) - diagnosed October 2024
Metastatic sites: Contralateral lung, pleural effusion

Histology: Adenocarcinoma confirmed by bronchoscopic biopsy (10/08/2024)

BIOMARKER TESTING (Guardant360 - 10/20/2024):
- PD-L1 TPS: 60% (High Expression)
- EGFR: Exon 19 deletion DETECTED
- ALK: Negative
- BRAF: Wild type

PERFORMANCE STATUS: ECOG 1

PRIOR TREATMENTS:
- No prior systemic therapy

COMORBIDITIES:
- None significant

RATIONALE FOR KEYTRUDA:
Patient has metastatic NSCLC with high PD-L1 expression. Requesting first-line immunotherapy.

REQUESTING: Approval for Keytruda 200mg IV Q3W
"#;

/// Seeds the policies and sample cases into an empty database.
pub async fn seed_database(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let policies = PolicyRepository::new(pool.clone());
    if policies.count().await? > 0 {
        tracing::info!("database already contains data, skipping seed");
        return Ok(());
    }

    let keytruda = keytruda_policy();
    let opdivo = opdivo_policy();
    policies.upsert(&keytruda).await?;
    policies.upsert(&opdivo).await?;
    tracing::info!("seeded 2 policies");

    let cases = CaseRepository::new(pool.clone());
    let samples = [
        ("Stage IV NSCLC - High PD-L1 - First Line Keytruda", CASE_HIGH_PDL1, keytruda.id),
        ("NSCLC - Low PD-L1 - Keytruda Denial Expected", CASE_LOW_PDL1, keytruda.id),
        ("NSCLC - Missing Biomarker Data - Pend for Info", CASE_PENDING_BIOMARKERS, keytruda.id),
        ("Stage IV Melanoma - Opdivo First Line", CASE_MELANOMA, opdivo.id),
        ("NSCLC with EGFR Mutation - Keytruda Not Appropriate", CASE_EGFR_MUTATION, keytruda.id),
    ];

    for (title, raw_text, policy_id) in samples.iter() {
        let case = PaCase::new(title.to_string(), raw_text.to_string(), *policy_id)
            .map_err(|e| DatabaseError::Seed(e.to_string()))?;
        cases.insert(&case).await?;
    }
    tracing::info!("seeded {} sample cases", samples.len());

    Ok(())
}
