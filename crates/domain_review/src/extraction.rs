//! Demo-mode extraction
//!
//! Deterministic regex extraction over the semi-structured PA request
//! format. Good enough to exercise the full pipeline without an external
//! model; anything the patterns miss stays at its default and the evaluator
//! reads it as "not documented".

use async_trait::async_trait;
use core_kernel::{CaseData, Provider};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ReviewError;
use crate::ports::CaseExtractor;

static PATIENT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"Patient:\s*([^\n(]+)").unwrap());
static PATIENT_DOB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"DOB:\s*(\d{1,2}/\d{1,2}/\d{4})").unwrap());
static MEMBER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"Member ID:\s*([^\n]+)").unwrap());

static DIAGNOSIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"Diagnosis:\s*([^\n]+)").unwrap());
static ICD10: Lazy<Regex> = Lazy::new(|| Regex::new(r"ICD-10:\s*([^\n]+)").unwrap());
static HISTOLOGY: Lazy<Regex> = Lazy::new(|| Regex::new(r"Histology:\s*([^\n]+)").unwrap());

static STAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Stage[:\s]+(IV|III|II|I)[\s(]*([^\n)]*)").unwrap());
static METASTATIC_SITES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[Mm]etastatic sites?:\s*([^\n]+)").unwrap());

static PD_L1_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"PD-L1[^:]*:\s*(\d+)%").unwrap());
static EGFR_WILD_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)EGFR[:\s]+Wild type").unwrap());
static EGFR_MUTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)EGFR[:\s]+(Exon \d+ [^\n,]+)").unwrap());
static ALK_NEGATIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)ALK[:\s]+Negative").unwrap());
static ALK_POSITIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)ALK[:\s]+Positive").unwrap());

static ECOG_SCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ECOG[:\s]+(\d)").unwrap());
static ECOG_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ECOG[:\s]+\d+\s*[-\u{2013}]\s*([^\n]+)").unwrap());

static NO_PRIOR_SYSTEMIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)No prior systemic").unwrap());
static PRIOR_TREATMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Prior [Tt]reatments?:\s*([^\n]+)").unwrap());

static COMORBIDITIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)COMORBIDITIES:\s*(.*?)(?:RATIONALE|REQUESTING|\z)").unwrap());

static PROVIDER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Requesting Provider:\s*([^\n]+)").unwrap());
static PROVIDER_NPI: Lazy<Regex> = Lazy::new(|| Regex::new(r"NPI:\s*(\d+)").unwrap());

static DRUG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"MEDICATION REQUESTED:\s*([^\n]+)").unwrap());
static DRUG_DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"REQUESTING:\s*([^\n]+)").unwrap());

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Regex-based extractor for demo mode.
#[derive(Debug, Default)]
pub struct DemoExtractor;

impl DemoExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous extraction; the trait impl delegates here.
    pub fn extract_sync(&self, raw_text: &str) -> CaseData {
        let mut data = CaseData::default();
        let lower = raw_text.to_lowercase();

        data.patient_info.name =
            capture(&PATIENT_NAME, raw_text).unwrap_or_else(|| "N/A".to_string());
        data.patient_info.dob =
            capture(&PATIENT_DOB, raw_text).unwrap_or_else(|| "N/A".to_string());
        data.patient_info.member_id =
            capture(&MEMBER_ID, raw_text).unwrap_or_else(|| "N/A".to_string());

        data.diagnosis.primary =
            capture(&DIAGNOSIS, raw_text).unwrap_or_else(|| "N/A".to_string());
        data.diagnosis.icd10 = capture(&ICD10, raw_text).unwrap_or_default();
        data.diagnosis.histology = capture(&HISTOLOGY, raw_text).unwrap_or_default();

        if let Some(caps) = STAGE.captures(raw_text) {
            data.disease_stage.stage = format!("Stage {}", caps[1].to_uppercase());
            if let Some(tnm) = caps.get(2) {
                data.disease_stage.tnm = tnm.as_str().trim().to_string();
            }
        } else {
            data.disease_stage.stage = "N/A".to_string();
        }
        if let Some(sites) = capture(&METASTATIC_SITES, raw_text) {
            data.disease_stage.metastatic_sites = sites
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        data.biomarkers.pd_l1.status = "not tested".to_string();
        if let Some(caps) = PD_L1_VALUE.captures(raw_text) {
            let value: i64 = caps[1].parse().unwrap_or(0);
            data.biomarkers.pd_l1.status = if value > 0 {
                "positive".to_string()
            } else {
                "negative".to_string()
            };
            data.biomarkers.pd_l1.value = format!("{}%", value);
        } else if lower.contains("pending") && lower.contains("pd-l1") {
            data.biomarkers.pd_l1.status = "pending".to_string();
        }

        data.biomarkers.egfr.status = "not tested".to_string();
        if EGFR_WILD_TYPE.is_match(raw_text) {
            data.biomarkers.egfr.status = "wild type".to_string();
        } else if let Some(mutation) = capture(&EGFR_MUTATION, raw_text) {
            data.biomarkers.egfr.status = "mutated".to_string();
            data.biomarkers.egfr.mutation = mutation;
        } else if lower.contains("egfr") && lower.contains("pending") {
            data.biomarkers.egfr.status = "pending".to_string();
        }

        data.biomarkers.alk.status = "not tested".to_string();
        if ALK_NEGATIVE.is_match(raw_text) {
            data.biomarkers.alk.status = "negative".to_string();
        } else if ALK_POSITIVE.is_match(raw_text) {
            data.biomarkers.alk.status = "positive".to_string();
        }

        data.performance_status.ecog = capture(&ECOG_SCORE, raw_text).unwrap_or_default();
        data.performance_status.description =
            capture(&ECOG_DESCRIPTION, raw_text).unwrap_or_default();

        data.prior_therapy.immunotherapy_history = "none".to_string();
        if NO_PRIOR_SYSTEMIC.is_match(raw_text) {
            data.prior_therapy.has_prior_systemic = false;
            data.prior_therapy.treatments = vec!["No prior systemic therapy".to_string()];
        } else if let Some(treatments) = capture(&PRIOR_TREATMENTS, raw_text) {
            if !treatments.to_lowercase().contains("no prior") {
                data.prior_therapy.has_prior_systemic = true;
                data.prior_therapy.treatments = vec![treatments];
            }
        }

        if let Some(caps) = COMORBIDITIES.captures(raw_text) {
            data.comorbidities = caps[1]
                .lines()
                .map(|line| line.trim().trim_start_matches('-').trim().to_string())
                .filter(|line| !line.is_empty() && line.len() > 2)
                .collect();
        }

        data.requesting_provider = Provider {
            name: capture(&PROVIDER_NAME, raw_text).unwrap_or_default(),
            npi: capture(&PROVIDER_NPI, raw_text).unwrap_or_default(),
            facility: String::new(),
        };

        data.drug_requested.name = capture(&DRUG_NAME, raw_text).unwrap_or_default();
        data.drug_requested.duration = capture(&DRUG_DURATION, raw_text).unwrap_or_default();

        data
    }
}

#[async_trait]
impl CaseExtractor for DemoExtractor {
    async fn extract(&self, raw_text: &str) -> Result<CaseData, ReviewError> {
        Ok(self.extract_sync(raw_text))
    }
}
