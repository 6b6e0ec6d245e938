//! Property-Based Test Generators
//!
//! Proptest strategies for clinical case data, criteria, and evaluation
//! records. The vocabularies lean on the controlled status strings the
//! evaluation engine recognizes, plus a few it does not, so properties
//! cover both recognized and fall-through paths.

use core_kernel::CaseData;
use domain_policy::{Criterion, CriterionEvaluation, CriterionStatus, CriterionType};
use proptest::prelude::*;

/// Strategy over the criterion categories.
pub fn arb_criterion_type() -> impl Strategy<Value = CriterionType> {
    prop_oneof![
        Just(CriterionType::Stage),
        Just(CriterionType::Biomarker),
        Just(CriterionType::PriorTherapy),
        Just(CriterionType::Clinical),
    ]
}

/// Strategy over the three verdicts.
pub fn arb_criterion_status() -> impl Strategy<Value = CriterionStatus> {
    prop_oneof![
        Just(CriterionStatus::Met),
        Just(CriterionStatus::Unmet),
        Just(CriterionStatus::Unknown),
    ]
}

fn arb_description() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Patient has histologically confirmed metastatic NSCLC (Stage IV)".to_string()),
        Just("Unresectable Stage III or metastatic Stage IV melanoma".to_string()),
        Just("Tumor expresses PD-L1 (Tumor Proportion Score >= 50%)".to_string()),
        Just("No EGFR or ALK genomic tumor aberrations present".to_string()),
        Just("BRAF mutation status has been determined".to_string()),
        Just("ECOG Performance Status 0-1".to_string()),
        Just("ECOG Performance Status 0-2".to_string()),
        Just("No active brain metastases".to_string()),
        Just("No prior systemic chemotherapy (first-line treatment)".to_string()),
        Just("Adequate organ function".to_string()),
    ]
}

fn arb_stage() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Stage II".to_string()),
        Just("Stage IIIB".to_string()),
        Just("Stage IV".to_string()),
        Just("Stage IV (M1c)".to_string()),
        Just("metastatic".to_string()),
    ]
}

fn arb_marker_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("positive".to_string()),
        Just("negative".to_string()),
        Just("pending".to_string()),
        Just("not tested".to_string()),
        Just("wild type".to_string()),
        Just("mutated".to_string()),
        Just("equivocal".to_string()),
    ]
}

fn arb_pd_l1_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0u32..=100u32).prop_map(|v| format!("{}%", v)),
        Just("high".to_string()),
        Just("pending".to_string()),
    ]
}

fn arb_mutation() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Exon 19 deletion".to_string()),
        Just("Exon 21 L858R".to_string()),
    ]
}

fn arb_ecog() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0i32..=4i32).prop_map(|v| v.to_string()),
        Just("ambulatory".to_string()),
    ]
}

fn arb_sites() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop_oneof![
            Just("liver".to_string()),
            Just("bone".to_string()),
            Just("contralateral lung".to_string()),
            Just("brain (2 lesions)".to_string()),
        ],
        0..4,
    )
}

fn arb_treatments() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        Just(Vec::new()),
        Just(vec!["No prior systemic therapy".to_string()]),
        Just(vec!["Carboplatin + Pemetrexed".to_string()]),
        Just(vec![
            "Carboplatin + Pemetrexed".to_string(),
            "Docetaxel".to_string(),
        ]),
    ]
}

/// Strategy over clinical case data covering the fields the evaluation
/// engine reads. Sections not generated stay at their defaults, which the
/// engine treats as "not documented".
pub fn arb_case_data() -> impl Strategy<Value = CaseData> {
    let biomarkers = (
        arb_marker_status(),
        arb_pd_l1_value(),
        arb_marker_status(),
        arb_mutation(),
        arb_marker_status(),
    );
    let clinical = (
        arb_stage(),
        arb_sites(),
        arb_ecog(),
        any::<bool>(),
        arb_treatments(),
    );

    (biomarkers, clinical).prop_map(
        |(
            (pd_l1_status, pd_l1_value, egfr_status, egfr_mutation, alk_status),
            (stage, sites, ecog, has_prior, treatments),
        )| {
            let mut data = CaseData::default();
            data.disease_stage.stage = stage;
            data.disease_stage.metastatic_sites = sites;
            data.biomarkers.pd_l1.status = pd_l1_status;
            data.biomarkers.pd_l1.value = pd_l1_value;
            data.biomarkers.egfr.status = egfr_status;
            data.biomarkers.egfr.mutation = egfr_mutation;
            data.biomarkers.alk.status = alk_status;
            data.performance_status.ecog = ecog;
            data.prior_therapy.has_prior_systemic = has_prior;
            data.prior_therapy.treatments = treatments;
            data
        },
    )
}

/// Strategy over a single criterion. Type and description are drawn
/// independently, so mismatched pairs (a biomarker-typed criterion with
/// stage wording) occur and must fall through to `unknown`.
pub fn arb_criterion() -> impl Strategy<Value = Criterion> {
    (
        "C[1-9]",
        arb_description(),
        arb_criterion_type(),
        any::<bool>(),
    )
        .prop_map(|(id, description, criterion_type, required)| Criterion {
            id,
            description,
            criterion_type,
            required,
        })
}

/// Strategy over a criterion list of length `0..=max`.
pub fn arb_criteria(max: usize) -> impl Strategy<Value = Vec<Criterion>> {
    proptest::collection::vec(arb_criterion(), 0..=max)
}

/// Strategy over a single evaluation record.
pub fn arb_evaluation() -> impl Strategy<Value = CriterionEvaluation> {
    (
        "C[1-9][0-9]?",
        arb_criterion_type(),
        any::<bool>(),
        arb_criterion_status(),
    )
        .prop_map(|(id, criterion_type, required, status)| CriterionEvaluation {
            id,
            description: String::new(),
            criterion_type,
            required,
            status,
            evidence: String::new(),
            details: String::new(),
        })
}

/// Strategy over an evaluation list of length `0..=max`.
pub fn arb_evaluations(max: usize) -> impl Strategy<Value = Vec<CriterionEvaluation>> {
    proptest::collection::vec(arb_evaluation(), 0..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_ecog_is_short(case_data in arb_case_data()) {
            prop_assert!(case_data.performance_status.ecog.len() <= 10);
        }

        #[test]
        fn generated_criteria_respect_the_bound(criteria in arb_criteria(6)) {
            prop_assert!(criteria.len() <= 6);
        }

        #[test]
        fn generated_evaluations_have_nonempty_ids(evaluations in arb_evaluations(8)) {
            prop_assert!(evaluations.iter().all(|e| !e.id.is_empty()));
        }
    }
}
