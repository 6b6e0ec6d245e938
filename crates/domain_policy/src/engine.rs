//! Criteria evaluation engine
//!
//! Maps structured clinical case data plus a policy's criterion list into an
//! ordered list of per-criterion verdicts. Dispatch happens twice: first on
//! the criterion category, then on keyword phrases found in the criterion's
//! description text. The matched phrases and their priority order are the
//! rule specification - a criterion whose description matches no phrase
//! evaluates to `unknown` with no evidence.
//!
//! Every path is total: missing case-data sections read as empty values and
//! produce `unknown` verdicts, never errors.

use core_kernel::CaseData;

use crate::criteria::{Criterion, CriterionEvaluation, CriterionStatus, CriterionType};

/// Evaluates each criterion of a policy against the extracted case data.
///
/// The returned list has the same length and order as `criteria`, and each
/// record mirrors its source criterion's `id`, `type`, and `required` flag.
///
/// # Example
///
/// ```rust,ignore
/// let evaluations = evaluate_criteria(&case_data, &policy.criteria);
/// assert_eq!(evaluations.len(), policy.criteria.len());
/// ```
pub fn evaluate_criteria(case_data: &CaseData, criteria: &[Criterion]) -> Vec<CriterionEvaluation> {
    tracing::debug!(criteria = criteria.len(), "evaluating policy criteria");

    criteria
        .iter()
        .map(|criterion| {
            let mut evaluation = CriterionEvaluation::pending(criterion);

            match criterion.criterion_type {
                CriterionType::Stage => evaluate_stage(case_data, criterion, &mut evaluation),
                CriterionType::Biomarker => {
                    evaluate_biomarker(case_data, criterion, &mut evaluation)
                }
                CriterionType::PriorTherapy => {
                    evaluate_prior_therapy(case_data, criterion, &mut evaluation)
                }
                CriterionType::Clinical => evaluate_clinical(case_data, criterion, &mut evaluation),
            }

            evaluation
        })
        .collect()
}

/// True if `haystack` contains any of the given phrases.
fn contains_any(haystack: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| haystack.contains(phrase))
}

/// Stage criteria.
///
/// Staging is monotonic: a Stage IV patient also satisfies a Stage III or
/// higher requirement. A documented stage that does not match is `unmet`;
/// an undocumented stage is `unknown`.
fn evaluate_stage(case_data: &CaseData, criterion: &Criterion, evaluation: &mut CriterionEvaluation) {
    let disease_stage = &case_data.disease_stage;
    let stage = disease_stage.stage.to_lowercase();
    let desc = criterion.description.to_lowercase();

    if contains_any(&desc, &["stage iv", "stage 4", "metastatic"]) {
        if contains_any(&stage, &["stage iv", "stage 4", "metastatic"]) {
            evaluation.status = CriterionStatus::Met;
            evaluation.evidence = format!("Patient has {}", disease_stage.stage);
            if !disease_stage.metastatic_sites.is_empty() {
                evaluation.details = format!(
                    "Metastatic sites: {}",
                    disease_stage.metastatic_sites.join(", ")
                );
            }
        } else if !stage.is_empty() {
            evaluation.status = CriterionStatus::Unmet;
            evaluation.evidence = format!(
                "Patient stage is {}, not Stage IV/metastatic",
                disease_stage.stage
            );
        } else {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence = "Disease stage not documented".to_string();
        }
    } else if contains_any(&desc, &["stage iii", "stage 3"]) {
        if contains_any(&stage, &["stage iii", "stage 3", "stage iv", "stage 4"]) {
            evaluation.status = CriterionStatus::Met;
            evaluation.evidence = format!("Patient has {}", disease_stage.stage);
        } else if !stage.is_empty() {
            evaluation.status = CriterionStatus::Unmet;
            evaluation.evidence = format!("Patient stage is {}", disease_stage.stage);
        } else {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence = "Disease stage not documented".to_string();
        }
    }
}

/// Biomarker criteria. Marker dispatch order: PD-L1, EGFR, ALK, BRAF.
fn evaluate_biomarker(
    case_data: &CaseData,
    criterion: &Criterion,
    evaluation: &mut CriterionEvaluation,
) {
    let desc = criterion.description.to_lowercase();

    if contains_any(&desc, &["pd-l1", "pdl1"]) {
        evaluate_pd_l1(case_data, &desc, evaluation);
    } else if desc.contains("egfr") {
        evaluate_egfr(case_data, &desc, evaluation);
    } else if desc.contains("alk") {
        evaluate_alk(case_data, &desc, evaluation);
    } else if desc.contains("braf") {
        evaluate_braf(case_data, &desc, evaluation);
    }
}

/// PD-L1 expression.
///
/// A pending test overrides everything, including a documented numeric
/// value. Threshold criteria (TPS >= 50%) parse the value as a percentage
/// and fall back to qualitative status matching when it is not numeric.
fn evaluate_pd_l1(case_data: &CaseData, desc: &str, evaluation: &mut CriterionEvaluation) {
    let pd_l1 = &case_data.biomarkers.pd_l1;
    let status = pd_l1.status.to_lowercase();
    let value = &pd_l1.value;

    if status == "pending" || value.to_lowercase().contains("pending") {
        evaluation.status = CriterionStatus::Unknown;
        evaluation.evidence = "PD-L1 testing is pending".to_string();
        return;
    }

    if contains_any(desc, &[">= 50%", ">=50%", "tps >= 50"]) {
        match value.replace('%', "").trim().parse::<f64>() {
            Ok(numeric_value) => {
                if numeric_value >= 50.0 {
                    evaluation.status = CriterionStatus::Met;
                    evaluation.evidence = format!("PD-L1 TPS is {} (>= 50% required)", value);
                } else {
                    evaluation.status = CriterionStatus::Unmet;
                    evaluation.evidence =
                        format!("PD-L1 TPS is {} (< 50% required threshold)", value);
                }
            }
            Err(_) => {
                if status == "positive" || status.contains("high") {
                    evaluation.status = CriterionStatus::Met;
                    evaluation.evidence = format!("PD-L1 status: {}", status);
                } else if status == "negative" || status.contains("low") {
                    evaluation.status = CriterionStatus::Unmet;
                    evaluation.evidence = format!("PD-L1 status: {}", status);
                } else {
                    evaluation.status = CriterionStatus::Unknown;
                    evaluation.evidence = "PD-L1 level not clearly documented".to_string();
                }
            }
        }
    } else if status == "positive" || status == "detected" {
        evaluation.status = CriterionStatus::Met;
        evaluation.evidence = if value.is_empty() {
            format!("PD-L1 {}", status)
        } else {
            format!("PD-L1 {}: {}", status, value)
        };
    } else if status == "negative" || status == "not detected" {
        evaluation.status = CriterionStatus::Unmet;
        evaluation.evidence = format!("PD-L1 {}", status);
    } else if status == "not tested" {
        evaluation.status = CriterionStatus::Unknown;
        evaluation.evidence = "PD-L1 not tested".to_string();
    } else {
        evaluation.status = CriterionStatus::Unknown;
        evaluation.evidence = "PD-L1 status unclear".to_string();
    }
}

/// EGFR mutation status.
///
/// Exclusion criteria ("no EGFR aberrations") treat wild-type results as
/// `met` and any documented mutation as `unmet`; inclusion criteria invert
/// the polarity.
fn evaluate_egfr(case_data: &CaseData, desc: &str, evaluation: &mut CriterionEvaluation) {
    let egfr = &case_data.biomarkers.egfr;
    let status = egfr.status.to_lowercase();
    let mutation = &egfr.mutation;

    if status == "pending" {
        evaluation.status = CriterionStatus::Unknown;
        evaluation.evidence = "EGFR testing is pending".to_string();
    } else if contains_any(desc, &["no egfr", "egfr negative", "no"]) {
        if matches!(
            status.as_str(),
            "wild type" | "negative" | "not detected" | "no mutations"
        ) {
            evaluation.status = CriterionStatus::Met;
            evaluation.evidence = format!("EGFR: {} (no mutations detected)", status);
        } else if matches!(status.as_str(), "mutated" | "positive" | "detected")
            || !mutation.is_empty()
        {
            evaluation.status = CriterionStatus::Unmet;
            evaluation.evidence = format!(
                "EGFR mutation detected: {}",
                if mutation.is_empty() { &status } else { mutation }
            );
        } else if status == "not tested" {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence = "EGFR not tested".to_string();
        } else {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence = "EGFR status unclear".to_string();
        }
    } else if matches!(status.as_str(), "mutated" | "positive" | "detected") || !mutation.is_empty()
    {
        evaluation.status = CriterionStatus::Met;
        evaluation.evidence = format!(
            "EGFR mutation: {}",
            if mutation.is_empty() { "detected" } else { mutation }
        );
    } else {
        evaluation.status = CriterionStatus::Unmet;
        evaluation.evidence = format!("EGFR: {}", status);
    }
}

/// ALK rearrangement status.
///
/// Only exclusion criteria are covered; a criterion requiring ALK
/// positivity matches no branch and stays `unknown`.
fn evaluate_alk(case_data: &CaseData, desc: &str, evaluation: &mut CriterionEvaluation) {
    let alk = &case_data.biomarkers.alk;
    let status = alk.status.to_lowercase();

    if status == "pending" {
        evaluation.status = CriterionStatus::Unknown;
        evaluation.evidence = "ALK testing is pending".to_string();
    } else if contains_any(desc, &["no alk", "alk negative", "no"]) {
        if matches!(status.as_str(), "negative" | "not detected" | "no rearrangement") {
            evaluation.status = CriterionStatus::Met;
            evaluation.evidence = format!("ALK: {} (no rearrangement)", status);
        } else if matches!(status.as_str(), "positive" | "detected" | "rearranged") {
            evaluation.status = CriterionStatus::Unmet;
            evaluation.evidence = "ALK rearrangement detected".to_string();
        } else if status == "not tested" {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence = "ALK not tested".to_string();
        } else {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence = "ALK status unclear".to_string();
        }
    }
}

/// BRAF status, looked up in the open-ended marker list by name.
///
/// "Determined" criteria only require that a result exist. Negativity
/// criteria with no documented result fall out of the conditional and leave
/// the pre-dispatch `unknown` with no evidence; the "determined" branch
/// writes evidence for the same absence. Tests pin this asymmetry.
fn evaluate_braf(case_data: &CaseData, desc: &str, evaluation: &mut CriterionEvaluation) {
    let braf_result = case_data
        .biomarkers
        .other_markers
        .iter()
        .find(|marker| marker.name.to_lowercase().contains("braf"))
        .map(|marker| marker.result.to_lowercase())
        .filter(|result| !result.is_empty());

    match braf_result {
        Some(result) => {
            if desc.contains("determined") {
                evaluation.status = CriterionStatus::Met;
                evaluation.evidence = format!("BRAF status determined: {}", result);
            } else if contains_any(desc, &["negative", "wild type"]) {
                if contains_any(&result, &["wild type", "negative"]) {
                    evaluation.status = CriterionStatus::Met;
                    evaluation.evidence = format!("BRAF: {}", result);
                } else {
                    evaluation.status = CriterionStatus::Unmet;
                    evaluation.evidence = format!("BRAF mutation detected: {}", result);
                }
            }
        }
        None => {
            if desc.contains("determined") {
                evaluation.status = CriterionStatus::Unknown;
                evaluation.evidence = "BRAF status not documented".to_string();
            }
        }
    }
}

/// Prior systemic therapy criteria.
fn evaluate_prior_therapy(
    case_data: &CaseData,
    criterion: &Criterion,
    evaluation: &mut CriterionEvaluation,
) {
    let prior_therapy = &case_data.prior_therapy;
    let has_prior = prior_therapy.has_prior_systemic;
    let treatments = &prior_therapy.treatments;
    let desc = criterion.description.to_lowercase();

    if contains_any(&desc, &["no prior", "first-line", "first line"]) {
        let all_no_prior = treatments
            .iter()
            .all(|treatment| treatment.to_lowercase().contains("no prior"));

        if !has_prior || treatments.is_empty() || all_no_prior {
            evaluation.status = CriterionStatus::Met;
            evaluation.evidence = "No prior systemic therapy documented".to_string();
        } else {
            evaluation.status = CriterionStatus::Unmet;
            evaluation.evidence = format!("Prior treatments: {}", treatments.join(", "));
        }
    } else if has_prior && !treatments.is_empty() {
        evaluation.status = CriterionStatus::Met;
        evaluation.evidence = format!("Prior treatments: {}", treatments.join(", "));
    } else {
        evaluation.status = CriterionStatus::Unmet;
        evaluation.evidence = "No prior therapy documented".to_string();
    }
}

/// Clinical criteria: ECOG performance status and brain metastases.
fn evaluate_clinical(
    case_data: &CaseData,
    criterion: &Criterion,
    evaluation: &mut CriterionEvaluation,
) {
    let desc = criterion.description.to_lowercase();

    if contains_any(&desc, &["ecog", "performance status"]) {
        evaluate_ecog(case_data, &desc, evaluation);
    } else if contains_any(&desc, &["brain metastases", "brain metastasis"]) {
        evaluate_brain_metastases(case_data, &desc, evaluation);
    }
}

/// ECOG performance status.
///
/// Only the 0-1 and 0-2 ranges are recognized; other ranges match no
/// branch and stay `unknown`. A score that does not parse as an integer is
/// `unknown` with an explanatory message.
fn evaluate_ecog(case_data: &CaseData, desc: &str, evaluation: &mut CriterionEvaluation) {
    let ecog = &case_data.performance_status.ecog;

    match ecog.trim().parse::<i32>() {
        Ok(ecog_value) => {
            if contains_any(desc, &["ecog 0-1", "ecog performance status 0-1"]) {
                if ecog_value <= 1 {
                    evaluation.status = CriterionStatus::Met;
                    evaluation.evidence = format!("ECOG Performance Status: {}", ecog_value);
                } else {
                    evaluation.status = CriterionStatus::Unmet;
                    evaluation.evidence = format!("ECOG {} exceeds 0-1 requirement", ecog_value);
                }
            } else if contains_any(desc, &["ecog 0-2", "ecog performance status 0-2"]) {
                if ecog_value <= 2 {
                    evaluation.status = CriterionStatus::Met;
                    evaluation.evidence = format!("ECOG Performance Status: {}", ecog_value);
                } else {
                    evaluation.status = CriterionStatus::Unmet;
                    evaluation.evidence = format!("ECOG {} exceeds 0-2 requirement", ecog_value);
                }
            }
        }
        Err(_) => {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence = "ECOG Performance Status not clearly documented".to_string();
        }
    }
}

/// Brain metastases.
///
/// Presence against a "no active brain metastases" criterion is `unknown`,
/// not `unmet`: the site list alone cannot show whether lesions are treated
/// and stable, so the call is left to the reviewer.
fn evaluate_brain_metastases(case_data: &CaseData, desc: &str, evaluation: &mut CriterionEvaluation) {
    let metastatic_sites = &case_data.disease_stage.metastatic_sites;
    let has_brain_mets = metastatic_sites
        .iter()
        .any(|site| site.to_lowercase().contains("brain"));

    if desc.contains("no active brain") {
        if !has_brain_mets {
            evaluation.status = CriterionStatus::Met;
            evaluation.evidence = "No brain metastases documented".to_string();
        } else {
            evaluation.status = CriterionStatus::Unknown;
            evaluation.evidence =
                "Brain metastases present - stability status needs verification".to_string();
        }
    } else if has_brain_mets {
        evaluation.status = CriterionStatus::Met;
        evaluation.evidence = "Brain metastases documented".to_string();
    } else {
        evaluation.status = CriterionStatus::Unmet;
        evaluation.evidence = "No brain metastases documented".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::MarkerResult;

    fn criterion(id: &str, description: &str, criterion_type: CriterionType) -> Criterion {
        Criterion {
            id: id.to_string(),
            description: description.to_string(),
            criterion_type,
            required: true,
        }
    }

    fn stage_iv_case() -> CaseData {
        let mut case_data = CaseData::default();
        case_data.disease_stage.stage = "Stage IV (T3N2M1a)".to_string();
        case_data.disease_stage.metastatic_sites =
            vec!["liver".to_string(), "adrenal".to_string()];
        case_data
    }

    #[test]
    fn test_stage_iv_criterion_met_with_details() {
        let case_data = stage_iv_case();
        let criteria = vec![criterion(
            "C1",
            "Patient has histologically confirmed metastatic NSCLC (Stage IV)",
            CriterionType::Stage,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
        assert!(evaluations[0].evidence.contains("Stage IV (T3N2M1a)"));
        assert_eq!(evaluations[0].details, "Metastatic sites: liver, adrenal");
    }

    #[test]
    fn test_stage_documented_but_not_matching_is_unmet() {
        let mut case_data = CaseData::default();
        case_data.disease_stage.stage = "Stage II".to_string();
        let criteria = vec![criterion("C1", "Stage IV disease", CriterionType::Stage)];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unmet);
        assert!(evaluations[0].evidence.contains("not Stage IV/metastatic"));
    }

    #[test]
    fn test_stage_undocumented_is_unknown() {
        let case_data = CaseData::default();
        let criteria = vec![criterion("C1", "Stage IV disease", CriterionType::Stage)];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert_eq!(evaluations[0].evidence, "Disease stage not documented");
    }

    #[test]
    fn test_stage_iv_satisfies_stage_iii_requirement() {
        let case_data = stage_iv_case();
        let criteria = vec![criterion(
            "C1",
            "Unresectable Stage III disease",
            CriterionType::Stage,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_pd_l1_threshold_met() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.pd_l1.status = "positive".to_string();
        case_data.biomarkers.pd_l1.value = "75%".to_string();
        let criteria = vec![criterion(
            "C2",
            "Tumor expresses PD-L1 (Tumor Proportion Score >= 50%)",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
        assert!(evaluations[0].evidence.contains("75%"));
    }

    #[test]
    fn test_pd_l1_threshold_unmet() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.pd_l1.status = "positive".to_string();
        case_data.biomarkers.pd_l1.value = "15%".to_string();
        let criteria = vec![criterion(
            "C2",
            "PD-L1 TPS >= 50%",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unmet);
    }

    #[test]
    fn test_pd_l1_pending_overrides_numeric_value() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.pd_l1.status = "pending".to_string();
        case_data.biomarkers.pd_l1.value = "90%".to_string();
        let criteria = vec![criterion(
            "C2",
            "PD-L1 TPS >= 50%",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert_eq!(evaluations[0].evidence, "PD-L1 testing is pending");
    }

    #[test]
    fn test_pd_l1_threshold_falls_back_to_qualitative_status() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.pd_l1.status = "high expression".to_string();
        case_data.biomarkers.pd_l1.value = "strong".to_string();
        let criteria = vec![criterion(
            "C2",
            "PD-L1 TPS >= 50%",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_pd_l1_qualitative_without_threshold() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.pd_l1.status = "not tested".to_string();
        let criteria = vec![criterion(
            "C2",
            "Tumor expresses PD-L1",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert_eq!(evaluations[0].evidence, "PD-L1 not tested");
    }

    #[test]
    fn test_egfr_exclusion_unmet_with_mutation_evidence() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.egfr.status = "mutated".to_string();
        case_data.biomarkers.egfr.mutation = "Exon 19 deletion".to_string();
        let criteria = vec![criterion(
            "C3",
            "No EGFR or ALK genomic tumor aberrations present",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unmet);
        assert!(evaluations[0].evidence.contains("Exon 19 deletion"));
    }

    #[test]
    fn test_egfr_exclusion_met_for_wild_type() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.egfr.status = "wild type".to_string();
        let criteria = vec![criterion(
            "C3",
            "No EGFR mutations",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_egfr_inclusion_polarity_inverts() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.egfr.status = "mutated".to_string();
        case_data.biomarkers.egfr.mutation = "Exon 21 L858R".to_string();
        let criteria = vec![criterion(
            "C3",
            "EGFR activating mutation present",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
        assert!(evaluations[0].evidence.contains("Exon 21 L858R"));
    }

    #[test]
    fn test_egfr_pending_is_unknown() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.egfr.status = "pending".to_string();
        let criteria = vec![criterion(
            "C3",
            "No EGFR aberrations",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
    }

    #[test]
    fn test_alk_exclusion_met_for_negative() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.alk.status = "negative".to_string();
        let criteria = vec![criterion(
            "C3",
            "No ALK rearrangement",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_alk_positivity_requirement_falls_through_to_unknown() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.alk.status = "positive".to_string();
        let criteria = vec![criterion(
            "C3",
            "ALK rearrangement present",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert!(evaluations[0].evidence.is_empty());
    }

    #[test]
    fn test_braf_determined_with_result_is_met() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.other_markers.push(MarkerResult {
            name: "BRAF".to_string(),
            result: "V600E mutation".to_string(),
        });
        let criteria = vec![criterion(
            "C2",
            "BRAF mutation status has been determined",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
        assert!(evaluations[0].evidence.contains("v600e"));
    }

    #[test]
    fn test_braf_determined_without_result_is_unknown_with_evidence() {
        let case_data = CaseData::default();
        let criteria = vec![criterion(
            "C2",
            "BRAF mutation status has been determined",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert_eq!(evaluations[0].evidence, "BRAF status not documented");
    }

    // The negativity branch leaves absence at the pre-dispatch default with
    // no evidence, while the "determined" branch writes an explanation for
    // the same absence. Behaviorally identical verdicts today; this test
    // exists so a change to either branch shows up as a diff here.
    #[test]
    fn test_braf_negativity_without_result_is_unknown_without_evidence() {
        let case_data = CaseData::default();
        let criteria = vec![criterion(
            "C2",
            "BRAF negative or wild type",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert!(evaluations[0].evidence.is_empty());
    }

    #[test]
    fn test_braf_wild_type_meets_negativity_requirement() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.other_markers.push(MarkerResult {
            name: "BRAF V600E".to_string(),
            result: "Wild type".to_string(),
        });
        let criteria = vec![criterion(
            "C2",
            "BRAF negative or wild type",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_braf_empty_result_reads_as_absent() {
        let mut case_data = CaseData::default();
        case_data.biomarkers.other_markers.push(MarkerResult {
            name: "BRAF".to_string(),
            result: String::new(),
        });
        let criteria = vec![criterion(
            "C2",
            "BRAF mutation status has been determined",
            CriterionType::Biomarker,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert_eq!(evaluations[0].evidence, "BRAF status not documented");
    }

    #[test]
    fn test_first_line_criterion_met_without_prior_therapy() {
        let case_data = CaseData::default();
        let criteria = vec![criterion(
            "C5",
            "No prior systemic chemotherapy (first-line treatment)",
            CriterionType::PriorTherapy,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_first_line_criterion_unmet_with_prior_treatments() {
        let mut case_data = CaseData::default();
        case_data.prior_therapy.has_prior_systemic = true;
        case_data.prior_therapy.treatments = vec!["Carboplatin + Pemetrexed".to_string()];
        let criteria = vec![criterion(
            "C5",
            "No prior systemic therapy",
            CriterionType::PriorTherapy,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unmet);
        assert!(evaluations[0].evidence.contains("Carboplatin"));
    }

    #[test]
    fn test_first_line_met_when_treatments_only_note_no_prior() {
        let mut case_data = CaseData::default();
        case_data.prior_therapy.has_prior_systemic = true;
        case_data.prior_therapy.treatments = vec!["No prior systemic therapy".to_string()];
        let criteria = vec![criterion(
            "C5",
            "First-line treatment",
            CriterionType::PriorTherapy,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_documented_prior_therapy_requirement() {
        let mut case_data = CaseData::default();
        case_data.prior_therapy.has_prior_systemic = true;
        case_data.prior_therapy.treatments = vec!["Platinum doublet".to_string()];
        let criteria = vec![criterion(
            "C5",
            "Documented progression on prior platinum-based therapy",
            CriterionType::PriorTherapy,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_ecog_0_1_met_and_unmet() {
        let mut case_data = CaseData::default();
        case_data.performance_status.ecog = "1".to_string();
        let criteria = vec![criterion(
            "C4",
            "ECOG Performance Status 0-1",
            CriterionType::Clinical,
        )];
        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);

        case_data.performance_status.ecog = "2".to_string();
        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unmet);
        assert!(evaluations[0].evidence.contains("exceeds 0-1"));
    }

    #[test]
    fn test_ecog_0_2_boundary() {
        let mut case_data = CaseData::default();
        case_data.performance_status.ecog = "2".to_string();
        let criteria = vec![criterion(
            "C3",
            "ECOG Performance Status 0-2",
            CriterionType::Clinical,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_ecog_unparseable_is_unknown() {
        let mut case_data = CaseData::default();
        case_data.performance_status.ecog = "ambulatory".to_string();
        let criteria = vec![criterion(
            "C4",
            "ECOG Performance Status 0-1",
            CriterionType::Clinical,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert_eq!(
            evaluations[0].evidence,
            "ECOG Performance Status not clearly documented"
        );
    }

    // "ECOG 0-3" has no matching branch. Known gap, kept deliberately.
    #[test]
    fn test_ecog_unrecognized_range_stays_unknown() {
        let mut case_data = CaseData::default();
        case_data.performance_status.ecog = "1".to_string();
        let criteria = vec![criterion(
            "C4",
            "ECOG Performance Status 0-3",
            CriterionType::Clinical,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert!(evaluations[0].evidence.is_empty());
    }

    #[test]
    fn test_no_active_brain_mets_met_when_absent() {
        let case_data = stage_iv_case();
        let criteria = vec![criterion(
            "C4",
            "No active brain metastases",
            CriterionType::Clinical,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_brain_mets_present_needs_human_judgment() {
        let mut case_data = stage_iv_case();
        case_data
            .disease_stage
            .metastatic_sites
            .push("Brain (2 lesions)".to_string());
        let criteria = vec![criterion(
            "C4",
            "No active brain metastases",
            CriterionType::Clinical,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert!(evaluations[0].evidence.contains("stability"));
    }

    #[test]
    fn test_documented_brain_mets_requirement() {
        let mut case_data = stage_iv_case();
        let criteria = vec![criterion(
            "C4",
            "Documented brain metastases",
            CriterionType::Clinical,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unmet);

        case_data
            .disease_stage
            .metastatic_sites
            .push("brain".to_string());
        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Met);
    }

    #[test]
    fn test_unmatched_description_stays_unknown_without_evidence() {
        let case_data = stage_iv_case();
        let criteria = vec![criterion(
            "C9",
            "Adequate organ function",
            CriterionType::Clinical,
        )];

        let evaluations = evaluate_criteria(&case_data, &criteria);
        assert_eq!(evaluations[0].status, CriterionStatus::Unknown);
        assert!(evaluations[0].evidence.is_empty());
    }
}
