//! Draft determination letters
//!
//! Two letters per case: a formal clinical letter for the requesting
//! provider and a plain-language letter for the member. Three template
//! pairs, selected by the recommended action. Letters are drafts; the
//! reviewer can edit them before the decision is finalized.

use domain_policy::Policy;
use serde::{Deserialize, Serialize};

use crate::recommendation::{Recommendation, RecommendedAction};

/// Provider and member letter pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterSet {
    pub provider_letter: String,
    pub member_letter: String,
}

fn bullet_list(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        format!("  - {}", fallback)
    } else {
        items
            .iter()
            .map(|item| format!("  - {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Drafts the letter pair for a recommendation.
pub fn draft_letters(policy: &Policy, recommendation: &Recommendation) -> LetterSet {
    let drug_name = &policy.drug_name;
    let indication = &policy.indication;
    let reasons_text = bullet_list(&recommendation.primary_reasons, "See clinical rationale");

    match recommendation.recommendation {
        RecommendedAction::Approve => LetterSet {
            provider_letter: format!(
                "PRIOR AUTHORIZATION DETERMINATION\n\n\
                 RE: {drug_name} for {indication}\n\n\
                 Dear Healthcare Provider,\n\n\
                 Following our review of the prior authorization request submitted for the \
                 above-referenced medication, we are pleased to inform you that this request \
                 has been APPROVED.\n\n\
                 DETERMINATION: APPROVED\n\
                 EFFECTIVE DATE: Upon receipt\n\
                 AUTHORIZATION PERIOD: Per policy guidelines\n\n\
                 CLINICAL RATIONALE:\n{reasons_text}\n\n\
                 The submitted clinical documentation demonstrates that the patient meets the \
                 applicable coverage criteria for {drug_name}. This authorization is valid for \
                 the standard treatment duration as outlined in our coverage policy.\n\n\
                 Please ensure that all claims are submitted with the appropriate authorization \
                 reference number. If you have any questions regarding this determination, \
                 please contact our Provider Services line.\n\n\
                 Sincerely,\n\
                 Medical Management Department"
            ),
            member_letter: format!(
                "PRIOR AUTHORIZATION DECISION\n\n\
                 Dear Member,\n\n\
                 We have reviewed your doctor's request for {drug_name} to treat your \
                 condition.\n\n\
                 DECISION: APPROVED\n\n\
                 Good news! Your request has been approved. This means your health plan will \
                 cover this medication according to your plan benefits.\n\n\
                 WHAT HAPPENS NEXT:\n\
                 - Your doctor can now prescribe this medication\n\
                 - Take the prescription to your pharmacy\n\
                 - Your regular copay or coinsurance will apply\n\n\
                 If you have any questions about this decision or your benefits, please call \
                 the Member Services number on the back of your ID card.\n\n\
                 We wish you the best with your treatment.\n\n\
                 Sincerely,\n\
                 Member Services"
            ),
        },
        RecommendedAction::Deny => LetterSet {
            provider_letter: format!(
                "PRIOR AUTHORIZATION DETERMINATION\n\n\
                 RE: {drug_name} for {indication}\n\n\
                 Dear Healthcare Provider,\n\n\
                 Following our review of the prior authorization request submitted for the \
                 above-referenced medication, we regret to inform you that this request has \
                 been DENIED.\n\n\
                 DETERMINATION: DENIED\n\n\
                 REASONS FOR DENIAL:\n{reasons_text}\n\n\
                 CLINICAL RATIONALE:\n{rationale}\n\n\
                 APPEAL RIGHTS:\n\
                 You and/or the member have the right to appeal this decision. To file an \
                 appeal, please submit additional clinical documentation addressing the \
                 criteria noted above within 180 days of this notice.\n\n\
                 If you have questions about this determination or the appeal process, please \
                 contact our Provider Services line.\n\n\
                 Sincerely,\n\
                 Medical Management Department",
                rationale = if recommendation.clinical_rationale.is_empty() {
                    "The submitted documentation does not meet the required coverage criteria."
                } else {
                    &recommendation.clinical_rationale
                }
            ),
            member_letter: format!(
                "PRIOR AUTHORIZATION DECISION\n\n\
                 Dear Member,\n\n\
                 We have reviewed your doctor's request for {drug_name} to treat your \
                 condition.\n\n\
                 DECISION: NOT APPROVED AT THIS TIME\n\n\
                 We understand this may not be the answer you were hoping for. Here's why we \
                 made this decision:\n\n\
                 The information your doctor sent us did not show that you meet all the \
                 requirements for this medication under your health plan.\n\n\
                 WHAT YOU CAN DO:\n\
                 1. Talk to your doctor about other treatment options that may be covered\n\
                 2. Ask your doctor to send us more information and request another review\n\
                 3. File an appeal if you disagree with this decision\n\n\
                 HOW TO APPEAL:\n\
                 You have the right to ask us to look at this decision again. Call the Member \
                 Services number on your ID card, and we will help you understand your \
                 options.\n\n\
                 We're here to help. Please don't hesitate to contact us with any questions.\n\n\
                 Sincerely,\n\
                 Member Services"
            ),
        },
        RecommendedAction::Pend => {
            let gaps_text =
                bullet_list(&recommendation.information_gaps, "Additional clinical documentation");
            LetterSet {
                provider_letter: format!(
                    "PRIOR AUTHORIZATION DETERMINATION\n\n\
                     RE: {drug_name} for {indication}\n\n\
                     Dear Healthcare Provider,\n\n\
                     Following our review of the prior authorization request submitted for the \
                     above-referenced medication, we require additional information to complete \
                     our determination.\n\n\
                     DETERMINATION: PENDED FOR ADDITIONAL INFORMATION\n\n\
                     INFORMATION NEEDED:\n{gaps_text}\n\n\
                     Please submit the requested documentation within 14 days to avoid delays \
                     in processing. Once received, we will complete our review and issue a \
                     determination.\n\n\
                     SUBMISSION INSTRUCTIONS:\n\
                     Please fax the requested information to our Medical Management department \
                     with the case reference number clearly noted.\n\n\
                     If you have questions about the requested information, please contact our \
                     Provider Services line.\n\n\
                     Sincerely,\n\
                     Medical Management Department"
                ),
                member_letter: format!(
                    "PRIOR AUTHORIZATION UPDATE\n\n\
                     Dear Member,\n\n\
                     We are reviewing your doctor's request for {drug_name} to treat your \
                     condition.\n\n\
                     STATUS: WE NEED MORE INFORMATION\n\n\
                     We don't have all the information we need to make a decision yet. We have \
                     asked your doctor to send us more details about your treatment.\n\n\
                     WHAT HAPPENS NEXT:\n\
                     - Your doctor will send us the information we requested\n\
                     - Once we get it, we will finish our review\n\
                     - We will send you another letter with our decision\n\n\
                     You don't need to do anything right now. If you have questions, you can \
                     call the Member Services number on your ID card.\n\n\
                     Thank you for your patience.\n\n\
                     Sincerely,\n\
                     Member Services"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{Confidence, RecommendedAction};
    use core_kernel::PolicyId;
    use domain_policy::{Complexity, Criterion, CriterionType};

    fn policy() -> Policy {
        Policy {
            id: PolicyId::new_v7(),
            code: "POL-ONC-001".to_string(),
            drug_name: "Keytruda (Pembrolizumab)".to_string(),
            indication: "Non-Small Cell Lung Cancer (NSCLC)".to_string(),
            description: String::new(),
            criteria: vec![Criterion {
                id: "C1".to_string(),
                description: "Stage IV disease".to_string(),
                criterion_type: CriterionType::Stage,
                required: true,
            }],
            guidelines: Vec::new(),
        }
    }

    fn recommendation(action: RecommendedAction) -> Recommendation {
        Recommendation {
            recommendation: action,
            confidence: Confidence::High,
            complexity: Complexity::Low,
            primary_reasons: vec!["All 5 required policy criteria are met".to_string()],
            information_gaps: vec!["PD-L1 test result".to_string()],
            clinical_rationale: "Patient meets all required criteria.".to_string(),
            guideline_alignment: String::new(),
            risk_considerations: Vec::new(),
            alternative_options: Vec::new(),
        }
    }

    #[test]
    fn test_approval_letters() {
        let letters = draft_letters(&policy(), &recommendation(RecommendedAction::Approve));
        assert!(letters.provider_letter.contains("DETERMINATION: APPROVED"));
        assert!(letters.provider_letter.contains("Keytruda (Pembrolizumab)"));
        assert!(letters.member_letter.contains("DECISION: APPROVED"));
        assert!(letters.member_letter.contains("Good news!"));
    }

    #[test]
    fn test_denial_letters_include_appeal_rights() {
        let letters = draft_letters(&policy(), &recommendation(RecommendedAction::Deny));
        assert!(letters.provider_letter.contains("DETERMINATION: DENIED"));
        assert!(letters.provider_letter.contains("APPEAL RIGHTS"));
        assert!(letters
            .member_letter
            .contains("NOT APPROVED AT THIS TIME"));
        assert!(letters.member_letter.contains("HOW TO APPEAL"));
    }

    #[test]
    fn test_pend_letters_list_information_gaps() {
        let letters = draft_letters(&policy(), &recommendation(RecommendedAction::Pend));
        assert!(letters
            .provider_letter
            .contains("PENDED FOR ADDITIONAL INFORMATION"));
        assert!(letters.provider_letter.contains("- PD-L1 test result"));
        assert!(letters.member_letter.contains("WE NEED MORE INFORMATION"));
    }

    #[test]
    fn test_empty_reasons_fall_back() {
        let mut rec = recommendation(RecommendedAction::Approve);
        rec.primary_reasons.clear();
        let letters = draft_letters(&policy(), &rec);
        assert!(letters.provider_letter.contains("- See clinical rationale"));
    }
}
