//! Policy DTOs

use domain_policy::Policy;
use serde::Serialize;

/// Compact policy view for the list endpoint. The detail endpoint returns
/// the full policy document, criteria and guidelines included.
#[derive(Debug, Serialize)]
pub struct PolicySummary {
    pub id: String,
    pub code: String,
    pub drug_name: String,
    pub indication: String,
    pub criteria_count: usize,
}

impl From<&Policy> for PolicySummary {
    fn from(policy: &Policy) -> Self {
        Self {
            id: policy.id.as_uuid().to_string(),
            code: policy.code.clone(),
            drug_name: policy.drug_name.clone(),
            indication: policy.indication.clone(),
            criteria_count: policy.criteria.len(),
        }
    }
}
