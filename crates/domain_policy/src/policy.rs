//! Coverage policy documents

use core_kernel::PolicyId;
use serde::{Deserialize, Serialize};

use crate::criteria::Criterion;
use crate::error::PolicyError;

/// A clinical guideline citation attached to a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guideline {
    /// Guideline source, e.g. "NCCN Guidelines"
    pub source: String,
    /// Relevant guideline text
    pub text: String,
}

/// A drug coverage policy: the criterion list plus supporting guidelines.
///
/// Policies are immutable once defined; the evaluation engine only reads
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    /// Human-readable policy code, e.g. "POL-ONC-001"
    pub code: String,
    pub drug_name: String,
    pub indication: String,
    #[serde(default)]
    pub description: String,
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub guidelines: Vec<Guideline>,
}

impl Policy {
    /// Decodes a policy from its stored JSON document.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Policy =
            serde_json::from_str(json).map_err(|e| PolicyError::ParseError(e.to_string()))?;

        if policy.criteria.is_empty() {
            return Err(PolicyError::MissingField("criteria".to_string()));
        }

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_json() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "code": "POL-ONC-001",
            "drug_name": "Keytruda (Pembrolizumab)",
            "indication": "Non-Small Cell Lung Cancer (NSCLC)",
            "criteria": [
                { "id": "C1", "description": "Stage IV NSCLC", "type": "stage", "required": true }
            ]
        }"#;

        let policy = Policy::from_json(json).unwrap();
        assert_eq!(policy.code, "POL-ONC-001");
        assert_eq!(policy.criteria.len(), 1);
        assert!(policy.guidelines.is_empty());
    }

    #[test]
    fn test_policy_without_criteria_is_rejected() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "code": "POL-ONC-009",
            "drug_name": "Drug",
            "indication": "Indication",
            "criteria": []
        }"#;

        assert!(matches!(
            Policy::from_json(json),
            Err(PolicyError::MissingField(_))
        ));
    }
}
