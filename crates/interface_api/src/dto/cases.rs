//! Case DTOs

use chrono::{DateTime, Utc};
use domain_case::{AuditAction, AuditEvent, CaseStatus, FinalDecision, PaCase};
use domain_policy::Complexity;
use infra_db::repositories::CaseRecord;
use serde::{Deserialize, Serialize};

/// Compact case view for the queue list.
#[derive(Debug, Serialize)]
pub struct CaseSummary {
    pub id: String,
    pub case_number: String,
    pub title: String,
    pub drug_name: String,
    pub indication: String,
    pub status: CaseStatus,
    pub complexity: Option<Complexity>,
    pub final_decision: Option<FinalDecision>,
    pub created_at: DateTime<Utc>,
}

impl From<&CaseRecord> for CaseSummary {
    fn from(record: &CaseRecord) -> Self {
        Self {
            id: record.case.id.as_uuid().to_string(),
            case_number: record.case.case_number.clone(),
            title: record.case.title.clone(),
            drug_name: record.drug_name.clone(),
            indication: record.indication.clone(),
            status: record.case.status,
            complexity: record.case.complexity,
            final_decision: record.case.final_decision,
            created_at: record.case.created_at,
        }
    }
}

/// One audit trail entry as exposed over the API.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub action: AuditAction,
    pub details: String,
    pub occurred_at: DateTime<Utc>,
}

impl From<AuditEvent> for AuditEntry {
    fn from(event: AuditEvent) -> Self {
        Self {
            action: event.action,
            details: event.details,
            occurred_at: event.occurred_at,
        }
    }
}

/// Full case view: the aggregate plus policy context and the audit trail.
#[derive(Debug, Serialize)]
pub struct CaseDetail {
    #[serde(flatten)]
    pub case: PaCase,
    pub drug_name: String,
    pub indication: String,
    pub audit_trail: Vec<AuditEntry>,
}

impl CaseDetail {
    pub fn new(record: CaseRecord, trail: Vec<AuditEvent>) -> Self {
        Self {
            case: record.case,
            drug_name: record.drug_name,
            indication: record.indication,
            audit_trail: trail.into_iter().map(AuditEntry::from).collect(),
        }
    }
}

/// Response for the process endpoint.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub status: String,
    pub message: String,
}

/// Medical Director decision submission. Letters are optional overrides
/// of the drafted versions.
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub final_decision: String,
    #[serde(default)]
    pub decision_notes: Option<String>,
    #[serde(default)]
    pub provider_letter: Option<String>,
    #[serde(default)]
    pub member_letter: Option<String>,
}
