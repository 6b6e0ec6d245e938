//! PA case repository
//!
//! Cases are written in three steps matching the aggregate lifecycle:
//! insert at intake, update with pipeline outputs at processing, update
//! with the determination at decision time.

use chrono::{DateTime, Utc};
use core_kernel::{CaseData, CaseId, PolicyId};
use domain_case::{CaseStatus, FinalDecision, PaCase};
use domain_policy::{Complexity, CriterionEvaluation};
use domain_review::Recommendation;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// A case joined with the drug and indication of its policy.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    pub case: PaCase,
    pub drug_name: String,
    pub indication: String,
}

#[derive(Debug, sqlx::FromRow)]
struct CaseRow {
    id: String,
    case_number: String,
    title: String,
    raw_text: String,
    policy_id: String,
    status: String,
    extracted_data: Option<String>,
    criteria_evaluation: Option<String>,
    recommendation: Option<String>,
    provider_letter: Option<String>,
    member_letter: Option<String>,
    complexity: Option<String>,
    final_decision: Option<String>,
    decision_notes: Option<String>,
    created_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
    decided_at: Option<DateTime<Utc>>,
    turnaround_minutes: Option<i64>,
    drug_name: Option<String>,
    indication: Option<String>,
}

fn corrupt(detail: String) -> DatabaseError {
    DatabaseError::Corrupt(serde::de::Error::custom(detail))
}

impl CaseRow {
    fn into_record(self) -> Result<CaseRecord, DatabaseError> {
        let id = Uuid::parse_str(&self.id).map_err(|e| corrupt(e.to_string()))?;
        let policy_id =
            Uuid::parse_str(&self.policy_id).map_err(|e| corrupt(e.to_string()))?;
        let status: CaseStatus = self.status.parse().map_err(
            |e: domain_case::CaseError| corrupt(e.to_string()),
        )?;

        let extracted_data: Option<CaseData> = self
            .extracted_data
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;
        let criteria_evaluation: Vec<CriterionEvaluation> = self
            .criteria_evaluation
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?
            .unwrap_or_default();
        let recommendation: Option<Recommendation> = self
            .recommendation
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;
        let complexity: Option<Complexity> = self
            .complexity
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e: domain_policy::PolicyError| corrupt(e.to_string()))?;
        let final_decision: Option<FinalDecision> = self
            .final_decision
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e: domain_case::CaseError| corrupt(e.to_string()))?;

        Ok(CaseRecord {
            case: PaCase {
                id: CaseId::from(id),
                case_number: self.case_number,
                title: self.title,
                raw_text: self.raw_text,
                policy_id: PolicyId::from(policy_id),
                status,
                extracted_data,
                criteria_evaluation,
                recommendation,
                provider_letter: self.provider_letter,
                member_letter: self.member_letter,
                complexity,
                final_decision,
                decision_notes: self.decision_notes,
                created_at: self.created_at,
                processed_at: self.processed_at,
                decided_at: self.decided_at,
                turnaround_minutes: self.turnaround_minutes,
            },
            drug_name: self.drug_name.unwrap_or_default(),
            indication: self.indication.unwrap_or_default(),
        })
    }
}

const CASE_COLUMNS: &str = "c.id, c.case_number, c.title, c.raw_text, c.policy_id, c.status, \
     c.extracted_data, c.criteria_evaluation, c.recommendation, c.provider_letter, \
     c.member_letter, c.complexity, c.final_decision, c.decision_notes, c.created_at, \
     c.processed_at, c.decided_at, c.turnaround_minutes, p.drug_name, p.indication";

/// Repository for PA cases
#[derive(Debug, Clone)]
pub struct CaseRepository {
    pool: SqlitePool,
}

impl CaseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a freshly created pending case.
    pub async fn insert(&self, case: &PaCase) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO cases (id, case_number, title, raw_text, policy_id, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(case.id.as_uuid().to_string())
        .bind(&case.case_number)
        .bind(&case.title)
        .bind(&case.raw_text)
        .bind(case.policy_id.as_uuid().to_string())
        .bind(case.status.to_string())
        .bind(case.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_by_id(&self, case_id: CaseId) -> Result<CaseRecord, DatabaseError> {
        let query = format!(
            "SELECT {CASE_COLUMNS} FROM cases c LEFT JOIN policies p ON c.policy_id = p.id \
             WHERE c.id = ?"
        );
        let row = sqlx::query_as::<_, CaseRow>(&query)
            .bind(case_id.as_uuid().to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Case", case_id))?;

        row.into_record()
    }

    /// Lists all cases, newest first.
    pub async fn list(&self) -> Result<Vec<CaseRecord>, DatabaseError> {
        let query = format!(
            "SELECT {CASE_COLUMNS} FROM cases c LEFT JOIN policies p ON c.policy_id = p.id \
             ORDER BY c.created_at DESC"
        );
        let rows = sqlx::query_as::<_, CaseRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CaseRow::into_record).collect()
    }

    /// Persists the pipeline outputs attached by `PaCase::record_processing`.
    pub async fn update_processing(&self, case: &PaCase) -> Result<(), DatabaseError> {
        let extracted_data = case
            .extracted_data
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let recommendation = case
            .recommendation
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
            UPDATE cases SET
                status = ?,
                extracted_data = ?,
                criteria_evaluation = ?,
                recommendation = ?,
                provider_letter = ?,
                member_letter = ?,
                complexity = ?,
                processed_at = ?
            WHERE id = ?
            "#,
        )
        .bind(case.status.to_string())
        .bind(extracted_data)
        .bind(serde_json::to_string(&case.criteria_evaluation)?)
        .bind(recommendation)
        .bind(&case.provider_letter)
        .bind(&case.member_letter)
        .bind(case.complexity.map(|c| c.to_string()))
        .bind(case.processed_at)
        .bind(case.id.as_uuid().to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persists the determination recorded by `PaCase::record_decision`.
    /// Letters may have been edited by the reviewer before finalizing.
    pub async fn update_decision(&self, case: &PaCase) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            UPDATE cases SET
                status = ?,
                final_decision = ?,
                decision_notes = ?,
                provider_letter = ?,
                member_letter = ?,
                decided_at = ?,
                turnaround_minutes = ?
            WHERE id = ?
            "#,
        )
        .bind(case.status.to_string())
        .bind(case.final_decision.map(|d| d.to_string()))
        .bind(&case.decision_notes)
        .bind(&case.provider_letter)
        .bind(&case.member_letter)
        .bind(case.decided_at)
        .bind(case.turnaround_minutes)
        .bind(case.id.as_uuid().to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
