//! Audit trail repository

use chrono::{DateTime, Utc};
use core_kernel::{AuditEventId, CaseId};
use domain_case::{AuditAction, AuditEvent};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, sqlx::FromRow)]
struct AuditRow {
    id: String,
    case_id: String,
    action: String,
    details: String,
    occurred_at: DateTime<Utc>,
}

impl AuditRow {
    fn into_event(self) -> Result<AuditEvent, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|_| DatabaseError::not_found("AuditEvent", &self.id))?;
        let case_id = Uuid::parse_str(&self.case_id)
            .map_err(|_| DatabaseError::not_found("Case", &self.case_id))?;
        let action: AuditAction = self
            .action
            .parse()
            .map_err(|e: domain_case::CaseError| {
                DatabaseError::Corrupt(serde::de::Error::custom(e.to_string()))
            })?;

        Ok(AuditEvent {
            id: AuditEventId::from(id),
            case_id: CaseId::from(case_id),
            action,
            details: self.details,
            occurred_at: self.occurred_at,
        })
    }
}

/// Repository for the case audit trail. Entries are append-only.
#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: SqlitePool,
}

impl AuditRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn append(&self, event: &AuditEvent) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO audit_logs (id, case_id, action, details, occurred_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(event.id.as_uuid().to_string())
        .bind(event.case_id.as_uuid().to_string())
        .bind(event.action.to_string())
        .bind(&event.details)
        .bind(event.occurred_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns a case's audit trail, newest first.
    pub async fn for_case(&self, case_id: CaseId) -> Result<Vec<AuditEvent>, DatabaseError> {
        let rows = sqlx::query_as::<_, AuditRow>(
            "SELECT id, case_id, action, details, occurred_at
             FROM audit_logs WHERE case_id = ? ORDER BY occurred_at DESC",
        )
        .bind(case_id.as_uuid().to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AuditRow::into_event).collect()
    }
}
