//! Programmatic schema initialization
//!
//! Three tables: coverage policies, PA cases, and the case audit trail.
//! Structured payloads (criteria, guidelines, extracted data, evaluations,
//! recommendation) are JSON stored as TEXT.

use sqlx::SqlitePool;

use crate::error::DatabaseError;

/// Creates all tables if they do not already exist. Idempotent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS policies (
            id TEXT PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            drug_name TEXT NOT NULL,
            indication TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            criteria TEXT NOT NULL,
            guidelines TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cases (
            id TEXT PRIMARY KEY,
            case_number TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            raw_text TEXT NOT NULL,
            policy_id TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            extracted_data TEXT,
            criteria_evaluation TEXT,
            recommendation TEXT,
            provider_letter TEXT,
            member_letter TEXT,
            complexity TEXT,
            final_decision TEXT,
            decision_notes TEXT,
            created_at TEXT NOT NULL,
            processed_at TEXT,
            decided_at TEXT,
            turnaround_minutes INTEGER,
            FOREIGN KEY (policy_id) REFERENCES policies(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS audit_logs (
            id TEXT PRIMARY KEY,
            case_id TEXT NOT NULL,
            action TEXT NOT NULL,
            details TEXT NOT NULL DEFAULT '',
            occurred_at TEXT NOT NULL,
            FOREIGN KEY (case_id) REFERENCES cases(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("schema initialized");
    Ok(())
}
