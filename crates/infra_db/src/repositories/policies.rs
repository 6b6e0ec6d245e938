//! Coverage policy repository

use core_kernel::PolicyId;
use domain_policy::{Criterion, Guideline, Policy};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, sqlx::FromRow)]
struct PolicyRow {
    id: String,
    code: String,
    drug_name: String,
    indication: String,
    description: String,
    criteria: String,
    guidelines: String,
}

impl PolicyRow {
    fn into_policy(self) -> Result<Policy, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|_| DatabaseError::not_found("Policy", &self.id))?;
        let criteria: Vec<Criterion> = serde_json::from_str(&self.criteria)?;
        let guidelines: Vec<Guideline> = serde_json::from_str(&self.guidelines)?;

        Ok(Policy {
            id: PolicyId::from(id),
            code: self.code,
            drug_name: self.drug_name,
            indication: self.indication,
            description: self.description,
            criteria,
            guidelines,
        })
    }
}

/// Repository for coverage policies
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: SqlitePool,
}

impl PolicyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts or replaces a policy by id.
    pub async fn upsert(&self, policy: &Policy) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO policies (id, code, drug_name, indication, description, criteria, guidelines)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(policy.id.as_uuid().to_string())
        .bind(&policy.code)
        .bind(&policy.drug_name)
        .bind(&policy.indication)
        .bind(&policy.description)
        .bind(serde_json::to_string(&policy.criteria)?)
        .bind(serde_json::to_string(&policy.guidelines)?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_by_id(&self, policy_id: PolicyId) -> Result<Policy, DatabaseError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            "SELECT id, code, drug_name, indication, description, criteria, guidelines
             FROM policies WHERE id = ?",
        )
        .bind(policy_id.as_uuid().to_string())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Policy", policy_id))?;

        row.into_policy()
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Policy, DatabaseError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            "SELECT id, code, drug_name, indication, description, criteria, guidelines
             FROM policies WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Policy", code))?;

        row.into_policy()
    }

    pub async fn list(&self) -> Result<Vec<Policy>, DatabaseError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            "SELECT id, code, drug_name, indication, description, criteria, guidelines
             FROM policies ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PolicyRow::into_policy).collect()
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM policies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
