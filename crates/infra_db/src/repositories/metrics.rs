//! Review metrics queries

use domain_case::CaseMetrics;
use sqlx::SqlitePool;

use crate::error::DatabaseError;

/// Aggregate queries for the review dashboard
#[derive(Debug, Clone)]
pub struct MetricsRepository {
    pool: SqlitePool,
}

impl MetricsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn count_status(&self, status: &str) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cases WHERE status = ?")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn collect(&self) -> Result<CaseMetrics, DatabaseError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cases")
            .fetch_one(&self.pool)
            .await?;
        let pending = self.count_status("pending").await?;
        let processed = self.count_status("processed").await?;
        let decided = self.count_status("decided").await?;

        let avg_turnaround_minutes: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(turnaround_minutes) FROM cases WHERE turnaround_minutes IS NOT NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        let decision_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT final_decision, COUNT(*) FROM cases
             WHERE final_decision IS NOT NULL GROUP BY final_decision",
        )
        .fetch_all(&self.pool)
        .await?;

        let complexity_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT complexity, COUNT(*) FROM cases
             WHERE complexity IS NOT NULL GROUP BY complexity",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(CaseMetrics {
            total,
            pending,
            processed,
            decided,
            avg_turnaround_minutes,
            decisions: decision_rows.into_iter().collect(),
            complexity_distribution: complexity_rows.into_iter().collect(),
        })
    }
}
