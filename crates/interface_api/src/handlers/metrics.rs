//! Review metrics handler

use axum::extract::State;
use axum::Json;
use domain_case::CaseMetrics;
use infra_db::repositories::MetricsRepository;

use crate::error::ApiError;
use crate::AppState;

/// Returns queue and turnaround metrics for the review dashboard.
pub async fn get_metrics(State(state): State<AppState>) -> Result<Json<CaseMetrics>, ApiError> {
    let metrics = MetricsRepository::new(state.pool.clone()).collect().await?;
    Ok(Json(metrics))
}
