//! Policy handlers

use axum::extract::{Path, State};
use axum::Json;
use core_kernel::PolicyId;
use domain_policy::Policy;
use infra_db::repositories::PolicyRepository;
use uuid::Uuid;

use crate::dto::policies::PolicySummary;
use crate::error::ApiError;
use crate::AppState;

/// Lists all coverage policies.
pub async fn list_policies(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolicySummary>>, ApiError> {
    let policies = PolicyRepository::new(state.pool.clone()).list().await?;
    Ok(Json(policies.iter().map(PolicySummary::from).collect()))
}

/// Gets a full policy document by id.
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Policy>, ApiError> {
    let policy = PolicyRepository::new(state.pool.clone())
        .get_by_id(PolicyId::from(id))
        .await?;
    Ok(Json(policy))
}
