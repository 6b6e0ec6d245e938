//! Case handlers
//!
//! The process endpoint runs the review pipeline and appends an audit
//! event after each stage, so a partially failed run still leaves a
//! trail up to the failing stage.

use axum::extract::{Path, State};
use axum::Json;
use core_kernel::CaseId;
use domain_case::{AuditAction, AuditEvent, CaseError, CaseStatus, FinalDecision, PaCase};
use infra_db::repositories::{AuditRepository, CaseRepository, PolicyRepository};
use uuid::Uuid;

use crate::dto::cases::{CaseDetail, CaseSummary, DecisionRequest, ProcessResponse};
use crate::error::ApiError;
use crate::AppState;

/// Lists the case queue, newest first.
pub async fn list_cases(
    State(state): State<AppState>,
) -> Result<Json<Vec<CaseSummary>>, ApiError> {
    let records = CaseRepository::new(state.pool.clone()).list().await?;
    Ok(Json(records.iter().map(CaseSummary::from).collect()))
}

/// Gets a case with its policy context and audit trail.
pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseDetail>, ApiError> {
    let case_id = CaseId::from(id);
    let record = CaseRepository::new(state.pool.clone())
        .get_by_id(case_id)
        .await?;
    let trail = AuditRepository::new(state.pool.clone())
        .for_case(case_id)
        .await?;

    Ok(Json(CaseDetail::new(record, trail)))
}

/// Runs the review pipeline on a pending case and persists the outputs.
pub async fn process_case(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let cases = CaseRepository::new(state.pool.clone());
    let audit = AuditRepository::new(state.pool.clone());

    let mut case: PaCase = cases.get_by_id(CaseId::from(id)).await?.case;

    // Reject before any audit append or pipeline work, so a conflicting
    // reprocess leaves the trail untouched.
    if !case.status.can_transition_to(CaseStatus::Processed) {
        return Err(CaseError::InvalidStateTransition {
            from: case.status,
            to: CaseStatus::Processed,
        }
        .into());
    }

    let policy = PolicyRepository::new(state.pool.clone())
        .get_by_id(case.policy_id)
        .await?;

    audit
        .append(&AuditEvent::new(
            case.id,
            AuditAction::ProcessingStarted,
            "AI processing initiated",
        ))
        .await?;

    let outcome = match state.pipeline.run(&case.raw_text, &policy).await {
        Ok(outcome) => outcome,
        Err(err) => {
            audit
                .append(&AuditEvent::new(
                    case.id,
                    AuditAction::ExtractionError,
                    err.to_string(),
                ))
                .await?;
            return Err(err.into());
        }
    };

    audit
        .append(&AuditEvent::new(
            case.id,
            AuditAction::CaseExtracted,
            "Clinical data extracted successfully",
        ))
        .await?;
    audit
        .append(&AuditEvent::new(
            case.id,
            AuditAction::CriteriaEvaluated,
            format!("Complexity: {}", outcome.complexity),
        ))
        .await?;
    audit
        .append(&AuditEvent::new(
            case.id,
            AuditAction::RecommendationGenerated,
            format!("AI suggests: {}", outcome.recommendation.recommendation),
        ))
        .await?;
    audit
        .append(&AuditEvent::new(
            case.id,
            AuditAction::LettersDrafted,
            "Provider and member letters generated",
        ))
        .await?;

    case.record_processing(outcome)?;
    cases.update_processing(&case).await?;

    audit
        .append(&AuditEvent::new(
            case.id,
            AuditAction::ProcessingCompleted,
            "Case ready for Medical Director review",
        ))
        .await?;

    Ok(Json(ProcessResponse {
        status: "success".to_string(),
        message: "Case processed successfully".to_string(),
    }))
}

/// Records the Medical Director's final determination.
pub async fn decide_case(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<CaseDetail>, ApiError> {
    let decision: FinalDecision = request.final_decision.parse()?;

    let case_id = CaseId::from(id);
    let cases = CaseRepository::new(state.pool.clone());
    let audit = AuditRepository::new(state.pool.clone());

    let mut case = cases.get_by_id(case_id).await?.case;
    case.record_decision(decision, request.decision_notes)?;
    if let Some(letter) = request.provider_letter {
        case.provider_letter = Some(letter);
    }
    if let Some(letter) = request.member_letter {
        case.member_letter = Some(letter);
    }
    cases.update_decision(&case).await?;

    audit
        .append(&AuditEvent::new(
            case_id,
            AuditAction::DecisionFinalized,
            format!("Medical Director decision: {}", decision),
        ))
        .await?;

    let record = cases.get_by_id(case_id).await?;
    let trail = audit.for_case(case_id).await?;
    Ok(Json(CaseDetail::new(record, trail)))
}
