//! End-to-end route tests against a seeded in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use interface_api::{config::ApiConfig, create_router};
use serde_json::{json, Value};
use tower::util::ServiceExt;

async fn app() -> Router {
    let pool = test_utils::database::seeded_pool().await.unwrap();
    create_router(pool, ApiConfig::default())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn case_id_by_title(app: &Router, needle: &str) -> String {
    let (status, cases) = get_json(app, "/api/v1/cases").await;
    assert_eq!(status, StatusCode::OK);
    cases
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["title"].as_str().unwrap().contains(needle))
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = app().await;
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn policies_are_listed_with_criteria_counts() {
    let app = app().await;
    let (status, body) = get_json(&app, "/api/v1/policies").await;

    assert_eq!(status, StatusCode::OK);
    let policies = body.as_array().unwrap();
    assert_eq!(policies.len(), 2);

    let keytruda = policies
        .iter()
        .find(|p| p["code"] == "POL-ONC-001")
        .unwrap();
    assert_eq!(keytruda["criteria_count"], 5);
}

#[tokio::test]
async fn policy_detail_includes_criteria_and_guidelines() {
    let app = app().await;
    let (_, policies) = get_json(&app, "/api/v1/policies").await;
    let id = policies[0]["id"].as_str().unwrap().to_string();

    let (status, policy) = get_json(&app, &format!("/api/v1/policies/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!policy["criteria"].as_array().unwrap().is_empty());
    assert!(!policy["guidelines"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn case_queue_lists_seeded_cases_as_pending() {
    let app = app().await;
    let (status, cases) = get_json(&app, "/api/v1/cases").await;

    assert_eq!(status, StatusCode::OK);
    let cases = cases.as_array().unwrap();
    assert_eq!(cases.len(), 5);
    assert!(cases.iter().all(|c| c["status"] == "pending"));
    assert!(cases.iter().all(|c| !c["drug_name"].as_str().unwrap().is_empty()));
}

#[tokio::test]
async fn unknown_case_returns_not_found() {
    let app = app().await;
    let (status, body) = get_json(
        &app,
        "/api/v1/cases/00000000-0000-0000-0000-000000000099",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn processing_a_clean_case_yields_an_approval_recommendation() {
    let app = app().await;
    let id = case_id_by_title(&app, "High PD-L1").await;

    let (status, body) = post_json(&app, &format!("/api/v1/cases/{}/process", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let (status, case) = get_json(&app, &format!("/api/v1/cases/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(case["status"], "processed");
    assert_eq!(case["complexity"], "low");
    assert_eq!(case["recommendation"]["recommendation"], "approve");
    assert!(case["provider_letter"]
        .as_str()
        .unwrap()
        .contains("DETERMINATION: APPROVED"));

    let trail = case["audit_trail"].as_array().unwrap();
    assert_eq!(trail.len(), 6);
    let actions: Vec<&str> = trail.iter().map(|e| e["action"].as_str().unwrap()).collect();
    assert!(actions.contains(&"processing_started"));
    assert!(actions.contains(&"processing_completed"));
}

#[tokio::test]
async fn egfr_mutation_case_is_recommended_for_denial() {
    let app = app().await;
    let id = case_id_by_title(&app, "EGFR Mutation").await;

    let (status, _) = post_json(&app, &format!("/api/v1/cases/{}/process", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, case) = get_json(&app, &format!("/api/v1/cases/{}", id)).await;
    assert_eq!(case["complexity"], "high");
    assert_eq!(case["recommendation"]["recommendation"], "deny");
}

#[tokio::test]
async fn decision_finalizes_a_processed_case() {
    let app = app().await;
    let id = case_id_by_title(&app, "High PD-L1").await;
    post_json(&app, &format!("/api/v1/cases/{}/process", id), json!({})).await;

    let (status, case) = post_json(
        &app,
        &format!("/api/v1/cases/{}/decision", id),
        json!({
            "final_decision": "approve",
            "decision_notes": "Concur with recommendation",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(case["status"], "decided");
    assert_eq!(case["final_decision"], "approve");
    assert!(case["turnaround_minutes"].is_i64());
    let actions: Vec<&str> = case["audit_trail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["action"].as_str().unwrap())
        .collect();
    assert!(actions.contains(&"decision_finalized"));
}

#[tokio::test]
async fn decision_letters_can_be_overridden() {
    let app = app().await;
    let id = case_id_by_title(&app, "High PD-L1").await;
    post_json(&app, &format!("/api/v1/cases/{}/process", id), json!({})).await;

    let (status, case) = post_json(
        &app,
        &format!("/api/v1/cases/{}/decision", id),
        json!({
            "final_decision": "approve",
            "provider_letter": "Edited provider letter",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(case["provider_letter"], "Edited provider letter");
    // Member letter keeps the drafted version
    assert!(case["member_letter"].as_str().unwrap().contains("APPROVED"));
}

#[tokio::test]
async fn processing_twice_is_a_conflict_and_leaves_the_trail_untouched() {
    let app = app().await;
    let id = case_id_by_title(&app, "High PD-L1").await;
    post_json(&app, &format!("/api/v1/cases/{}/process", id), json!({})).await;

    let (_, case) = get_json(&app, &format!("/api/v1/cases/{}", id)).await;
    let trail_before = case["audit_trail"].as_array().unwrap().len();

    let (status, body) = post_json(&app, &format!("/api/v1/cases/{}/process", id), json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    // A rejected reprocess must not record any processing events
    let (_, case) = get_json(&app, &format!("/api/v1/cases/{}", id)).await;
    assert_eq!(case["audit_trail"].as_array().unwrap().len(), trail_before);
}

#[tokio::test]
async fn deciding_a_pending_case_is_a_conflict() {
    let app = app().await;
    let id = case_id_by_title(&app, "High PD-L1").await;

    let (status, _) = post_json(
        &app,
        &format!("/api/v1/cases/{}/decision", id),
        json!({ "final_decision": "approve" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_decision_value_is_a_bad_request() {
    let app = app().await;
    let id = case_id_by_title(&app, "High PD-L1").await;

    let (status, body) = post_json(
        &app,
        &format!("/api/v1/cases/{}/decision", id),
        json!({ "final_decision": "escalate" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn metrics_reflect_the_review_flow() {
    let app = app().await;
    let id = case_id_by_title(&app, "High PD-L1").await;
    post_json(&app, &format!("/api/v1/cases/{}/process", id), json!({})).await;
    post_json(
        &app,
        &format!("/api/v1/cases/{}/decision", id),
        json!({ "final_decision": "approve" }),
    )
    .await;

    let (status, metrics) = get_json(&app, "/api/v1/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(metrics["total"], 5);
    assert_eq!(metrics["pending"], 4);
    assert_eq!(metrics["decided"], 1);
    assert_eq!(metrics["decisions"]["approve"], 1);
    assert_eq!(metrics["complexity_distribution"]["low"], 1);
}
