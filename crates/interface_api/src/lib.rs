//! HTTP API Layer
//!
//! REST API for the PA co-pilot using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: policies, cases, metrics, health
//! - **DTOs**: request/response shapes decoupled from the domain types
//! - **Error handling**: consistent JSON error responses
//!
//! The extraction mode is fixed at router construction: a configured API
//! key selects the live model extractor, otherwise the deterministic demo
//! extractor runs and the server makes no external calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(pool, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use domain_review::{CaseExtractor, DemoExtractor, OpenAiExtractor, ReviewMode, ReviewPipeline};
use infra_db::DatabasePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{cases, health, metrics, policies};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabasePool,
    pub config: ApiConfig,
    pub mode: ReviewMode,
    pub pipeline: Arc<ReviewPipeline>,
}

/// Creates the main API router.
///
/// Selects the extractor from the configuration: live model extraction
/// when an API key is present, demo extraction otherwise.
pub fn create_router(pool: DatabasePool, config: ApiConfig) -> Router {
    let mode = ReviewMode::from_api_key(config.openai_api_key.as_deref());
    let extractor: Arc<dyn CaseExtractor> = match mode {
        ReviewMode::Live => Arc::new(OpenAiExtractor::new(
            config.openai_base_url.clone(),
            config.openai_model.clone(),
            config.openai_api_key.clone().unwrap_or_default(),
        )),
        ReviewMode::Demo => Arc::new(DemoExtractor::new()),
    };
    tracing::info!(?mode, "extraction mode selected");

    let state = AppState {
        pool,
        config,
        mode,
        pipeline: Arc::new(ReviewPipeline::new(extractor)),
    };

    let api_routes = Router::new()
        .route("/policies", get(policies::list_policies))
        .route("/policies/:id", get(policies::get_policy))
        .route("/cases", get(cases::list_cases))
        .route("/cases/:id", get(cases::get_case))
        .route("/cases/:id/process", post(cases::process_case))
        .route("/cases/:id/decision", post(cases::decide_case))
        .route("/metrics", get(metrics::get_metrics));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
