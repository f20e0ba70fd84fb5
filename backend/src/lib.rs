//! FieldScore AI - Backend Gateway
//!
//! Fronts the remote farm risk predictor and assistant for browser clients.
//! Each pipeline falls back to the local deterministic logic in `shared`
//! whenever the remote service cannot answer.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::external::{ChatBackend, PredictionBackend};
use crate::services::{ChatService, RiskAssessmentService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assessments: RiskAssessmentService,
    pub chat: ChatService,
}

impl AppState {
    /// Wire both pipelines to their remote backends
    pub fn new(
        config: Config,
        predictor: Arc<dyn PredictionBackend>,
        assistant: Arc<dyn ChatBackend>,
    ) -> Self {
        let chat = ChatService::with_failure_policy(assistant, config.chat.failure_policy);
        Self {
            config: Arc::new(config),
            assessments: RiskAssessmentService::new(predictor),
            chat,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
