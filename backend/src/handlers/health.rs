//! Health and status handlers

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstream: String,
}

/// Busy state of both request gates
#[derive(Debug, Serialize)]
pub struct PipelineStatus {
    pub assessment_busy: bool,
    pub chat_busy: bool,
}

/// Root endpoint
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "FieldScore AI gateway is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/v1/assess": "POST - Farm risk assessment",
            "/api/v1/chat": "POST - Ask the FieldScore assistant",
            "/api/v1/status": "GET - Pipeline busy state",
            "/health": "GET - Health check"
        }
    }))
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.config.upstream.base_url.clone(),
    })
}

/// Report whether each pipeline has a request in flight
pub async fn pipeline_status(State(state): State<AppState>) -> Json<PipelineStatus> {
    Json(PipelineStatus {
        assessment_busy: state.assessments.is_busy(),
        chat_busy: state.chat.is_busy(),
    })
}
