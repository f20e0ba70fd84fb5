//! Error handling for the FieldScore gateway
//!
//! `UpstreamError` covers every way the remote scoring/chat service can fail.
//! It never reaches a caller: the services recover from it locally. `AppError`
//! is what handlers surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::InputViolation;
use thiserror::Error;

use crate::services::Pipeline;

/// Failure talking to the remote predictor or assistant
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout
    #[error("request failed: {0}")]
    Transport(String),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    MalformedBody(String),
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("A {pipeline} request is already in progress")]
    ConcurrentRequestRejected { pipeline: Pipeline },

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<InputViolation> for AppError {
    fn from(violation: InputViolation) -> Self {
        AppError::Validation {
            field: violation.field.to_string(),
            message: violation.message.to_string(),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::ConcurrentRequestRejected { pipeline } => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "REQUEST_IN_PROGRESS".to_string(),
                    message: format!(
                        "A {} request is already in progress. Please wait for it to finish.",
                        pipeline
                    ),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: format!("{} {}", field, message),
                    field: Some(field.clone()),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("Error: {:?}", self),
            _ => tracing::debug!("Rejected request: {}", self),
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers and services
pub type AppResult<T> = Result<T, AppError>;
