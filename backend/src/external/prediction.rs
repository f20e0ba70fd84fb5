//! Remote prediction client
//!
//! Client for the model-serving `/api/predict` endpoint. A successful body is
//! only checked for being JSON; its fields are passed on untouched.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::FarmAssessmentInput;

use crate::error::UpstreamError;

/// Something that can produce a risk assessment remotely
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    async fn predict(&self, input: &FarmAssessmentInput) -> Result<Value, UpstreamError>;
}

/// Client for the remote prediction service
#[derive(Clone)]
pub struct PredictionClient {
    endpoint: String,
    http_client: Client,
}

impl PredictionClient {
    /// Create a new prediction client against `base_url`
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            endpoint: super::endpoint(base_url, "/api/predict"),
            http_client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionBackend for PredictionClient {
    /// Send farm features for scoring; the payload is returned as parsed
    async fn predict(&self, input: &FarmAssessmentInput) -> Result<Value, UpstreamError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(input)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedBody(e.to_string()))?;

        Ok(result)
    }
}
