//! Risk assessment service
//!
//! Asks the remote predictor first and falls back to the local scorer when
//! it cannot be reached, answers with an error status, or returns a body
//! that does not parse. A remote payload is handed back exactly as received;
//! the local result is serialized into the same JSON shape.

use serde_json::Value;
use std::sync::Arc;

use shared::FarmAssessmentInput;

use crate::error::{AppError, AppResult};
use crate::external::PredictionBackend;
use crate::services::gate::{Pipeline, RequestGate};
use crate::services::ResultSource;

/// Risk assessment pipeline
#[derive(Clone)]
pub struct RiskAssessmentService {
    backend: Arc<dyn PredictionBackend>,
    gate: RequestGate,
}

impl RiskAssessmentService {
    /// Create a new RiskAssessmentService instance
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        Self {
            backend,
            gate: RequestGate::new(Pipeline::Assessment),
        }
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Assess a farm, remotely if possible
    pub async fn assess(&self, input: &FarmAssessmentInput) -> AppResult<Value> {
        self.assess_with_source(input).await.map(|(result, _)| result)
    }

    /// Assess a farm and report which path produced the result
    pub async fn assess_with_source(
        &self,
        input: &FarmAssessmentInput,
    ) -> AppResult<(Value, ResultSource)> {
        let _guard = self.gate.try_enter()?;

        match self.backend.predict(input).await {
            Ok(result) => {
                tracing::debug!(
                    risk_score = ?result.get("risk_score"),
                    "Remote prediction received"
                );
                Ok((result, ResultSource::Remote))
            }
            Err(e) => {
                tracing::warn!(
                    pipeline = %Pipeline::Assessment,
                    error = %e,
                    "Prediction API not available, using local risk scorer"
                );
                let local = serde_json::to_value(shared::score(input)).map_err(|e| {
                    AppError::Internal(format!("Failed to encode local score: {}", e))
                })?;
                Ok((local, ResultSource::Local))
            }
        }
    }
}
