//! HTTP handlers for farm risk assessment

use axum::{extract::State, response::IntoResponse, Json};
use shared::{is_expected_ndvi, validate_farm_input, FarmAssessmentInput};

use crate::error::AppResult;
use crate::handlers::SOURCE_HEADER;
use crate::AppState;

/// Assess a farm's loan risk
/// POST /api/v1/assess
pub async fn assess_farm(
    State(state): State<AppState>,
    Json(input): Json<FarmAssessmentInput>,
) -> AppResult<impl IntoResponse> {
    validate_farm_input(&input)?;

    if !is_expected_ndvi(input.ndvi_mean_12mo) {
        tracing::debug!(
            ndvi_mean_12mo = input.ndvi_mean_12mo,
            "NDVI outside 0..=1, scoring anyway"
        );
    }

    let (result, source) = state.assessments.assess_with_source(&input).await?;

    tracing::info!(
        crop_type = %input.crop_type,
        risk_score = ?result.get("risk_score"),
        category = ?result.get("risk_category"),
        source = source.as_str(),
        "Farm assessed"
    );

    Ok(([(SOURCE_HEADER, source.as_str())], Json(result)))
}
