//! Local risk scorer
//!
//! Deterministic stand-in for the remote prediction model. A linear additive
//! model around a base score of 50:
//!
//! ```text
//! score = 50
//!       + (ndvi_mean_12mo - 0.5) * 50
//!       + ndvi_slope * 300
//!       - min(rainfall_deficit_30day / 3, 20)
//!       - coefficient_of_variation * 30
//!       + ndvi_anomaly_zscore * 5
//! ```
//!
//! The result is clamped to 0..=100 and rounded. Inputs are not validated
//! here; a NaN feature saturates to a score of 0.

use crate::models::{
    DroughtStatus, FarmAssessmentInput, FeatureLabels, RiskAssessmentResult, RiskCategory,
    Stability, Trend, VegetationHealth,
};

const BASE_SCORE: f64 = 50.0;
const MAX_RAINFALL_PENALTY: f64 = 20.0;

/// Lowest confidence reported by the local scorer
pub const MIN_LOCAL_CONFIDENCE: f64 = 0.85;
/// Width of the local confidence band, `[0.85, 0.95)`
pub const LOCAL_CONFIDENCE_SPREAD: f64 = 0.10;
/// Largest confidence the local scorer reports, just under 0.95
pub const MAX_LOCAL_CONFIDENCE: f64 = MIN_LOCAL_CONFIDENCE + LOCAL_CONFIDENCE_SPREAD - f64::EPSILON;

/// Unclamped linear score
pub fn raw_risk_score(input: &FarmAssessmentInput) -> f64 {
    let mut score = BASE_SCORE;

    score += (input.ndvi_mean_12mo - 0.5) * 50.0;
    score += input.ndvi_slope * 300.0;
    score -= (input.rainfall_deficit_30day / 3.0).min(MAX_RAINFALL_PENALTY);
    score -= input.coefficient_of_variation * 30.0;
    score += input.ndvi_anomaly_zscore * 5.0;

    score
}

/// Final 0-100 risk score
pub fn risk_score(input: &FarmAssessmentInput) -> u8 {
    // `as` saturates and maps NaN to 0
    raw_risk_score(input).clamp(0.0, 100.0).round() as u8
}

/// Interpret the raw features independently of the score
pub fn interpret_features(input: &FarmAssessmentInput) -> FeatureLabels {
    FeatureLabels {
        ndvi_health: VegetationHealth::from_ndvi_mean(input.ndvi_mean_12mo),
        trend: Trend::from_ndvi_slope(input.ndvi_slope),
        drought_status: DroughtStatus::from_rainfall_deficit(input.rainfall_deficit_30day),
        stability: Stability::from_coefficient_of_variation(input.coefficient_of_variation),
    }
}

/// Map a uniform draw in `[0, 1)` onto the local confidence band
///
/// Draws outside `[0, 1)`, NaN included, count as 0.
pub fn confidence_from_draw(draw: f64) -> f64 {
    let draw = if (0.0..1.0).contains(&draw) {
        draw
    } else {
        0.0
    };
    // Draws within an ulp of 1 round up to the band's open end
    (MIN_LOCAL_CONFIDENCE + draw * LOCAL_CONFIDENCE_SPREAD).min(MAX_LOCAL_CONFIDENCE)
}

/// Score a farm using a caller-supplied random draw for the confidence
pub fn score_with_draw(input: &FarmAssessmentInput, draw: f64) -> RiskAssessmentResult {
    let risk_score = risk_score(input);
    let category = RiskCategory::from_score(risk_score);

    RiskAssessmentResult {
        risk_score,
        risk_category: category,
        category_class: category.css_class().to_string(),
        recommendation: category.recommendation().to_string(),
        confidence: confidence_from_draw(draw),
        features: interpret_features(input),
    }
}

/// Score a farm locally
#[cfg(feature = "rand")]
pub fn score(input: &FarmAssessmentInput) -> RiskAssessmentResult {
    score_with_draw(input, rand::random::<f64>())
}
