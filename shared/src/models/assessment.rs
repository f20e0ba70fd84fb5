//! Farm risk assessment models

use serde::{Deserialize, Serialize};

/// Farm features submitted for a loan risk assessment
///
/// Field names match the `/api/predict` wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmAssessmentInput {
    pub latitude: f64,
    pub longitude: f64,
    pub crop_type: String,
    pub farm_area_hectares: f64,
    /// 12-month average NDVI, expected in 0..=1
    pub ndvi_mean_12mo: f64,
    pub ndvi_slope: f64,
    pub ndvi_14day_delta: f64,
    pub ndvi_anomaly_zscore: f64,
    /// 30-day rainfall deficit in millimetres
    pub rainfall_deficit_30day: f64,
    /// NDVI coefficient of variation
    pub coefficient_of_variation: f64,
    /// Soil organic carbon (%)
    pub soil_organic_carbon: f64,
    pub loan_amount_usd: f64,
}

impl FarmAssessmentInput {
    /// Demo maize farm near Nairobi used by the "fill sample data" control
    pub fn sample() -> Self {
        Self {
            latitude: -1.2921,
            longitude: 36.8219,
            crop_type: "maize".to_string(),
            farm_area_hectares: 2.5,
            ndvi_mean_12mo: 0.72,
            ndvi_slope: 0.015,
            ndvi_14day_delta: -0.02,
            ndvi_anomaly_zscore: -0.35,
            rainfall_deficit_30day: 15.2,
            coefficient_of_variation: 0.18,
            soil_organic_carbon: 1.8,
            loan_amount_usd: 1500.0,
        }
    }

    /// All numeric fields paired with their wire names
    pub fn numeric_fields(&self) -> [(&'static str, f64); 11] {
        [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("farm_area_hectares", self.farm_area_hectares),
            ("ndvi_mean_12mo", self.ndvi_mean_12mo),
            ("ndvi_slope", self.ndvi_slope),
            ("ndvi_14day_delta", self.ndvi_14day_delta),
            ("ndvi_anomaly_zscore", self.ndvi_anomaly_zscore),
            ("rainfall_deficit_30day", self.rainfall_deficit_30day),
            ("coefficient_of_variation", self.coefficient_of_variation),
            ("soil_organic_carbon", self.soil_organic_carbon),
            ("loan_amount_usd", self.loan_amount_usd),
        ]
    }
}

/// Outcome of a risk assessment, local or remote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    /// 0 (riskiest) to 100 (safest)
    pub risk_score: u8,
    pub risk_category: RiskCategory,
    /// Presentation tag for the category, e.g. `medium-risk`
    #[serde(default)]
    pub category_class: String,
    pub recommendation: String,
    pub confidence: f64,
    pub features: FeatureLabels,
}

/// Loan risk tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    /// Score below 30
    #[serde(rename = "High Risk")]
    HighRisk,
    /// Score 30 to 59
    #[serde(rename = "Medium Risk")]
    MediumRisk,
    /// Score 60 and above
    #[serde(rename = "Low Risk")]
    LowRisk,
}

impl RiskCategory {
    /// Classify a clamped risk score (lower bounds inclusive)
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => RiskCategory::HighRisk,
            30..=59 => RiskCategory::MediumRisk,
            _ => RiskCategory::LowRisk,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskCategory::HighRisk => "high-risk",
            RiskCategory::MediumRisk => "medium-risk",
            RiskCategory::LowRisk => "low-risk",
        }
    }

    /// Lending recommendation attached to the tier
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskCategory::HighRisk => {
                "Loan application should be rejected or require additional collateral and high \
                 interest rate due to poor vegetation health and high environmental risk factors."
            }
            RiskCategory::MediumRisk => {
                "Loan application can be approved with standard terms. Monitor farm performance \
                 closely during the loan period."
            }
            RiskCategory::LowRisk => {
                "Loan application should be approved with favorable terms. Farm shows excellent \
                 vegetation health and stable production patterns."
            }
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::HighRisk => write!(f, "High Risk"),
            RiskCategory::MediumRisk => write!(f, "Medium Risk"),
            RiskCategory::LowRisk => write!(f, "Low Risk"),
        }
    }
}

/// Human-readable interpretation of the raw farm features
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLabels {
    pub ndvi_health: VegetationHealth,
    pub trend: Trend,
    pub drought_status: DroughtStatus,
    pub stability: Stability,
}

/// Vegetation health band from 12-month mean NDVI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VegetationHealth {
    Excellent,
    Good,
    /// Only reported by the remote predictor
    Fair,
    Poor,
}

impl VegetationHealth {
    pub fn from_ndvi_mean(ndvi_mean: f64) -> Self {
        if ndvi_mean > 0.7 {
            VegetationHealth::Excellent
        } else if ndvi_mean > 0.6 {
            VegetationHealth::Good
        } else {
            VegetationHealth::Poor
        }
    }
}

/// NDVI trend direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn from_ndvi_slope(slope: f64) -> Self {
        if slope > 0.01 {
            Trend::Improving
        } else if slope < -0.01 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

/// Drought pressure from the 30-day rainfall deficit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DroughtStatus {
    Low,
    Moderate,
    Severe,
}

impl DroughtStatus {
    pub fn from_rainfall_deficit(deficit_mm: f64) -> Self {
        if deficit_mm < 30.0 {
            DroughtStatus::Low
        } else if deficit_mm < 60.0 {
            DroughtStatus::Moderate
        } else {
            DroughtStatus::Severe
        }
    }
}

/// Production stability from the NDVI coefficient of variation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stability {
    High,
    Moderate,
    Low,
}

impl Stability {
    pub fn from_coefficient_of_variation(cv: f64) -> Self {
        if cv < 0.25 {
            Stability::High
        } else if cv < 0.4 {
            Stability::Moderate
        } else {
            Stability::Low
        }
    }
}
