//! WebAssembly module for FieldScore AI
//!
//! Provides client-side computation for:
//! - Offline farm risk scoring
//! - Rule-based assistant answers
//! - Risk category labels

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Score a farm from its JSON features, returning the assessment as JSON
#[wasm_bindgen]
pub fn score_farm(input_json: &str) -> Result<String, JsValue> {
    score_farm_with_draw(input_json, js_sys::Math::random()).map_err(|e| JsValue::from_str(&e))
}

fn score_farm_with_draw(input_json: &str, draw: f64) -> Result<String, String> {
    let input: FarmAssessmentInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid farm JSON: {}", e))?;

    let result = shared::score_with_draw(&input, draw);
    serde_json::to_string(&result).map_err(|e| format!("Failed to encode result: {}", e))
}

/// Answer a question from the built-in rule table
#[wasm_bindgen]
pub fn fallback_chat_response(message: &str, language: &str) -> String {
    shared::respond(message, Language::from_code(language)).to_string()
}

/// Category label for a risk score, e.g. "Medium Risk"
#[wasm_bindgen]
pub fn classify_risk_score(score: u8) -> String {
    RiskCategory::from_score(score).to_string()
}

/// Demo farm used by the "fill sample data" control
#[wasm_bindgen]
pub fn sample_farm_json() -> String {
    serde_json::to_string(&FarmAssessmentInput::sample()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_risk_score() {
        assert_eq!(classify_risk_score(29), "High Risk");
        assert_eq!(classify_risk_score(30), "Medium Risk");
        assert_eq!(classify_risk_score(60), "Low Risk");
    }

    #[test]
    fn test_score_sample_farm() {
        let json = score_farm_with_draw(&sample_farm_json(), 0.25).unwrap();
        let result: RiskAssessmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.risk_score, 53);
        assert_eq!(result.risk_category, RiskCategory::MediumRisk);
        assert!((result.confidence - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_json_reported() {
        let err = score_farm_with_draw("{\"latitude\": 1}", 0.5).unwrap_err();
        assert!(err.starts_with("Invalid farm JSON"));
    }

    #[test]
    fn test_fallback_chat_response() {
        let en = fallback_chat_response("How much does it cost?", "en");
        assert!(en.contains("$0.10"));
        assert_eq!(fallback_chat_response("hello", "xx"), fallback_chat_response("hello", "en"));
    }
}
