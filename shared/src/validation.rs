//! Validation utilities for FieldScore request input
//!
//! The local scorer accepts any numbers; these checks run at the HTTP
//! boundary before a request enters either pipeline.

use thiserror::Error;

use crate::models::FarmAssessmentInput;

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct InputViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl InputViolation {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validate farm input, returning the first violation found
///
/// NDVI outside 0..=1 is deliberately accepted; see [`is_expected_ndvi`].
pub fn validate_farm_input(input: &FarmAssessmentInput) -> Result<(), InputViolation> {
    if let Some((field, _)) = input
        .numeric_fields()
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(InputViolation::new(field, "must be a finite number"));
    }

    validate_latitude(input.latitude)?;
    validate_longitude(input.longitude)?;

    if input.crop_type.trim().is_empty() {
        return Err(InputViolation::new("crop_type", "must not be empty"));
    }
    if input.farm_area_hectares <= 0.0 {
        return Err(InputViolation::new(
            "farm_area_hectares",
            "must be greater than zero",
        ));
    }
    if input.loan_amount_usd <= 0.0 {
        return Err(InputViolation::new(
            "loan_amount_usd",
            "must be greater than zero",
        ));
    }

    Ok(())
}

pub fn validate_latitude(latitude: f64) -> Result<(), InputViolation> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(InputViolation::new(
            "latitude",
            "must be between -90 and 90",
        ));
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64) -> Result<(), InputViolation> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(InputViolation::new(
            "longitude",
            "must be between -180 and 180",
        ));
    }
    Ok(())
}

/// Validate a chat message is not blank
pub fn validate_chat_message(message: &str) -> Result<(), InputViolation> {
    if message.trim().is_empty() {
        return Err(InputViolation::new("message", "must not be empty"));
    }
    Ok(())
}

/// Check whether NDVI lies in its physical range
pub fn is_expected_ndvi(ndvi: f64) -> bool {
    (0.0..=1.0).contains(&ndvi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid() {
        assert!(validate_farm_input(&FarmAssessmentInput::sample()).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut input = FarmAssessmentInput::sample();
        input.ndvi_slope = f64::NAN;
        let err = validate_farm_input(&input).unwrap_err();
        assert_eq!(err.field, "ndvi_slope");

        let mut input = FarmAssessmentInput::sample();
        input.loan_amount_usd = f64::INFINITY;
        let err = validate_farm_input(&input).unwrap_err();
        assert_eq!(err.field, "loan_amount_usd");
    }

    #[test]
    fn test_coordinates() {
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.5).is_err());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.1).is_err());
    }

    #[test]
    fn test_positive_amounts() {
        let mut input = FarmAssessmentInput::sample();
        input.farm_area_hectares = 0.0;
        assert_eq!(
            validate_farm_input(&input).unwrap_err().field,
            "farm_area_hectares"
        );

        let mut input = FarmAssessmentInput::sample();
        input.loan_amount_usd = -10.0;
        assert_eq!(
            validate_farm_input(&input).unwrap_err().field,
            "loan_amount_usd"
        );
    }

    #[test]
    fn test_blank_crop_and_message() {
        let mut input = FarmAssessmentInput::sample();
        input.crop_type = "  ".to_string();
        assert_eq!(validate_farm_input(&input).unwrap_err().field, "crop_type");

        assert!(validate_chat_message("hi").is_ok());
        assert!(validate_chat_message("   ").is_err());
    }

    #[test]
    fn test_out_of_range_ndvi_still_valid() {
        let mut input = FarmAssessmentInput::sample();
        input.ndvi_mean_12mo = 1.4;
        assert!(validate_farm_input(&input).is_ok());
        assert!(!is_expected_ndvi(1.4));
        assert!(is_expected_ndvi(0.72));
    }
}
