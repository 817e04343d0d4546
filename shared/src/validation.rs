//! Measurement validation
//!
//! Parsing and range checks are combined per field: anything that is not
//! an in-range number yields that field's single error.

use std::ops::RangeInclusive;

use crate::errors::ValidationError;
use crate::input::parse_decimal;

/// Accepted weight in kilograms, bounds inclusive
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 0.2..=700.0;

/// Accepted height in meters, bounds inclusive
pub const HEIGHT_RANGE_M: RangeInclusive<f64> = 0.2..=2.60;

/// Validate weight text and return the weight in kg
pub fn validate_weight(text: &str) -> Result<f64, ValidationError> {
    parse_decimal(text)
        .filter(|weight_kg| WEIGHT_RANGE_KG.contains(weight_kg))
        .ok_or(ValidationError::InvalidWeight)
}

/// Validate height text and return the height in meters
pub fn validate_height(text: &str) -> Result<f64, ValidationError> {
    parse_decimal(text)
        .filter(|height_m| HEIGHT_RANGE_M.contains(height_m))
        .ok_or(ValidationError::InvalidHeight)
}
