//! `lat,lon` coordinate validation.

use crate::config::CoordinateOptions;
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::result::{ValidationDetails, ValidationResult};
use crate::validators::ValidationKind;

const MISSING: &str = "Latitude and longitude are required";

fn parse_component(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validates a `"lat,lon"` pair, e.g. `"51.5074, -0.1278"`.
pub fn validate_coordinates(raw: &str, options: &CoordinateOptions) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::absent(options.required, MISSING);
    }

    let mut parts = raw.split(',').map(str::trim);
    let (lat_text, lon_text) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        (_, _, Some(_)) => {
            let mut result = ValidationResult::new(raw.trim());
            result.push_error("Coordinates must be in 'lat,lon' form");
            return result;
        }
        _ => {
            let mut result = ValidationResult::new(raw.trim());
            result.push_error(MISSING);
            return result;
        }
    };

    let mut result = ValidationResult::new(format!("{},{}", lat_text, lon_text));
    let lat = parse_component(lat_text);
    let lon = parse_component(lon_text);

    match lat {
        None => result.push_error("Latitude must be a number"),
        Some(lat) if !(-90.0..=90.0).contains(&lat) => {
            result.push_error("Latitude must be between -90 and 90")
        }
        _ => {}
    }

    match lon {
        None => result.push_error("Longitude must be a number"),
        Some(lon) if !(-180.0..=180.0).contains(&lon) => {
            result.push_error("Longitude must be between -180 and 180")
        }
        _ => {}
    }

    if let (Some(lat), Some(lon)) = (lat, lon) {
        result.set_formatted(format!("{:.6},{:.6}", lat, lon));
        result.set_details(ValidationDetails::Coordinates { lat, lon });
    }

    result
}

impl Validator for CoordinateOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Coordinates
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        Ok(validate_coordinates(raw, self))
    }
}
