//! Calendar date validation with optional bounds.

use crate::config::DateOptions;
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::primitives::dates::{format_locale_date, parse_date};
use crate::result::{ValidationDetails, ValidationResult};
use crate::validators::ValidationKind;

/// Parses `raw` and checks it against `min_date`/`max_date` (inclusive).
///
/// Bounds compare calendar days; the time of day, if any, is ignored.
pub fn validate_date(raw: &str, options: &DateOptions) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::absent(options.required, "Date is required");
    }

    let mut result = ValidationResult::new(raw.trim());

    let Some(parsed) = parse_date(raw) else {
        result.push_error("Invalid date format");
        return result;
    };

    let day = parsed.date();
    result.set_formatted(format_locale_date(day));
    result.set_details(ValidationDetails::Date { date: parsed });

    if let Some(bound) = options.min_date {
        let min = bound.resolve();
        if day < min {
            result.push_error(format!("Date must be on or after {}", format_locale_date(min)));
        }
    }

    if let Some(bound) = options.max_date {
        let max = bound.resolve();
        if day > max {
            result.push_error(format!("Date must be on or before {}", format_locale_date(max)));
        }
    }

    result
}

impl Validator for DateOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Date
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        Ok(validate_date(raw, self))
    }
}
