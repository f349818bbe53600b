//! Integer, decimal and currency validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{NumericOptions, NumericType};
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::primitives::numbers::{format_bound, format_currency, format_decimal, format_integer};
use crate::result::{ValidationDetails, ValidationResult};
use crate::validators::ValidationKind;

static SIGNED_INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+$").expect("integer pattern is valid"));
static UNSIGNED_INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("integer pattern is valid"));
static SIGNED_DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d*\.?\d+$").expect("decimal pattern is valid"));
static UNSIGNED_DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d*\.?\d+$").expect("decimal pattern is valid"));

fn format_pattern(numeric_type: NumericType, allow_negative: bool) -> &'static Regex {
    match (numeric_type, allow_negative) {
        (NumericType::Integer, true) => &SIGNED_INTEGER_REGEX,
        (NumericType::Integer, false) => &UNSIGNED_INTEGER_REGEX,
        (_, true) => &SIGNED_DECIMAL_REGEX,
        (_, false) => &UNSIGNED_DECIMAL_REGEX,
    }
}

/// Validates a number in integer, decimal or currency mode.
///
/// `$` and `,` are stripped first. A format failure returns immediately with
/// one error; otherwise both bounds are checked independently.
pub fn validate_numeric(raw: &str, options: &NumericOptions) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::absent(options.required, "This field is required");
    }

    let cleaned: String = raw.trim().chars().filter(|c| *c != '$' && *c != ',').collect();
    let mut result = ValidationResult::new(cleaned.as_str());

    let format_error = match options.numeric_type {
        NumericType::Integer => "Must be a valid integer",
        NumericType::Decimal | NumericType::Currency => "Must be a valid decimal number",
    };

    let pattern = format_pattern(options.numeric_type, options.allow_negative);
    let value = match cleaned.parse::<f64>() {
        Ok(value) if pattern.is_match(&cleaned) && value.is_finite() => value,
        _ => {
            result.push_error(format_error);
            return result;
        }
    };

    result.set_formatted(match options.numeric_type {
        NumericType::Integer => format_integer(value),
        NumericType::Decimal => format_decimal(value),
        NumericType::Currency => format_currency(value),
    });
    result.set_details(ValidationDetails::Numeric { value });

    if let Some(min) = options.min {
        if value < min {
            result.push_error(format!("Must be at least {}", format_bound(min)));
        }
    }

    if let Some(max) = options.max {
        if value > max {
            result.push_error(format!("Must be no more than {}", format_bound(max)));
        }
    }

    result
}

impl Validator for NumericOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Numeric
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        Ok(validate_numeric(raw, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(numeric_type: NumericType) -> NumericOptions {
        NumericOptions { numeric_type, ..Default::default() }
    }

    #[test]
    fn integer_within_bounds() {
        let result = validate_numeric(
            "1234",
            &NumericOptions { min: Some(1.0), max: Some(5000.0), ..options(NumericType::Integer) },
        );
        assert!(result.is_valid());
        assert_eq!(result.value(), Some(1234.0));
        assert_eq!(result.formatted(), "1,234");
    }

    #[test]
    fn integer_below_minimum() {
        let result = validate_numeric("0", &NumericOptions { min: Some(1.0), ..options(NumericType::Integer) });
        assert_eq!(result.errors(), ["Must be at least 1".to_string()]);
        assert_eq!(result.value(), Some(0.0));
    }

    #[test]
    fn currency_strips_symbols() {
        let result = validate_numeric("$1,234.56", &NumericOptions { min: Some(0.0), ..options(NumericType::Currency) });
        assert!(result.is_valid());
        assert_eq!(result.cleaned(), "1234.56");
        assert_eq!(result.formatted(), "$1,234.56");
    }

    #[test]
    fn decimal_formats_plainly() {
        let result = validate_numeric("123.45", &options(NumericType::Decimal));
        assert_eq!(result.formatted(), "123.45");
        let result = validate_numeric("99.999", &NumericOptions { max: Some(100.0), ..options(NumericType::Decimal) });
        assert!(result.is_valid());
        assert_eq!(result.value(), Some(99.999));
    }

    #[test]
    fn negative_rejected_when_disallowed() {
        let result = validate_numeric(
            "-50",
            &NumericOptions { allow_negative: false, ..options(NumericType::Integer) },
        );
        assert_eq!(result.errors(), ["Must be a valid integer".to_string()]);
        assert_eq!(result.value(), None);
    }

    #[test]
    fn non_numeric_input() {
        assert_eq!(
            validate_numeric("abc", &options(NumericType::Integer)).errors(),
            ["Must be a valid integer".to_string()]
        );
        assert_eq!(
            validate_numeric("1.2.3", &options(NumericType::Decimal)).errors(),
            ["Must be a valid decimal number".to_string()]
        );
    }

    #[test]
    fn both_bounds_reported_independently() {
        let result = validate_numeric(
            "50",
            &NumericOptions { min: Some(60.0), max: Some(40.0), ..options(NumericType::Integer) },
        );
        assert_eq!(
            result.errors(),
            ["Must be at least 60".to_string(), "Must be no more than 40".to_string()]
        );
    }

    #[test]
    fn empty_numeric_respects_required() {
        assert!(validate_numeric("", &options(NumericType::Integer)).is_valid());
        let required = NumericOptions { required: true, ..Default::default() };
        assert_eq!(validate_numeric("", &required).errors().len(), 1);
    }
}
