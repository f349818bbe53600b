//! Phone number validation for US and international numbering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{PhoneMode, PhoneOptions};
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::result::ValidationResult;
use crate::validators::ValidationKind;

static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern is valid"));

/// Validates and formats a phone number.
///
/// `cleaned` keeps only ASCII digits and `+`. US numbers need 10 digits, or
/// 11 with a leading country code `1`.
pub fn validate_phone(raw: &str, options: &PhoneOptions) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::absent(options.required, "Phone number is required");
    }

    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    let mut result = ValidationResult::new(cleaned.as_str());

    match options.mode {
        PhoneMode::Us => {
            let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
            match digits.len() {
                10 => result.set_formatted(format_us(&digits)),
                11 if digits.starts_with('1') => {
                    result.set_formatted(format!("+1 {}", format_us(&digits[1..])))
                }
                _ => result.push_error("US phone number must be 10 digits (or 11 with country code 1)"),
            }
        }
        PhoneMode::International => {
            if INTERNATIONAL_PHONE_REGEX.is_match(&cleaned) {
                let formatted = if cleaned.starts_with('+') {
                    cleaned.clone()
                } else {
                    format!("+{}", cleaned)
                };
                result.set_formatted(formatted);
            } else {
                result.push_error("Invalid international phone number format");
            }
        }
    }

    result
}

/// `5551234567` -> `(555) 123-4567`.
fn format_us(digits: &str) -> String {
    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..])
}

impl Validator for PhoneOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Phone
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        Ok(validate_phone(raw, self))
    }
}
