//! Email address validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EmailOptions;
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::result::ValidationResult;
use crate::validators::ValidationKind;

/// RFC 5321 forward-path limit.
pub const MAX_EMAIL_LENGTH: usize = 254;

// local@domain.tld with no whitespace and a single '@'.
static BASIC_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validates an email address after trimming and lower-casing it.
///
/// `cleaned` always holds the normalised address, valid or not.
pub fn validate_email(raw: &str, options: &EmailOptions) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::absent(options.required, "Email is required");
    }

    let cleaned = raw.trim().to_lowercase();
    let mut result = ValidationResult::new(cleaned.as_str());

    if cleaned.chars().count() > MAX_EMAIL_LENGTH {
        result.push_error(format!("Email is too long (max {} characters)", MAX_EMAIL_LENGTH));
    }

    if !BASIC_EMAIL_REGEX.is_match(&cleaned) {
        result.push_error("Invalid email format");
    }

    if cleaned.contains("..") {
        result.push_error("Email cannot contain consecutive dots");
    }

    if cleaned.starts_with('.') || cleaned.ends_with('.') {
        result.push_error("Email cannot start or end with a dot");
    }

    result
}

impl Validator for EmailOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Email
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        Ok(validate_email(raw, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str) -> ValidationResult {
        validate_email(raw, &EmailOptions::default())
    }

    #[test]
    fn accepts_plain_and_tagged_addresses() {
        let result = check("test@example.com");
        assert!(result.is_valid());
        assert_eq!(result.cleaned(), "test@example.com");
        assert!(check("user.name+tag@domain.co.uk").is_valid());
    }

    #[test]
    fn normalises_case_and_whitespace() {
        let result = check("  USER@Example.COM ");
        assert!(result.is_valid());
        assert_eq!(result.cleaned(), "user@example.com");
    }

    #[test]
    fn reports_every_violation_in_order() {
        let result = check(".test..x@domain.com.");
        assert_eq!(
            result.errors(),
            [
                "Email cannot contain consecutive dots".to_string(),
                "Email cannot start or end with a dot".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_missing_parts() {
        for raw in ["invalid.email", "@domain.com", "test@", "a b@c.d"] {
            let result = check(raw);
            assert!(!result.is_valid(), "{raw} should be invalid");
            assert!(result.errors().contains(&"Invalid email format".to_string()));
        }
    }

    #[test]
    fn rejects_overlong_address() {
        let raw = format!("{}@domain.com", "a".repeat(250));
        let result = check(&raw);
        assert_eq!(result.errors()[0], "Email is too long (max 254 characters)");
        assert_eq!(result.cleaned(), raw);
    }

    #[test]
    fn optional_empty_email_is_valid() {
        let result = validate_email("", &EmailOptions { required: false });
        assert!(result.is_valid());
        assert_eq!(result.cleaned(), "");
    }
}
