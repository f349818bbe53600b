//! Password strength validation.
//!
//! Seven independent checks are run. The number that pass is the score
//! (0-7), which buckets into weak/medium/strong. Each failed check adds one
//! error and one suggestion, in check order. The password itself is never
//! copied into the result.

use crate::config::PasswordOptions;
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::primitives::passwords::{has_sequential_chars, has_special_character, is_common_password};
use crate::result::{PasswordStrength, ValidationDetails, ValidationResult};
use crate::validators::ValidationKind;

pub const MIN_PASSWORD_LENGTH: usize = 8;

struct Check {
    passed: bool,
    error: &'static str,
    suggestion: &'static str,
}

pub fn validate_password(raw: &str, options: &PasswordOptions) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::absent(options.required, "Password is required").with_details(
            ValidationDetails::Password {
                score: 0,
                strength: PasswordStrength::Weak,
                suggestions: Vec::new(),
            },
        );
    }

    let checks = [
        Check {
            passed: raw.chars().count() >= MIN_PASSWORD_LENGTH,
            error: "Password must be at least 8 characters long",
            suggestion: "Use at least 8 characters",
        },
        Check {
            passed: raw.chars().any(|c| c.is_ascii_lowercase()),
            error: "Password must contain at least one lowercase letter",
            suggestion: "Add lowercase letters (a-z)",
        },
        Check {
            passed: raw.chars().any(|c| c.is_ascii_uppercase()),
            error: "Password must contain at least one uppercase letter",
            suggestion: "Add uppercase letters (A-Z)",
        },
        Check {
            passed: raw.chars().any(|c| c.is_ascii_digit()),
            error: "Password must contain at least one number",
            suggestion: "Add numbers (0-9)",
        },
        Check {
            passed: has_special_character(raw),
            error: "Password must contain at least one special character (@$!%*?&)",
            suggestion: "Add special characters (@$!%*?&)",
        },
        Check {
            passed: !is_common_password(raw),
            error: "Password is too common",
            suggestion: "Avoid common passwords like 'password123'",
        },
        Check {
            passed: !has_sequential_chars(raw),
            error: "Password contains sequential characters",
            suggestion: "Avoid sequential patterns like '123' or 'abc'",
        },
    ];

    let mut result = ValidationResult::default();
    let mut suggestions = Vec::new();
    let mut score = 0u8;

    for check in &checks {
        if check.passed {
            score += 1;
        } else {
            result.push_error(check.error);
            suggestions.push(check.suggestion.to_string());
        }
    }

    result.with_details(ValidationDetails::Password {
        score,
        strength: PasswordStrength::from_score(score),
        suggestions,
    })
}

impl Validator for PasswordOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Password
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        Ok(validate_password(raw, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str) -> ValidationResult {
        validate_password(raw, &PasswordOptions::default())
    }

    #[test]
    fn strong_password_passes_everything() {
        let result = check("MyStr0ng!Pass");
        assert!(result.is_valid());
        assert_eq!(result.score(), Some(7));
        assert_eq!(result.strength(), Some(PasswordStrength::Strong));
        assert!(result.suggestions().is_empty());
        assert_eq!(result.cleaned(), "");
    }

    #[test]
    fn common_password_fails_several_checks() {
        let result = check("password123");
        assert!(!result.is_valid());
        let errors = result.errors();
        assert!(errors.contains(&"Password must contain at least one uppercase letter".to_string()));
        assert!(errors.contains(&"Password must contain at least one special character (@$!%*?&)".to_string()));
        assert!(errors.contains(&"Password is too common".to_string()));
        assert_eq!(result.suggestions().len(), errors.len());
        assert_eq!(result.strength(), Some(PasswordStrength::Weak));
    }

    #[test]
    fn sequential_digits_cost_one_point() {
        let result = check("P@ssw0rd123");
        assert_eq!(result.score(), Some(6));
        assert_eq!(result.strength(), Some(PasswordStrength::Strong));
        assert_eq!(result.errors(), ["Password contains sequential characters".to_string()]);
    }

    #[test]
    fn medium_bucket() {
        // fails uppercase, special and sequential ("234")
        let result = check("x1234xyq");
        assert_eq!(result.score(), Some(4));
        assert_eq!(result.strength(), Some(PasswordStrength::Medium));
    }

    #[test]
    fn short_password() {
        let result = check("Aa1!");
        assert_eq!(result.errors()[0], "Password must be at least 8 characters long");
        assert_eq!(result.score(), Some(6));
    }

    #[test]
    fn empty_password_is_required() {
        let result = check("");
        assert_eq!(result.errors(), ["Password is required".to_string()]);
        assert_eq!(result.score(), Some(0));
    }
}
