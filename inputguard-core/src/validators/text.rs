//! Generic free-text validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::compiler::get_or_compile_pattern;
use crate::config::TextOptions;
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::result::{ValidationDetails, ValidationResult};
use crate::validators::ValidationKind;

/// ASCII word characters, whitespace and common punctuation. The class is
/// ASCII-only on purpose: accented letters are rejected.
pub const DEFAULT_TEXT_PATTERN: &str = r#"^(?-u:[\w\s\-.,!?'"()])*$"#;

static WHITESPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Validates free text against length bounds and an allowed-character pattern.
///
/// Whitespace runs collapse to single spaces (after an optional trim) before
/// any rule runs. Word and character counts are always reported. Fails only
/// when `allowed_pattern` does not compile.
pub fn validate_text(raw: &str, options: &TextOptions) -> Result<ValidationResult, InputGuardError> {
    if raw.is_empty() {
        return Ok(ValidationResult::absent(options.required, "This field is required")
            .with_details(ValidationDetails::Text { word_count: 0, char_count: 0 }));
    }

    let pattern = options.allowed_pattern.as_deref().unwrap_or(DEFAULT_TEXT_PATTERN);
    let allowed = get_or_compile_pattern(pattern)?;

    let trimmed = if options.trim_whitespace { raw.trim() } else { raw };
    let cleaned = WHITESPACE_RUN_REGEX.replace_all(trimmed, " ").into_owned();
    let char_count = cleaned.chars().count();
    let word_count = cleaned.split_whitespace().count();

    let mut result = ValidationResult::new(cleaned.as_str());

    if char_count < options.min_length {
        result.push_error(format!("Must be at least {} characters long", options.min_length));
    }

    if char_count > options.max_length {
        result.push_error(format!("Must be no more than {} characters long", options.max_length));
    }

    if !cleaned.is_empty() && !allowed.is_match(&cleaned) {
        result.push_error("Contains invalid characters");
    }

    Ok(result.with_details(ValidationDetails::Text { word_count, char_count }))
}

impl Validator for TextOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Text
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        validate_text(raw, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str, options: TextOptions) -> ValidationResult {
        validate_text(raw, &options).unwrap()
    }

    #[test]
    fn counts_words_and_characters() {
        let result = check(
            "Hello, World!",
            TextOptions { min_length: 5, max_length: 50, ..Default::default() },
        );
        assert!(result.is_valid());
        assert_eq!(result.word_count(), Some(2));
        assert_eq!(result.char_count(), Some(13));
    }

    #[test]
    fn collapses_whitespace() {
        let result = check("   Lots of   spaces   ", TextOptions::default());
        assert_eq!(result.cleaned(), "Lots of spaces");
        assert_eq!(result.word_count(), Some(3));

        let untrimmed = check("  a\t\tb ", TextOptions { trim_whitespace: false, ..Default::default() });
        assert_eq!(untrimmed.cleaned(), " a b ");
    }

    #[test]
    fn reports_all_violations() {
        let options = TextOptions {
            min_length: 10,
            allowed_pattern: Some("^[a-z]*$".to_string()),
            ..Default::default()
        };
        let result = check("Short", options);
        assert_eq!(
            result.errors(),
            [
                "Must be at least 10 characters long".to_string(),
                "Contains invalid characters".to_string(),
            ]
        );
    }

    #[test]
    fn too_long_text() {
        let result = check(
            "This is a very long text that exceeds the maximum allowed length for this field",
            TextOptions { max_length: 50, ..Default::default() },
        );
        assert_eq!(result.errors(), ["Must be no more than 50 characters long".to_string()]);
    }

    #[test]
    fn default_pattern_rejects_markup_and_non_ascii() {
        assert!(!check("<script>alert('xss')</script>", TextOptions::default()).is_valid());
        assert!(!check("café", TextOptions::default()).is_valid());
        assert!(check("Valid text with punctuation!", TextOptions::default()).is_valid());
    }

    #[test]
    fn required_empty_text() {
        let result = check("", TextOptions { required: true, ..Default::default() });
        assert_eq!(result.errors(), ["This field is required".to_string()]);
        assert!(check("", TextOptions::default()).is_valid());
    }

    #[test]
    fn bad_pattern_is_a_configuration_error() {
        let options = TextOptions { allowed_pattern: Some("[".to_string()), ..Default::default() };
        assert!(validate_text("abc", &options).is_err());
    }
}
