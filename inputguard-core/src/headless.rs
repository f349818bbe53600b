// inputguard-core/src/headless.rs
//! `headless.rs`
//! One-shot entry points keyed by string tags.
//!
//! Callers that receive the kind or context as text (a CLI argument, a JSON
//! request field) use these instead of parsing tags and building option
//! records themselves. Unknown tags and malformed options come back as
//! [`InputGuardError`]; rule violations are reported in the result.

use log::debug;
use serde_json::{Map, Value};

use crate::config::SanitizeOptions;
use crate::errors::InputGuardError;
use crate::result::ValidationResult;
use crate::sanitizers::{sanitize, SanitizationContext};
use crate::validators::{validate, ValidationKind, ValidationOptions};

/// Validates `raw` as the kind named by `kind_tag`, using default options.
pub fn headless_validate(
    kind_tag: &str,
    raw: Option<&str>,
) -> Result<ValidationResult, InputGuardError> {
    let kind: ValidationKind = kind_tag.parse()?;
    validate(kind, raw, None)
}

/// Validates `raw` with options given as a JSON object in camelCase
/// (`{"minLength": 2, "type": "currency"}`).
///
/// `null` selects the defaults. Unknown keys are ignored; keys with the wrong
/// type are rejected with [`InputGuardError::InvalidOptions`].
pub fn headless_validate_json(
    kind_tag: &str,
    raw: Option<&str>,
    options: &Value,
) -> Result<ValidationResult, InputGuardError> {
    let kind: ValidationKind = kind_tag.parse()?;
    let options = options_from_json(kind, options)?;
    validate(kind, raw, Some(&options))
}

/// Builds the option record for `kind` from a JSON object.
pub fn options_from_json(
    kind: ValidationKind,
    options: &Value,
) -> Result<ValidationOptions, InputGuardError> {
    let mut fields = match options {
        Value::Null => Map::new(),
        Value::Object(map) => map.clone(),
        other => {
            return Err(InputGuardError::InvalidOptions(format!(
                "options for '{}' must be a JSON object, got {}",
                kind, other
            )))
        }
    };
    fields.insert("kind".to_string(), Value::String(kind.as_str().to_string()));
    debug!("Building {} options from {} JSON keys.", kind, fields.len() - 1);

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| InputGuardError::InvalidOptions(format!("{} options: {}", kind, e)))
}

/// Sanitizes `raw` for the context named by `context_tag`.
pub fn headless_sanitize(
    context_tag: &str,
    raw: Option<&str>,
    options: &SanitizeOptions,
) -> Result<String, InputGuardError> {
    let context: SanitizationContext = context_tag.parse()?;
    Ok(sanitize(context, raw, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_headless_validate_by_tag() -> Result<()> {
        let result = headless_validate("email", Some("user@example.com"))?;
        assert!(result.is_valid());
        assert_eq!(result.cleaned(), "user@example.com");
        Ok(())
    }

    #[test]
    fn test_headless_validate_unknown_kind() {
        let err = headless_validate("zipcode", Some("12345")).unwrap_err();
        assert!(matches!(err, InputGuardError::UnknownKind(tag) if tag == "zipcode"));
    }

    #[test]
    fn test_headless_validate_json_options() -> Result<()> {
        let result = headless_validate_json(
            "numeric",
            Some("$1,234.5"),
            &json!({ "type": "currency", "max": 1000 }),
        )?;
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["Must be no more than 1000".to_string()]);
        assert_eq!(result.formatted(), "$1,234.50");
        Ok(())
    }

    #[test]
    fn test_headless_validate_json_null_means_defaults() -> Result<()> {
        let result = headless_validate_json("text", Some("  hello   world "), &Value::Null)?;
        assert!(result.is_valid());
        assert_eq!(result.cleaned(), "hello world");
        Ok(())
    }

    #[test]
    fn test_headless_validate_json_rejects_bad_options() {
        let err = headless_validate_json("text", Some("x"), &json!({ "minLength": "two" }))
            .unwrap_err();
        assert!(matches!(err, InputGuardError::InvalidOptions(_)));

        let err = headless_validate_json("text", Some("x"), &json!([1, 2])).unwrap_err();
        assert!(matches!(err, InputGuardError::InvalidOptions(_)));
    }

    #[test]
    fn test_headless_sanitize_by_tag() -> Result<()> {
        let options = SanitizeOptions::default();
        assert_eq!(headless_sanitize("url", Some("javascript:alert(1)"), &options)?, "");
        assert_eq!(
            headless_sanitize("json-string-content", Some("a\"b"), &options)?,
            "a\\\"b"
        );
        assert!(matches!(
            headless_sanitize("css", Some("x"), &options),
            Err(InputGuardError::UnknownContext(_))
        ));
        Ok(())
    }
}
