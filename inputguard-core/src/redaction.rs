// inputguard-core/src/redaction.rs
//! Debug logging helpers that keep raw user input out of logs.
//!
//! Raw values are replaced by a length marker unless
//! `INPUTGUARD_ALLOW_DEBUG_PII=true` is set. Secret kinds (passwords) are
//! never printed, whatever the environment says.

use lazy_static::lazy_static;
use log::debug;

use crate::result::ValidationResult;
use crate::sanitizers::SanitizationContext;
use crate::validators::ValidationKind;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("INPUTGUARD_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_validation_debug(kind: ValidationKind, raw: &str, result: &ValidationResult) {
    let shown = if kind.is_secret() {
        redact_sensitive(raw)
    } else {
        get_loggable_content(raw)
    };
    debug!(
        "Validated {}: input='{}', valid={}, errors={}",
        kind,
        shown,
        result.is_valid(),
        result.errors().len()
    );
}

pub fn log_sanitization_debug(context: SanitizationContext, raw: &str, sanitized: &str) {
    debug!(
        "Sanitized for {}: input='{}', output='{}', removed={} bytes",
        context,
        get_loggable_content(raw),
        get_loggable_content(sanitized),
        raw.len().saturating_sub(sanitized.len())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_redact_sensitive_counts_characters_not_bytes() {
        assert_eq!(redact_sensitive("Ünïcödé"), "[REDACTED]".to_string());
        assert_eq!(redact_sensitive("Ünïcödé!!"), "[REDACTED: 9 chars]".to_string());
    }
}
