//! Absolute http(s) URL validation.
//!
//! Two independent gates must both pass: a real URL parse with protocol and
//! host checks, and a conservative structural pattern.

use ::url::Url;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::UrlOptions;
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::result::{ValidationDetails, ValidationResult};
use crate::validators::ValidationKind;

pub const MIN_HOSTNAME_LENGTH: usize = 3;

static URL_STRUCTURE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)$",
    )
    .expect("url pattern is valid")
});

const INVALID_FORMAT: &str = "Invalid URL format";

pub fn validate_url(raw: &str, options: &UrlOptions) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::absent(options.required, "URL is required");
    }

    let cleaned = raw.trim();
    let mut result = ValidationResult::new(cleaned);

    let parsed = match Url::parse(cleaned) {
        Ok(parsed) => parsed,
        Err(_) => {
            result.push_error(INVALID_FORMAT);
            return result;
        }
    };

    let protocol = format!("{}:", parsed.scheme());
    let domain = parsed.host_str().unwrap_or_default().to_string();

    if protocol != "http:" && protocol != "https:" {
        result.push_error("URL must use HTTP or HTTPS protocol");
    }

    if domain.chars().count() < MIN_HOSTNAME_LENGTH {
        result.push_error("URL must have a valid domain");
    }

    if !URL_STRUCTURE_REGEX.is_match(cleaned) {
        result.push_error(INVALID_FORMAT);
    }

    result.set_details(ValidationDetails::Url {
        protocol,
        domain,
        path: parsed.path().to_string(),
    });
    result
}

impl Validator for UrlOptions {
    fn kind(&self) -> ValidationKind {
        ValidationKind::Url
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        Ok(validate_url(raw, self))
    }
}
