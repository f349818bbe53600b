//! The structured outcome of a validation call.
//!
//! A [`ValidationResult`] is built by a validator and handed back read-only.
//! Its fields are private so that `is_valid` can only ever mean "no errors
//! were recorded".

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Password strength bucket derived from the 0-7 check score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// `strong` from 6 passed checks, `medium` from 4, `weak` below.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 6 => PasswordStrength::Strong,
            s if s >= 4 => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Type-specific extras. Serialized flat next to the common fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationDetails {
    Password {
        score: u8,
        strength: PasswordStrength,
        suggestions: Vec<String>,
    },
    Text {
        #[serde(rename = "wordCount")]
        word_count: usize,
        #[serde(rename = "charCount")]
        char_count: usize,
    },
    Numeric {
        value: f64,
    },
    Date {
        date: NaiveDateTime,
    },
    Url {
        protocol: String,
        domain: String,
        path: String,
    },
    Coordinates {
        lat: f64,
        lon: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    cleaned: String,
    formatted: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    details: Option<ValidationDetails>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl ValidationResult {
    /// A passing result holding `cleaned`; errors are added as rules fail.
    pub(crate) fn new(cleaned: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            cleaned: cleaned.into(),
            formatted: String::new(),
            details: None,
        }
    }

    /// Result for empty input: one `message` error when required, otherwise valid.
    pub(crate) fn absent(required: bool, message: &str) -> Self {
        let mut result = Self::default();
        if required {
            result.push_error(message);
        }
        result
    }

    pub(crate) fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    pub(crate) fn set_formatted(&mut self, formatted: impl Into<String>) {
        self.formatted = formatted.into();
    }

    pub(crate) fn with_details(mut self, details: ValidationDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub(crate) fn set_details(&mut self, details: ValidationDetails) {
        self.details = Some(details);
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Every violated rule, in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn details(&self) -> Option<&ValidationDetails> {
        self.details.as_ref()
    }

    pub fn score(&self) -> Option<u8> {
        match self.details {
            Some(ValidationDetails::Password { score, .. }) => Some(score),
            _ => None,
        }
    }

    pub fn strength(&self) -> Option<PasswordStrength> {
        match self.details {
            Some(ValidationDetails::Password { strength, .. }) => Some(strength),
            _ => None,
        }
    }

    pub fn suggestions(&self) -> &[String] {
        match &self.details {
            Some(ValidationDetails::Password { suggestions, .. }) => suggestions,
            _ => &[],
        }
    }

    pub fn word_count(&self) -> Option<usize> {
        match self.details {
            Some(ValidationDetails::Text { word_count, .. }) => Some(word_count),
            _ => None,
        }
    }

    pub fn char_count(&self) -> Option<usize> {
        match self.details {
            Some(ValidationDetails::Text { char_count, .. }) => Some(char_count),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self.details {
            Some(ValidationDetails::Numeric { value }) => Some(value),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        match self.details {
            Some(ValidationDetails::Date { date }) => Some(date),
            _ => None,
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.details {
            Some(ValidationDetails::Coordinates { lat, lon }) => Some((lat, lon)),
            _ => None,
        }
    }

    /// The value a form should keep for this field: the cleaned text, else the
    /// formatted text, else the parsed number.
    pub fn canonical_value(&self) -> Option<String> {
        if !self.cleaned.is_empty() {
            Some(self.cleaned.clone())
        } else if !self.formatted.is_empty() {
            Some(self.formatted.clone())
        } else {
            self.value().map(|v| v.to_string())
        }
    }
}
