// File: inputguard-core/src/validators/mod.rs
//! Semantic validators, one per input kind.
//!
//! Each submodule exposes a pure `validate_*` function taking the raw string
//! and its option record, and implements [`Validator`] for that record. This
//! module ties them together behind the [`ValidationKind`] tag and the
//! [`validate`] dispatcher.
//!
//! License: MIT OR APACHE 2.0

pub mod coordinates;
pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod text;
pub mod url;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{
    CoordinateOptions, DateOptions, EmailOptions, NumericOptions, PasswordOptions, PhoneOptions,
    TextOptions, UrlOptions,
};
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::redaction::log_validation_debug;
use crate::result::ValidationResult;

/// The semantic input types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationKind {
    Email,
    Phone,
    Password,
    Url,
    Text,
    Numeric,
    Date,
    Coordinates,
}

impl ValidationKind {
    pub const ALL: [ValidationKind; 8] = [
        ValidationKind::Email,
        ValidationKind::Phone,
        ValidationKind::Password,
        ValidationKind::Url,
        ValidationKind::Text,
        ValidationKind::Numeric,
        ValidationKind::Date,
        ValidationKind::Coordinates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::Email => "email",
            ValidationKind::Phone => "phone",
            ValidationKind::Password => "password",
            ValidationKind::Url => "url",
            ValidationKind::Text => "text",
            ValidationKind::Numeric => "numeric",
            ValidationKind::Date => "date",
            ValidationKind::Coordinates => "coordinates",
        }
    }

    /// Kinds whose raw input must never reach logs or cleaned output.
    pub fn is_secret(&self) -> bool {
        matches!(self, ValidationKind::Password)
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationKind {
    type Err = InputGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        ValidationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| InputGuardError::UnknownKind(s.to_string()))
    }
}

/// Option record for any kind, tagged by `kind` when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationOptions {
    Email(EmailOptions),
    Phone(PhoneOptions),
    Password(PasswordOptions),
    Url(UrlOptions),
    Text(TextOptions),
    Numeric(NumericOptions),
    Date(DateOptions),
    Coordinates(CoordinateOptions),
}

impl ValidationOptions {
    /// The default option record for `kind`.
    pub fn default_for(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::Email => ValidationOptions::Email(EmailOptions::default()),
            ValidationKind::Phone => ValidationOptions::Phone(PhoneOptions::default()),
            ValidationKind::Password => ValidationOptions::Password(PasswordOptions::default()),
            ValidationKind::Url => ValidationOptions::Url(UrlOptions::default()),
            ValidationKind::Text => ValidationOptions::Text(TextOptions::default()),
            ValidationKind::Numeric => ValidationOptions::Numeric(NumericOptions::default()),
            ValidationKind::Date => ValidationOptions::Date(DateOptions::default()),
            ValidationKind::Coordinates => {
                ValidationOptions::Coordinates(CoordinateOptions::default())
            }
        }
    }

    fn as_validator(&self) -> &dyn Validator {
        match self {
            ValidationOptions::Email(options) => options,
            ValidationOptions::Phone(options) => options,
            ValidationOptions::Password(options) => options,
            ValidationOptions::Url(options) => options,
            ValidationOptions::Text(options) => options,
            ValidationOptions::Numeric(options) => options,
            ValidationOptions::Date(options) => options,
            ValidationOptions::Coordinates(options) => options,
        }
    }
}

impl Validator for ValidationOptions {
    fn kind(&self) -> ValidationKind {
        self.as_validator().kind()
    }

    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError> {
        self.as_validator().validate(raw)
    }
}

/// Validates `raw` as `kind`.
///
/// `None` input is treated like an empty string. `None` options select the
/// defaults for `kind`; options for a different kind are a caller bug and
/// are rejected with [`InputGuardError::OptionsMismatch`].
pub fn validate(
    kind: ValidationKind,
    raw: Option<&str>,
    options: Option<&ValidationOptions>,
) -> Result<ValidationResult, InputGuardError> {
    let defaults;
    let options = match options {
        Some(options) => options,
        None => {
            defaults = ValidationOptions::default_for(kind);
            &defaults
        }
    };

    if options.kind() != kind {
        return Err(InputGuardError::OptionsMismatch {
            expected: kind.to_string(),
            found: options.kind().to_string(),
        });
    }

    let raw = raw.unwrap_or_default();
    let result = options.validate(raw)?;
    log_validation_debug(kind, raw, &result);
    Ok(result)
}
