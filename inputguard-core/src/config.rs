//! Configuration management for `inputguard-core`.
//!
//! This module defines the per-call option records for every validator and
//! sanitizer, and the YAML form schemas that bind field names to a validation
//! kind plus its options. All option records deserialize permissively: missing
//! keys take their documented defaults and unknown keys are ignored. Keys use
//! the camelCase spelling of the original form helpers (`minLength`,
//! `allowNegative`, ...).
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::compiler::compile_pattern;
use crate::errors::InputGuardError;
use crate::primitives::dates::parse_date;
use crate::validators::ValidationOptions;

/// Maximum allowed length for a user-supplied regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Default cap for `html-content` and `text-content` output.
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 1000;

/// Default `maxLength` for generic text validation.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1000;

fn default_true() -> bool {
    true
}

/// Options for email validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailOptions {
    pub required: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self { required: true }
    }
}

/// Which phone numbering plan to validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneMode {
    #[default]
    Us,
    International,
}

/// Options for phone number validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneOptions {
    pub required: bool,
    #[serde(alias = "type")]
    pub mode: PhoneMode,
}

impl Default for PhoneOptions {
    fn default() -> Self {
        Self { required: true, mode: PhoneMode::Us }
    }
}

/// Options for password strength validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordOptions {
    pub required: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self { required: true }
    }
}

/// Options for URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlOptions {
    pub required: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self { required: true }
    }
}

/// Options for generic free-text validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
    pub min_length: usize,
    pub max_length: usize,
    /// Regex the cleaned text must match. `None` selects the built-in
    /// word/punctuation set.
    pub allowed_pattern: Option<String>,
    pub required: bool,
    #[serde(default = "default_true")]
    pub trim_whitespace: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: DEFAULT_MAX_TEXT_LENGTH,
            allowed_pattern: None,
            required: false,
            trim_whitespace: true,
        }
    }
}

/// Numeric parsing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericType {
    #[default]
    Integer,
    Decimal,
    Currency,
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericType::Integer => "integer",
            NumericType::Decimal => "decimal",
            NumericType::Currency => "currency",
        };
        f.write_str(name)
    }
}

impl FromStr for NumericType {
    type Err = InputGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" => Ok(NumericType::Integer),
            "decimal" => Ok(NumericType::Decimal),
            "currency" => Ok(NumericType::Currency),
            other => Err(InputGuardError::InvalidOptions(format!(
                "unknown numeric type '{}'",
                other
            ))),
        }
    }
}

/// Options for numeric validation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericOptions {
    #[serde(rename = "type")]
    pub numeric_type: NumericType,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub required: bool,
    #[serde(default = "default_true")]
    pub allow_negative: bool,
}

impl Default for NumericOptions {
    fn default() -> Self {
        Self {
            numeric_type: NumericType::Integer,
            min: None,
            max: None,
            required: false,
            allow_negative: true,
        }
    }
}

/// A lower or upper calendar bound for date validation.
///
/// `Today` is resolved against the local clock every time it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateBound {
    Today,
    On(NaiveDate),
}

impl DateBound {
    pub fn resolve(&self) -> NaiveDate {
        match self {
            DateBound::Today => Local::now().date_naive(),
            DateBound::On(date) => *date,
        }
    }
}

impl FromStr for DateBound {
    type Err = InputGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("today") {
            return Ok(DateBound::Today);
        }
        parse_date(s)
            .map(|parsed| DateBound::On(parsed.date()))
            .ok_or_else(|| InputGuardError::InvalidDateBound(s.to_string()))
    }
}

impl TryFrom<String> for DateBound {
    type Error = InputGuardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateBound> for String {
    fn from(bound: DateBound) -> Self {
        match bound {
            DateBound::Today => "today".to_string(),
            DateBound::On(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Options for date validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateOptions {
    pub min_date: Option<DateBound>,
    pub max_date: Option<DateBound>,
    pub required: bool,
}

/// Options for `lat,lon` coordinate validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoordinateOptions {
    pub required: bool,
}

impl Default for CoordinateOptions {
    fn default() -> Self {
        Self { required: true }
    }
}

/// How markup inside `html-content` / `text-content` input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupPolicy {
    /// Escape every guarded character; no markup survives.
    #[default]
    Escape,
    /// Remove every tag outright, then escape what remains.
    StripTags,
    /// Keep the paired formatting tags `b`, `i`, `em`, `strong`, `u`;
    /// escape text and drop every other tag.
    ///
    /// Kept tags are re-emitted lower-cased with their attributes stripped,
    /// so `<B class="x">` becomes `<b>`. Tags left open by truncation are
    /// closed.
    AllowFormatting,
}

impl FromStr for MarkupPolicy {
    type Err = InputGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "escape" => Ok(MarkupPolicy::Escape),
            "strip-tags" => Ok(MarkupPolicy::StripTags),
            "allow-formatting" => Ok(MarkupPolicy::AllowFormatting),
            other => Err(InputGuardError::InvalidOptions(format!(
                "unknown markup policy '{}'",
                other
            ))),
        }
    }
}

/// Options shared by all sanitization contexts. Each context reads only the
/// fields that concern it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SanitizeOptions {
    pub markup: MarkupPolicy,
    /// Output cap for `html-content` and `text-content`, including the `...` suffix.
    pub max_length: usize,
    /// `text-content` only: keep line breaks (normalised to `\n`).
    #[serde(default = "default_true")]
    pub allow_line_breaks: bool,
    /// `text-content` only: collapse space/tab runs and excess blank lines.
    #[serde(default = "default_true")]
    pub remove_extra_whitespace: bool,
    /// `url` only: accept just `http`, `https`, `ftp`, `mailto` or relative URLs.
    pub strict_protocols: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            markup: MarkupPolicy::Escape,
            max_length: DEFAULT_MAX_CONTENT_LENGTH,
            allow_line_breaks: true,
            remove_extra_whitespace: true,
            strict_protocols: false,
        }
    }
}

/// A named set of fields, each bound to a validation kind and its options.
///
/// ```yaml
/// name: registration
/// fields:
///   email:
///     kind: email
///   firstName:
///     kind: text
///     minLength: 2
///     maxLength: 50
///     required: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FormSchema {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, ValidationOptions>,
}

impl FormSchema {
    /// Loads a form schema from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading form schema from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file {}", path.display()))?;
        let schema = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse schema file {}", path.display()))?;
        info!("Loaded {} fields from schema {}.", schema.fields.len(), path.display());
        Ok(schema)
    }

    /// Parses and checks a form schema from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, InputGuardError> {
        let schema: FormSchema = serde_yml::from_str(text)
            .map_err(|e| InputGuardError::SchemaError(e.to_string()))?;
        schema.check().map_err(|e| InputGuardError::SchemaError(e.to_string()))?;
        debug!("Parsed form schema {:?} with {} fields.", schema.name, schema.fields.len());
        Ok(schema)
    }

    /// Rejects empty field names, inverted bounds and patterns that do not compile.
    fn check(&self) -> Result<()> {
        let mut errors = Vec::new();

        for (field, options) in &self.fields {
            if field.trim().is_empty() {
                errors.push("A field has an empty name.".to_string());
            }

            match options {
                ValidationOptions::Text(text) => {
                    if let Some(pattern) = &text.allowed_pattern {
                        if let Err(e) = compile_pattern(pattern) {
                            errors.push(format!("Field '{}': {}", field, e));
                        }
                    }
                    if text.min_length > text.max_length {
                        errors.push(format!(
                            "Field '{}': minLength ({}) exceeds maxLength ({}).",
                            field, text.min_length, text.max_length
                        ));
                    }
                }
                ValidationOptions::Numeric(numeric) => {
                    if let (Some(min), Some(max)) = (numeric.min, numeric.max) {
                        if min > max {
                            errors.push(format!(
                                "Field '{}': min ({}) exceeds max ({}).",
                                field, min, max
                            ));
                        }
                    }
                }
                _ => {}
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Schema validation failed:\n{}", errors.join("\n")))
        }
    }
}
