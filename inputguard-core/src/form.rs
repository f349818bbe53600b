// inputguard-core/src/form.rs
//! Whole-form validation against a [`FormSchema`].
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::config::FormSchema;
use crate::engine::Validator;
use crate::errors::InputGuardError;
use crate::redaction::log_validation_debug;
use crate::result::ValidationResult;

/// Outcome of validating every field of a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub is_valid: bool,
    /// Per-field results, ordered by field name.
    pub results: BTreeMap<String, ValidationResult>,
    /// Canonical value of each field with one. Secret fields never appear.
    pub cleaned_data: BTreeMap<String, String>,
}

impl FormReport {
    /// Field names whose result is invalid, in order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(field, _)| field.as_str())
    }
}

/// Validates `data` against every field of `schema`.
///
/// Fields missing from `data` are validated as absent input, so required
/// fields report their "required" error. Keys in `data` that the schema does
/// not name are ignored.
pub fn validate_form(
    schema: &FormSchema,
    data: &HashMap<String, String>,
) -> Result<FormReport, InputGuardError> {
    let mut results = BTreeMap::new();
    let mut cleaned_data = BTreeMap::new();

    for (field, options) in &schema.fields {
        let kind = options.kind();
        let raw = data.get(field).map(String::as_str).unwrap_or_default();
        let result = options.validate(raw)?;
        log_validation_debug(kind, raw, &result);

        if !kind.is_secret() {
            if let Some(value) = result.canonical_value() {
                cleaned_data.insert(field.clone(), value);
            }
        }
        results.insert(field.clone(), result);
    }

    let ignored = data.keys().filter(|key| !schema.fields.contains_key(*key)).count();
    if ignored > 0 {
        debug!("Ignored {} form keys not named by the schema.", ignored);
    }

    let is_valid = results.values().all(ValidationResult::is_valid);
    info!(
        "Validated form {}: {} fields, valid={}.",
        schema.name.as_deref().unwrap_or("<unnamed>"),
        results.len(),
        is_valid
    );

    Ok(FormReport { is_valid, results, cleaned_data })
}
