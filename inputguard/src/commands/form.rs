// inputguard/src/commands/form.rs
//! `inputguard form <SCHEMA> [DATA]`

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};

use inputguard_core::{validate_form, FormSchema};

use crate::cli::FormCommand;
use crate::commands::{read_stdin_value, OutputOptions};
use crate::ui::output::{print_form_report, print_info_message, print_warn_message};

/// Turns a JSON object into raw field values.
///
/// Numbers and booleans are used in their JSON spelling; `null` means the
/// field is absent. Nested arrays or objects are rejected.
pub fn form_data_from_json(text: &str) -> Result<HashMap<String, String>> {
    let value: Value = serde_json::from_str(text).context("Form data is not valid JSON")?;
    let Value::Object(map) = value else {
        bail!("Form data must be a JSON object of field names to values");
    };

    let mut data = HashMap::with_capacity(map.len());
    for (field, value) in map {
        let raw = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => {
                debug!("Field '{}' is null; treating it as absent.", field);
                continue;
            }
            Value::Array(_) | Value::Object(_) => {
                bail!("Field '{}' must be a string, number or boolean", field)
            }
        };
        data.insert(field, raw);
    }
    Ok(data)
}

/// Validates a form and prints the report. Returns whether every field passed.
pub fn run_form(cmd: &FormCommand, output: &OutputOptions) -> Result<bool> {
    let schema = FormSchema::load_from_file(&cmd.schema)?;
    let text = match &cmd.data {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read form data {}", path.display()))?,
        None => read_stdin_value()?,
    };
    let data = form_data_from_json(&text)?;

    let report = validate_form(&schema, &data)?;
    if !output.quiet {
        let stderr = io::stderr();
        let err_color = stderr.is_terminal();
        let mut err = stderr.lock();
        let msg = format!(
            "Checked {} fields against schema '{}'.",
            report.results.len(),
            schema.name.as_deref().unwrap_or("unnamed")
        );
        print_info_message(&mut err, &msg, output.theme, err_color)?;
        for field in report.invalid_fields() {
            let msg = format!("Field '{}' failed validation.", field);
            print_warn_message(&mut err, &msg, output.theme, err_color)?;
        }
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if output.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize form report")?;
        writeln!(writer, "{}", json)?;
    } else {
        print_form_report(&mut writer, &report, output.theme, supports_color)?;
    }
    Ok(report.is_valid)
}
