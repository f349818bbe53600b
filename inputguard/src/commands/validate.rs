// inputguard/src/commands/validate.rs
//! `inputguard validate <KIND> [VALUE]`

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use serde_json::Value;
use std::io::{self, Write};

use inputguard_core::{options_from_json, validate, ValidationKind, ValidationOptions, ValidationResult};

use crate::cli::ValidateCommand;
use crate::commands::{read_stdin_value, OutputOptions};
use crate::ui::output::print_validation_report;

/// Builds the option record from `--options`, or the kind's defaults.
pub fn parse_options(kind: ValidationKind, options: Option<&str>) -> Result<ValidationOptions> {
    let Some(text) = options else {
        return Ok(ValidationOptions::default_for(kind));
    };
    let value: Value = serde_json::from_str(text)
        .with_context(|| format!("--options for '{}' is not valid JSON", kind))?;
    Ok(options_from_json(kind, &value)?)
}

/// Validates one value and prints the result. Returns whether it was valid.
pub fn run_validate(cmd: &ValidateCommand, output: &OutputOptions) -> Result<bool> {
    let kind = ValidationKind::from(cmd.kind);
    let options = parse_options(kind, cmd.options.as_deref())?;
    let raw = match &cmd.value {
        Some(value) => value.clone(),
        None => {
            debug!("No value argument; reading {} from stdin.", kind);
            read_stdin_value()?
        }
    };

    let result = validate(kind, Some(&raw), Some(&options))?;
    info!("{} validation finished: valid={}", kind, result.is_valid());

    write_result(kind, &result, output)?;
    Ok(result.is_valid())
}

fn write_result(kind: ValidationKind, result: &ValidationResult, output: &OutputOptions) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if output.json {
        let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        writeln!(writer, "{}", json)?;
    } else {
        print_validation_report(&mut writer, kind.as_str(), result, output.theme, supports_color)?;
    }
    Ok(())
}
