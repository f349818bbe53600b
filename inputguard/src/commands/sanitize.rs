// inputguard/src/commands/sanitize.rs
//! `inputguard sanitize <CONTEXT> [VALUE]`

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::json;
use std::io::{self, Write};

use inputguard_core::{sanitize, SanitizationContext, SanitizeOptions};

use crate::cli::SanitizeCommand;
use crate::commands::{read_stdin_value, OutputOptions};

/// Maps the command-line flags onto [`SanitizeOptions`].
pub fn options_from_flags(cmd: &SanitizeCommand) -> SanitizeOptions {
    SanitizeOptions {
        markup: cmd.markup.into(),
        max_length: cmd.max_length,
        allow_line_breaks: !cmd.single_line,
        remove_extra_whitespace: !cmd.keep_whitespace,
        strict_protocols: cmd.strict,
    }
}

/// Sanitizes one value and prints it. Sanitization cannot fail, so this
/// always reports success once the value has been written.
pub fn run_sanitize(cmd: &SanitizeCommand, output: &OutputOptions) -> Result<bool> {
    let context = SanitizationContext::from(cmd.context);
    let options = options_from_flags(cmd);
    let raw = match &cmd.value {
        Some(value) => value.clone(),
        None => {
            debug!("No value argument; reading input for {} from stdin.", context);
            read_stdin_value()?
        }
    };

    let sanitized = sanitize(context, Some(&raw), &options);
    info!(
        "Sanitized {} bytes for {} into {} bytes.",
        raw.len(),
        context,
        sanitized.len()
    );

    let mut writer = io::stdout().lock();
    if output.json {
        let body = json!({ "context": context, "sanitized": sanitized });
        let text = serde_json::to_string_pretty(&body).context("Failed to serialize output")?;
        writeln!(writer, "{}", text)?;
    } else {
        writeln!(writer, "{}", sanitized)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use inputguard_core::MarkupPolicy;

    #[test]
    fn flags_map_onto_options() {
        let cli = Cli::try_parse_from([
            "inputguard", "sanitize", "url", "x", "--strict", "--keep-whitespace",
            "--markup", "allow-formatting",
        ])
        .unwrap();
        let Commands::Sanitize(cmd) = cli.command else {
            panic!("expected sanitize");
        };
        let options = options_from_flags(&cmd);
        assert!(options.strict_protocols);
        assert!(!options.remove_extra_whitespace);
        assert!(options.allow_line_breaks);
        assert_eq!(options.markup, MarkupPolicy::AllowFormatting);
    }
}
