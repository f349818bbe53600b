// inputguard/src/commands/mod.rs
//! Subcommand implementations. Each returns whether the input passed so
//! `main` can pick the exit code.

pub mod form;
pub mod sanitize;
pub mod validate;

use anyhow::{Context, Result};
use std::io::{self, Read};

/// Reads a value from stdin, dropping one trailing line ending so that
/// `echo value | inputguard ...` sees `value`.
pub fn read_stdin_value() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read input from stdin")?;
    Ok(strip_line_ending(buffer))
}

fn strip_line_ending(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}

/// Output settings shared by every subcommand.
pub struct OutputOptions<'a> {
    pub json: bool,
    /// Suppresses `[info]`/`[warn]` notes on stderr.
    pub quiet: bool,
    pub theme: &'a crate::ui::theme::ThemeMap,
}
