// inputguard/src/lib.rs
//! # InputGuard CLI Application
//!
//! This crate provides the terminal interface for the `inputguard-core`
//! validation and sanitization engine: argument parsing, logger setup,
//! themed report printing and the three subcommands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

use anyhow::Result;
use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::commands::OutputOptions;
use crate::ui::theme::build_theme_map;

/// Exit status when the input was checked and found invalid.
pub const EXIT_INVALID: u8 = 1;

/// Exit status for usage, configuration and I/O failures.
pub const EXIT_FAILURE: u8 = 2;

/// Runs a parsed command line. `Ok(false)` means the input failed validation.
pub fn run(cli: &Cli) -> Result<bool> {
    let theme = build_theme_map(cli.theme.as_deref())?;
    let output = OutputOptions { json: cli.json, quiet: cli.quiet, theme: &theme };

    match &cli.command {
        Commands::Validate(cmd) => commands::validate::run_validate(cmd, &output),
        Commands::Sanitize(cmd) => commands::sanitize::run_sanitize(cmd, &output),
        Commands::Form(cmd) => commands::form::run_form(cmd, &output),
    }
}

/// Maps the outcome of [`run`] onto the process exit code.
pub fn exit_code_for(outcome: &Result<bool>) -> ExitCode {
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(_) => ExitCode::from(EXIT_FAILURE),
    }
}
