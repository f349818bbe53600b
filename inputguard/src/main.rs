// inputguard/src/main.rs
//! InputGuard entry point.
//!
//! Parses the command line, installs the logger and dispatches to the
//! selected subcommand. Exit codes: 0 valid, 1 invalid input, 2 failure.

use clap::Parser;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use inputguard::cli::Cli;
use inputguard::logger;
use inputguard::ui::output::print_error_message;
use inputguard::ui::theme::ThemeStyle;
use inputguard::{exit_code_for, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_for_flags(cli.quiet, cli.debug));

    let outcome = run(&cli);
    if let Err(e) = &outcome {
        let theme = ThemeStyle::default_theme_map();
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        let _ = print_error_message(&mut stderr.lock(), &format!("{:#}", e), &theme, supports_color);
    }
    exit_code_for(&outcome)
}
