// inputguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the inputguard application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use inputguard_core::{MarkupPolicy, SanitizationContext, ValidationKind};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "inputguard",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and sanitize untrusted input",
    long_about = "InputGuard checks untrusted values against semantic rules (email, phone, password, URL, text, numeric, date, coordinates) and rewrites values so they are safe for a destination context such as an HTML body, an attribute, a URL or a filename. Values come from an argument or from stdin; whole forms can be checked against a YAML schema.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the inputguard crates)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Print machine-readable JSON instead of the human report.
    #[arg(long, global = true, help = "Print results as JSON.")]
    pub json: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `inputguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates a single value as a semantic type.
    #[command(about = "Validates a value as a semantic type; exits 1 when it is invalid.")]
    Validate(ValidateCommand),

    /// Sanitizes a single value for a destination context.
    #[command(about = "Sanitizes a value for a destination context.")]
    Sanitize(SanitizeCommand),

    /// Validates a JSON object of fields against a YAML form schema.
    #[command(about = "Validates form data against a YAML schema; exits 1 when any field is invalid.")]
    Form(FormCommand),
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// The kind of value to validate.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: KindArg,

    /// The value to validate (reads from stdin if not provided).
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Kind-specific options as a JSON object, e.g. '{"minLength": 2}'.
    #[arg(long, short = 'o', value_name = "JSON", help = "Kind-specific options as a JSON object (camelCase keys).")]
    pub options: Option<String>,
}

/// Arguments for the `sanitize` command.
#[derive(Args, Debug)]
pub struct SanitizeCommand {
    /// The destination context the value will be placed in.
    #[arg(value_enum, value_name = "CONTEXT")]
    pub context: ContextArg,

    /// The value to sanitize (reads from stdin if not provided).
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// How markup is treated in html-content and text-content.
    #[arg(long, value_enum, default_value = "escape", help = "How markup is treated in html-content and text-content.")]
    pub markup: MarkupArg,

    /// Output cap for html-content and text-content, including the "..." suffix.
    #[arg(long = "max-length", value_name = "N", default_value_t = inputguard_core::config::DEFAULT_MAX_CONTENT_LENGTH)]
    pub max_length: usize,

    /// text-content: replace line breaks with spaces.
    #[arg(long = "single-line", help = "text-content: replace line breaks with spaces.")]
    pub single_line: bool,

    /// text-content: keep runs of spaces and blank lines.
    #[arg(long = "keep-whitespace", help = "text-content: keep runs of spaces and blank lines.")]
    pub keep_whitespace: bool,

    /// url: accept only http, https, ftp, mailto and relative URLs.
    #[arg(long, help = "url: accept only http, https, ftp, mailto and relative URLs.")]
    pub strict: bool,
}

/// Arguments for the `form` command.
#[derive(Args, Debug)]
pub struct FormCommand {
    /// Path to the YAML form schema.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Path to a JSON object of field values (reads from stdin if not provided).
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,
}

/// Command-line names for [`ValidationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Email,
    Phone,
    Password,
    Url,
    Text,
    Numeric,
    Date,
    Coordinates,
}

impl From<KindArg> for ValidationKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Email => ValidationKind::Email,
            KindArg::Phone => ValidationKind::Phone,
            KindArg::Password => ValidationKind::Password,
            KindArg::Url => ValidationKind::Url,
            KindArg::Text => ValidationKind::Text,
            KindArg::Numeric => ValidationKind::Numeric,
            KindArg::Date => ValidationKind::Date,
            KindArg::Coordinates => ValidationKind::Coordinates,
        }
    }
}

/// Command-line names for [`SanitizationContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextArg {
    HtmlContent,
    HtmlAttribute,
    Url,
    #[value(alias = "json-string-content")]
    Json,
    Filename,
    Email,
    Username,
    SearchQuery,
    TextContent,
    SqlLiteral,
    SqlIdentifier,
}

impl From<ContextArg> for SanitizationContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::HtmlContent => SanitizationContext::HtmlContent,
            ContextArg::HtmlAttribute => SanitizationContext::HtmlAttribute,
            ContextArg::Url => SanitizationContext::Url,
            ContextArg::Json => SanitizationContext::Json,
            ContextArg::Filename => SanitizationContext::Filename,
            ContextArg::Email => SanitizationContext::Email,
            ContextArg::Username => SanitizationContext::Username,
            ContextArg::SearchQuery => SanitizationContext::SearchQuery,
            ContextArg::TextContent => SanitizationContext::TextContent,
            ContextArg::SqlLiteral => SanitizationContext::SqlLiteral,
            ContextArg::SqlIdentifier => SanitizationContext::SqlIdentifier,
        }
    }
}

/// Command-line names for [`MarkupPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkupArg {
    Escape,
    StripTags,
    AllowFormatting,
}

impl From<MarkupArg> for MarkupPolicy {
    fn from(arg: MarkupArg) -> Self {
        match arg {
            MarkupArg::Escape => MarkupPolicy::Escape,
            MarkupArg::StripTags => MarkupPolicy::StripTags,
            MarkupArg::AllowFormatting => MarkupPolicy::AllowFormatting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn value_enum_names_match_core_tags() {
        for arg in KindArg::value_variants() {
            let name = arg.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(name.as_deref(), Some(ValidationKind::from(*arg).as_str()));
        }
        for arg in ContextArg::value_variants() {
            let name = arg.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(name.as_deref(), Some(SanitizationContext::from(*arg).as_str()));
        }
    }

    #[test]
    fn parses_sanitize_flags() {
        let cli = Cli::try_parse_from([
            "inputguard", "sanitize", "text-content", "a\nb", "--single-line", "--max-length", "50",
        ])
        .unwrap();
        match cli.command {
            Commands::Sanitize(cmd) => {
                assert_eq!(cmd.context, ContextArg::TextContent);
                assert!(cmd.single_line);
                assert_eq!(cmd.max_length, 50);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
