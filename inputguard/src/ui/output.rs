// inputguard/src/ui/output.rs
//! Human-readable reports for validation, sanitization and form results.
//!
//! Every printer takes the writer and a `supports_color` flag so callers decide
//! whether the stream is a terminal. Colors come from the [`ThemeMap`].

use owo_colors::OwoColorize;
use std::io::{self, Write};

use inputguard_core::{FormReport, ValidationDetails, ValidationResult};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` when color is enabled.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> String {
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) if supports_color => text.color(color.to_ansi_color()).to_string(),
        _ => text.to_string(),
    }
}

fn print_tagged_message<W: Write>(
    writer: &mut W,
    tag: &str,
    entry: ThemeEntry,
    msg: &str,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", paint(tag, entry, theme, supports_color), msg)
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_tagged_message(writer, "[info]", ThemeEntry::Info, msg, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_tagged_message(writer, "[warn]", ThemeEntry::Warn, msg, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_tagged_message(writer, "[error]", ThemeEntry::Error, msg, theme, supports_color)
}

fn print_labelled<W: Write>(
    writer: &mut W,
    label: &str,
    value: &str,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "  {} {}", paint(&format!("{}:", label), ThemeEntry::Label, theme, supports_color), value)
}

/// Prints one validation result under `title`.
///
/// ```text
/// email: invalid
///   - Email cannot contain consecutive dots
///   cleaned: test..test@domain.com
/// ```
pub fn print_validation_report<W: Write>(
    writer: &mut W,
    title: &str,
    result: &ValidationResult,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let verdict = if result.is_valid() {
        paint("valid", ThemeEntry::Valid, theme, supports_color)
    } else {
        paint("invalid", ThemeEntry::Invalid, theme, supports_color)
    };
    writeln!(writer, "{}: {}", paint(title, ThemeEntry::Header, theme, supports_color), verdict)?;

    for error in result.errors() {
        writeln!(writer, "  - {}", paint(error, ThemeEntry::RuleError, theme, supports_color))?;
    }
    if !result.cleaned().is_empty() {
        print_labelled(writer, "cleaned", result.cleaned(), theme, supports_color)?;
    }
    if !result.formatted().is_empty() {
        print_labelled(writer, "formatted", result.formatted(), theme, supports_color)?;
    }

    match result.details() {
        Some(ValidationDetails::Password { score, strength, suggestions }) => {
            print_labelled(writer, "strength", &format!("{} ({}/7)", strength, score), theme, supports_color)?;
            for suggestion in suggestions {
                writeln!(writer, "  * {}", paint(suggestion, ThemeEntry::Suggestion, theme, supports_color))?;
            }
        }
        Some(ValidationDetails::Text { word_count, char_count }) => {
            print_labelled(writer, "words", &word_count.to_string(), theme, supports_color)?;
            print_labelled(writer, "chars", &char_count.to_string(), theme, supports_color)?;
        }
        Some(ValidationDetails::Numeric { value }) => {
            print_labelled(writer, "value", &value.to_string(), theme, supports_color)?;
        }
        Some(ValidationDetails::Date { date }) => {
            print_labelled(writer, "date", &date.to_string(), theme, supports_color)?;
        }
        Some(ValidationDetails::Url { protocol, domain, path }) => {
            print_labelled(writer, "protocol", protocol, theme, supports_color)?;
            print_labelled(writer, "domain", domain, theme, supports_color)?;
            print_labelled(writer, "path", path, theme, supports_color)?;
        }
        Some(ValidationDetails::Coordinates { lat, lon }) => {
            print_labelled(writer, "lat", &lat.to_string(), theme, supports_color)?;
            print_labelled(writer, "lon", &lon.to_string(), theme, supports_color)?;
        }
        None => {}
    }
    Ok(())
}

/// Prints every field of a form report, then a one-line summary.
pub fn print_form_report<W: Write>(
    writer: &mut W,
    report: &FormReport,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    for (field, result) in &report.results {
        print_validation_report(writer, field, result, theme, supports_color)?;
    }

    let invalid = report.invalid_fields().count();
    let summary = format!("{} fields checked, {} invalid", report.results.len(), invalid);
    let entry = if report.is_valid { ThemeEntry::Valid } else { ThemeEntry::Invalid };
    writeln!(writer, "{}", paint(&summary, entry, theme, supports_color))
}
