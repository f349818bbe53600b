// inputguard-core/src/sanitizers/filename.rs
//! `filename` sanitizer.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest filename most file systems accept.
pub const MAX_FILENAME_LENGTH: usize = 255;

static ILLEGAL_FILENAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).expect("illegal filename chars pattern is valid")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Produces a name safe to use as a single path component.
///
/// Surrounding whitespace is trimmed first, so padding never turns into a
/// leading or trailing `_`. Characters illegal on Windows or POSIX file
/// systems and all control characters are then removed, whitespace runs
/// become `_`, the result is capped at 255 characters and leading or trailing
/// dots are dropped last so the cap cannot expose a new trailing dot.
pub fn sanitize_filename(raw: &str) -> String {
    let stripped = ILLEGAL_FILENAME_CHARS.replace_all(raw.trim(), "");
    let underscored = WHITESPACE_RUN.replace_all(&stripped, "_");
    let capped: String = underscored.chars().take(MAX_FILENAME_LENGTH).collect();
    capped.trim_matches('.').to_string()
}
