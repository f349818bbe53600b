// inputguard-core/src/sanitizers/escape.rs
//! Escapers for values embedded in JSON string literals and SQL text.
//!
//! These are for the places where a value must be spliced into a literal.
//! Prefer a serializer or a parameterised query whenever one is available.
//!
//! License: MIT OR APACHE 2.0

/// Escapes backslash, double quote, newline, carriage return and tab so the
/// value can sit between the quotes of a JSON string.
pub fn escape_json_string(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escapes a value for a single-quoted SQL string literal.
pub fn escape_sql_literal(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\'' => escaped.push_str("''"),
            '\\' => escaped.push_str("\\\\"),
            '\0' => escaped.push_str("\\0"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{1A}' => escaped.push_str("\\Z"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Keeps only `[A-Za-z0-9_]`, for table and column names.
pub fn sanitize_sql_identifier(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect()
}
