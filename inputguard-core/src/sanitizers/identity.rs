// inputguard-core/src/sanitizers/identity.rs
//! Sanitizers for identifiers typed by users: `email`, `username` and
//! `search-query`. Each keeps a conservative character set and caps length.
//!
//! License: MIT OR APACHE 2.0

/// Longest username kept by [`sanitize_username`].
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Longest query kept by [`sanitize_search_query`].
pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

const SEARCH_QUERY_STRIPPED: [char; 4] = ['<', '>', '\'', '"'];

fn is_email_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '@' | '.' | '_' | '-')
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-')
}

/// Lower-cases and trims, then keeps only `[a-z0-9@._-]`.
pub fn sanitize_email(raw: &str) -> String {
    raw.to_lowercase().trim().chars().filter(|c| is_email_char(*c)).collect()
}

/// Lower-cases and trims, keeps only `[a-z0-9_-]` and caps at 30 characters.
pub fn sanitize_username(raw: &str) -> String {
    raw.to_lowercase()
        .trim()
        .chars()
        .filter(|c| is_username_char(*c))
        .take(MAX_USERNAME_LENGTH)
        .collect()
}

/// Drops angle brackets and quotes, trims and caps at 100 characters.
pub fn sanitize_search_query(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !SEARCH_QUERY_STRIPPED.contains(c)).collect();
    let capped: String = stripped.trim().chars().take(MAX_SEARCH_QUERY_LENGTH).collect();
    capped.trim_end().to_string()
}
