// inputguard-core/src/sanitizers/url.rs
//! `url` sanitizer.
//!
//! This is a block-list: only schemes that execute or embed content are
//! refused. Validation of a URL ([`crate::validators::url`]) is the stricter
//! http/https allow-list and lives behind its own entry point.
//!
//! License: MIT OR APACHE 2.0

/// Schemes whose URLs are replaced by an empty string.
pub const DANGEROUS_PROTOCOLS: [&str; 4] = ["javascript:", "vbscript:", "data:", "file:"];

/// Schemes accepted by [`sanitize_url_strict`].
pub const SAFE_PROTOCOLS: [&str; 4] = ["http:", "https:", "ftp:", "mailto:"];

/// Lower-cased scheme probe. Browsers ignore tabs and newlines inside a
/// scheme, so `java\tscript:` must be caught too.
fn scheme_probe(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Returns the trimmed URL, or an empty string if it uses a dangerous scheme.
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let probe = scheme_probe(trimmed);
    if DANGEROUS_PROTOCOLS.iter().any(|scheme| probe.starts_with(scheme)) {
        return String::new();
    }
    trimmed.to_string()
}

/// Like [`sanitize_url`], but only `http`, `https`, `ftp`, `mailto` and
/// scheme-less (relative) URLs survive.
pub fn sanitize_url_strict(raw: &str) -> String {
    let trimmed = raw.trim();
    let probe = scheme_probe(trimmed);

    let scheme_end = probe.find(':');
    let path_start = probe.find(['/', '?', '#']);
    let has_scheme = match (scheme_end, path_start) {
        (Some(colon), Some(path)) => colon < path,
        (Some(_), None) => true,
        _ => false,
    };

    if has_scheme && !SAFE_PROTOCOLS.iter().any(|scheme| probe.starts_with(scheme)) {
        return String::new();
    }
    trimmed.to_string()
}
