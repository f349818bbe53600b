// inputguard-core/src/sanitizers/attribute.rs
//! `html-attribute` sanitizer.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

static ATTRIBUTE_BREAKING_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>"'&]"#).expect("attribute chars pattern is valid"));

static SCRIPT_PROTOCOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:javascript|vbscript|data):").expect("script protocol pattern is valid")
});

static EVENT_HANDLER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on[a-z0-9_]+=").expect("event handler pattern is valid"));

fn strip_once(value: &str) -> String {
    let value = ATTRIBUTE_BREAKING_CHARS.replace_all(value, "");
    let value = SCRIPT_PROTOCOL_REGEX.replace_all(&value, "");
    let value = EVENT_HANDLER_REGEX.replace_all(&value, "");
    value.trim().to_string()
}

/// Removes quote and markup characters, script protocols and event-handler
/// assignments from a value destined for an HTML attribute.
///
/// Removal can splice a new match together (`javajavascript:script:`), so the
/// rules repeat until nothing changes.
pub fn sanitize_html_attribute(raw: &str) -> String {
    let mut current = strip_once(raw);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_breaking_characters() {
        assert_eq!(sanitize_html_attribute(r#"" onmouseover="alert(1)"#), "alert(1)");
        assert_eq!(sanitize_html_attribute("Tom & 'Jerry'"), "Tom  Jerry");
    }

    #[test]
    fn strips_protocols_anywhere() {
        assert_eq!(sanitize_html_attribute("JavaScript:alert(1)"), "alert(1)");
        assert_eq!(sanitize_html_attribute("x vbscript:y data:z"), "x y z");
    }

    #[test]
    fn strips_spliced_protocols() {
        assert_eq!(sanitize_html_attribute("javajavascript:script:alert(1)"), "alert(1)");
        assert_eq!(sanitize_html_attribute("oonclick=nload=run()"), "run()");
    }

    #[test]
    fn output_is_stable() {
        let once = sanitize_html_attribute("  <a onload=x> data:text ");
        assert_eq!(sanitize_html_attribute(&once), once);
    }
}
