//! HTML entity escaping for the six guarded characters.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Guarded characters and their entities. `'` uses the hex form rather than
/// `&apos;`, and `/` is escaped so a value cannot close a tag.
pub const HTML_ESCAPE_MAP: [(char, &str); 6] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#x27;"),
    ('/', "&#x2F;"),
];

static HTML_ENTITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(amp|lt|gt|quot|#x27|#x2F);").expect("entity pattern is valid"));

fn entity_for(c: char) -> Option<&'static str> {
    HTML_ESCAPE_MAP
        .iter()
        .find(|(guarded, _)| *guarded == c)
        .map(|(_, entity)| *entity)
}

/// Escapes `& < > " ' /`. Each input character is visited once, so an `&`
/// produced by an entity is never escaped again.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match entity_for(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    escaped
}

/// Reverses [`escape_html`]. Only the six entities it produces are decoded.
pub fn unescape_html(text: &str) -> String {
    HTML_ENTITY_REGEX
        .replace_all(text, |caps: &Captures| {
            let raw = match &caps[1] {
                "amp" => "&",
                "lt" => "<",
                "gt" => ">",
                "quot" => "\"",
                "#x27" => "'",
                _ => "/",
            };
            raw.to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_script_tag() {
        assert_eq!(
            escape_html("<script>alert('XSS')</script>"),
            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn ampersand_is_not_double_escaped_within_a_pass() {
        assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
    }

    #[test]
    fn unescape_reverses_escape() {
        for text in [
            "Hello \"World\" & everyone!",
            "Path: C:/Users/Documents",
            "&amp; already looks escaped",
            "<div class='test'>Content</div>",
        ] {
            assert_eq!(unescape_html(&escape_html(text)), text);
        }
    }

    #[test]
    fn unescape_leaves_unknown_entities() {
        assert_eq!(unescape_html("&nbsp;&lt;"), "&nbsp;<");
    }
}
