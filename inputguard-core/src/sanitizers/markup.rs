// inputguard-core/src/sanitizers/markup.rs
//! Sanitizers for text placed inside an HTML element body.
//!
//! `html-content` applies the configured [`MarkupPolicy`] and truncates.
//! `text-content` additionally drops control characters and normalises line
//! breaks and whitespace before truncating.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{MarkupPolicy, SanitizeOptions};
use crate::primitives::html::escape_html;

/// Appended to any value cut down to `max_length`.
pub const TRUNCATION_SUFFIX: &str = "...";

/// Paired formatting tags kept by [`MarkupPolicy::AllowFormatting`].
pub const ALLOWED_FORMATTING_TAGS: [&str; 5] = ["b", "i", "em", "strong", "u"];

static ANY_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static NAMED_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(/?)([a-z][a-z0-9]*)\b[^>]*>").expect("named tag pattern is valid")
});

static CONTROL_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").expect("control char pattern is valid")
});

static LINE_BREAK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

static INLINE_WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("inline whitespace pattern is valid"));

static BLANK_LINES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank lines pattern is valid"));

/// Sanitizes a value for an HTML element body.
pub fn sanitize_html_content(raw: &str, options: &SanitizeOptions) -> String {
    let cleaned = apply_markup_policy(raw, options.markup);
    truncate_for_policy(&cleaned, options)
}

/// Sanitizes free text for display, normalising control characters,
/// line breaks and whitespace.
pub fn sanitize_text_content(raw: &str, options: &SanitizeOptions) -> String {
    let without_controls = CONTROL_CHAR_REGEX.replace_all(raw, "");
    let mut cleaned = apply_markup_policy(&without_controls, options.markup);

    cleaned = if options.allow_line_breaks {
        LINE_BREAK_REGEX.replace_all(&cleaned, "\n").into_owned()
    } else {
        LINE_BREAK_REGEX.replace_all(&cleaned, " ").into_owned()
    };

    if options.remove_extra_whitespace {
        cleaned = INLINE_WHITESPACE_REGEX.replace_all(&cleaned, " ").into_owned();
        cleaned = BLANK_LINES_REGEX.replace_all(&cleaned, "\n\n").into_owned();
    }

    truncate_for_policy(cleaned.trim(), options)
}

fn apply_markup_policy(raw: &str, policy: MarkupPolicy) -> String {
    match policy {
        MarkupPolicy::Escape => escape_html(raw),
        MarkupPolicy::StripTags => escape_html(&ANY_TAG_REGEX.replace_all(raw, "")),
        MarkupPolicy::AllowFormatting => keep_formatting_tags(raw),
    }
}

/// Escapes every text segment, re-emits allow-listed tags without their
/// attributes and drops all other tags.
fn keep_formatting_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;

    for caps in NAMED_TAG_REGEX.captures_iter(raw) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&escape_html(&raw[last..whole.start()]));

        let name = caps[2].to_ascii_lowercase();
        if ALLOWED_FORMATTING_TAGS.contains(&name.as_str()) {
            out.push('<');
            out.push_str(&caps[1]);
            out.push_str(&name);
            out.push('>');
        }
        last = whole.end();
    }

    out.push_str(&escape_html(&raw[last..]));
    out
}

fn truncate_for_policy(text: &str, options: &SanitizeOptions) -> String {
    match options.markup {
        MarkupPolicy::AllowFormatting => truncate_balanced(text, options.max_length),
        MarkupPolicy::Escape | MarkupPolicy::StripTags => truncate(text, options.max_length),
    }
}

/// Truncates formatted output and closes every allow-listed tag the cut left
/// open. The closing tags count towards `max_length`.
fn truncate_balanced(text: &str, max_length: usize) -> String {
    let mut budget = max_length;
    loop {
        let cut = truncate(text, budget);
        let closers = closing_tags(&cut);
        if budget == 0 || cut.chars().count() + closers.len() <= max_length {
            return cut + &closers;
        }
        budget -= 1;
    }
}

/// Closing tags, innermost first, for the formatting tags still open in `text`.
fn closing_tags(text: &str) -> String {
    let mut open: Vec<String> = Vec::new();
    for caps in NAMED_TAG_REGEX.captures_iter(text) {
        let name = caps[2].to_ascii_lowercase();
        if !ALLOWED_FORMATTING_TAGS.contains(&name.as_str()) {
            continue;
        }
        if caps[1].is_empty() {
            open.push(name);
        } else if let Some(pos) = open.iter().rposition(|tag| *tag == name) {
            open.remove(pos);
        }
    }
    open.iter().rev().map(|tag| format!("</{}>", tag)).collect()
}

/// Cuts `text` to at most `max_length` characters including the suffix.
///
/// The cut never leaves half an entity (`&am`) or half a tag (`<str`)
/// dangling before the suffix. A cap shorter than the suffix keeps only that
/// many dots.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    if max_length < TRUNCATION_SUFFIX.len() {
        return TRUNCATION_SUFFIX.chars().take(max_length).collect();
    }

    let keep = max_length.saturating_sub(TRUNCATION_SUFFIX.len());
    let mut cut: String = text.chars().take(keep).collect();

    if let Some(amp) = cut.rfind('&') {
        if !cut[amp..].contains(';') {
            cut.truncate(amp);
        }
    }
    if let Some(lt) = cut.rfind('<') {
        if !cut[lt..].contains('>') {
            cut.truncate(lt);
        }
    }

    cut.push_str(TRUNCATION_SUFFIX);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_markup(markup: MarkupPolicy) -> SanitizeOptions {
        SanitizeOptions { markup, ..Default::default() }
    }

    #[test]
    fn escapes_script_by_default() {
        let out = sanitize_html_content("<script>alert('x')</script>", &SanitizeOptions::default());
        assert_eq!(
            out,
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt;"
        );
        assert!(!out.contains('<'));
    }

    #[test]
    fn strip_tags_removes_markup_then_escapes() {
        let out = sanitize_html_content(
            "<p onclick=\"x()\">Tom & Jerry</p><br/>",
            &with_markup(MarkupPolicy::StripTags),
        );
        assert_eq!(out, "Tom &amp; Jerry");
    }

    #[test]
    fn allow_formatting_keeps_only_listed_tags() {
        let out = sanitize_html_content(
            "<B class=\"x\">bold</B> <script>bad()</script><em>ok</em>",
            &with_markup(MarkupPolicy::AllowFormatting),
        );
        assert_eq!(out, "<b>bold</b> bad()<em>ok</em>");
    }

    #[test]
    fn allow_formatting_escapes_stray_brackets() {
        let out = sanitize_html_content("1 < 2 <i>yes</i>", &with_markup(MarkupPolicy::AllowFormatting));
        assert_eq!(out, "1 &lt; 2 <i>yes</i>");
    }

    #[test]
    fn truncates_with_suffix() {
        let options = SanitizeOptions { max_length: 10, ..Default::default() };
        let out = sanitize_html_content("abcdefghijklmnop", &options);
        assert_eq!(out, "abcdefg...");
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn truncation_backs_off_partial_entity() {
        assert_eq!(truncate("ab&amp;cdefgh", 8), "ab...");
        assert_eq!(truncate("ab<strong>cdefgh", 9), "ab...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn tiny_caps_never_exceed_max_length() {
        assert_eq!(truncate("abcdef", 0), "");
        assert_eq!(truncate("abcdef", 1), ".");
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("abcdef", 3), "...");
        let options = SanitizeOptions { max_length: 1, ..Default::default() };
        assert_eq!(sanitize_text_content("hello world", &options), ".");
    }

    #[test]
    fn truncated_formatting_tags_are_closed() {
        let options = SanitizeOptions {
            markup: MarkupPolicy::AllowFormatting,
            max_length: 12,
            ..Default::default()
        };
        let out = sanitize_html_content("<b>abcdefgh</b>", &options);
        assert_eq!(out, "<b>ab...</b>");

        let options = SanitizeOptions { max_length: 6, ..options };
        let out = sanitize_html_content("<b>abcdefgh</b>", &options);
        assert_eq!(out, "...");
    }

    #[test]
    fn nested_formatting_tags_close_innermost_first() {
        assert_eq!(closing_tags("<b>x<i>y"), "</i></b>");
        assert_eq!(closing_tags("<b>x</b><em>y"), "</em>");
        assert_eq!(closing_tags("<b>x</b>"), "");
        let out = truncate_balanced("<strong><u>abcdefghijklmnop</u></strong>", 30);
        assert_eq!(out, "<strong><u>abc...</u></strong>");
        assert!(out.chars().count() <= 30);
    }

    #[test]
    fn text_content_normalises_whitespace() {
        let raw = "  Hello\u{0007}   world\r\n\r\n\r\n\r\nBye\t\tnow  ";
        let out = sanitize_text_content(raw, &SanitizeOptions::default());
        assert_eq!(out, "Hello world\n\nBye now");
    }

    #[test]
    fn text_content_can_flatten_line_breaks() {
        let options = SanitizeOptions { allow_line_breaks: false, ..Default::default() };
        let out = sanitize_text_content("one\ntwo\r\nthree", &options);
        assert_eq!(out, "one two three");
    }

    #[test]
    fn text_content_escapes_markup() {
        let out = sanitize_text_content("<b>hi</b>", &SanitizeOptions::default());
        assert_eq!(out, "&lt;b&gt;hi&lt;&#x2F;b&gt;");
    }
}
