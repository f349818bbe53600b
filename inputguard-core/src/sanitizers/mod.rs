//! Context-aware sanitizers.
//!
//! Each destination context has its own rule set. A caller names the context
//! with a [`SanitizationContext`] and [`sanitize`] applies exactly that rule
//! set. Every sanitizer is a pure, infallible string transform: absent or
//! empty input always yields an empty string.
//!
//! * `markup`: `html-content` and `text-content` (escape, strip or allow-list tags).
//! * `attribute`: `html-attribute` (strip quotes, script protocols, event handlers).
//! * `url`: `url` (block dangerous schemes, optional strict allow-list).
//! * `filename`: `filename` (strip characters illegal on common file systems).
//! * `identity`: `email`, `username`, `search-query`.
//! * `escape`: `json`, `sql-literal`, `sql-identifier`.

pub mod attribute;
pub mod escape;
pub mod filename;
pub mod identity;
pub mod markup;
pub mod url;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::SanitizeOptions;
use crate::errors::InputGuardError;
use crate::redaction::log_sanitization_debug;

/// Destination context that selects a sanitization rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SanitizationContext {
    HtmlContent,
    HtmlAttribute,
    Url,
    #[serde(alias = "json-string-content")]
    Json,
    Filename,
    Email,
    Username,
    SearchQuery,
    TextContent,
    SqlLiteral,
    SqlIdentifier,
}

impl SanitizationContext {
    pub const ALL: [SanitizationContext; 11] = [
        SanitizationContext::HtmlContent,
        SanitizationContext::HtmlAttribute,
        SanitizationContext::Url,
        SanitizationContext::Json,
        SanitizationContext::Filename,
        SanitizationContext::Email,
        SanitizationContext::Username,
        SanitizationContext::SearchQuery,
        SanitizationContext::TextContent,
        SanitizationContext::SqlLiteral,
        SanitizationContext::SqlIdentifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SanitizationContext::HtmlContent => "html-content",
            SanitizationContext::HtmlAttribute => "html-attribute",
            SanitizationContext::Url => "url",
            SanitizationContext::Json => "json",
            SanitizationContext::Filename => "filename",
            SanitizationContext::Email => "email",
            SanitizationContext::Username => "username",
            SanitizationContext::SearchQuery => "search-query",
            SanitizationContext::TextContent => "text-content",
            SanitizationContext::SqlLiteral => "sql-literal",
            SanitizationContext::SqlIdentifier => "sql-identifier",
        }
    }

    /// Contexts whose output is stable under a second pass. Escaping contexts
    /// are excluded: escaping `&amp;` again yields `&amp;amp;`.
    pub fn is_idempotent(&self) -> bool {
        !matches!(
            self,
            SanitizationContext::HtmlContent
                | SanitizationContext::TextContent
                | SanitizationContext::Json
                | SanitizationContext::SqlLiteral
        )
    }
}

impl fmt::Display for SanitizationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SanitizationContext {
    type Err = InputGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if tag == "json-string-content" {
            return Ok(SanitizationContext::Json);
        }
        SanitizationContext::ALL
            .into_iter()
            .find(|context| context.as_str() == tag)
            .ok_or_else(|| InputGuardError::UnknownContext(s.to_string()))
    }
}

/// Sanitizes `raw` for placement in `context`.
pub fn sanitize(context: SanitizationContext, raw: Option<&str>, options: &SanitizeOptions) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    let sanitized = match context {
        SanitizationContext::HtmlContent => markup::sanitize_html_content(raw, options),
        SanitizationContext::TextContent => markup::sanitize_text_content(raw, options),
        SanitizationContext::HtmlAttribute => attribute::sanitize_html_attribute(raw),
        SanitizationContext::Url if options.strict_protocols => url::sanitize_url_strict(raw),
        SanitizationContext::Url => url::sanitize_url(raw),
        SanitizationContext::Json => escape::escape_json_string(raw),
        SanitizationContext::Filename => filename::sanitize_filename(raw),
        SanitizationContext::Email => identity::sanitize_email(raw),
        SanitizationContext::Username => identity::sanitize_username(raw),
        SanitizationContext::SearchQuery => identity::sanitize_search_query(raw),
        SanitizationContext::SqlLiteral => escape::escape_sql_literal(raw),
        SanitizationContext::SqlIdentifier => escape::sanitize_sql_identifier(raw),
    };

    log_sanitization_debug(context, raw, &sanitized);
    sanitized
}
