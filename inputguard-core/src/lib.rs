// inputguard-core/src/lib.rs
//! # InputGuard Core Library
//!
//! `inputguard-core` provides the platform-independent logic for checking and
//! cleaning untrusted text before it reaches a template, a URL, a file system
//! or a database. It has two halves:
//!
//! * **Validation** decides whether a value is acceptable as a semantic type
//!   (email, phone, password, URL, free text, number, date, coordinates) and
//!   returns a [`ValidationResult`] listing every rule the value broke, plus a
//!   cleaned or formatted form of it.
//! * **Sanitization** rewrites a value so it is safe for a named destination
//!   context (HTML body, HTML attribute, URL, JSON string, filename, ...).
//!   It never fails and never reports errors.
//!
//! The library is pure and synchronous. Apart from the compiled-pattern cache
//! it keeps no state between calls, performs no I/O outside
//! [`FormSchema::load_from_file`], and is safe to call from many threads.
//!
//! ## Modules
//!
//! * `config`: Option records for every kind and context, and [`FormSchema`].
//! * `validators`: One validator per [`ValidationKind`] plus the [`validate`] dispatcher.
//! * `sanitizers`: One rule set per [`SanitizationContext`] plus the [`sanitize`] dispatcher.
//! * `result`: [`ValidationResult`] and its type-specific [`ValidationDetails`].
//! * `engine`: The [`Validator`] trait implemented by every option record.
//! * `form`: Whole-form validation against a schema.
//! * `headless`: One-shot entry points keyed by string tags.
//! * `compiler`: Cached compilation of caller-supplied patterns.
//! * `primitives`: Entity maps, password tables, number and date helpers.
//! * `redaction`: Debug logging that keeps raw input out of logs.
//! * `errors`: [`InputGuardError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use inputguard_core::{
//!     sanitize, validate, SanitizationContext, SanitizeOptions, ValidationKind,
//! };
//!
//! # fn main() -> Result<(), inputguard_core::InputGuardError> {
//! // 1. Validate a field with the default options for its kind.
//! let email = validate(ValidationKind::Email, Some("  Jane@Example.com "), None)?;
//! assert!(email.is_valid());
//! assert_eq!(email.cleaned(), "jane@example.com");
//!
//! // 2. Every broken rule is reported, not just the first.
//! let password = validate(ValidationKind::Password, Some("abc"), None)?;
//! assert!(!password.is_valid());
//! assert!(password.errors().len() > 1);
//!
//! // 3. Sanitize a value for the place it will be rendered.
//! let options = SanitizeOptions::default();
//! let safe = sanitize(SanitizationContext::HtmlContent, Some("<script>x</script>"), &options);
//! assert_eq!(safe, "&lt;script&gt;x&lt;&#x2F;script&gt;");
//! assert_eq!(sanitize(SanitizationContext::Url, Some("javascript:alert(1)"), &options), "");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! A value that breaks a rule is data, not an error. [`InputGuardError`] is
//! only returned for caller mistakes: an unknown kind or context tag, options
//! of the wrong kind or shape, or a custom pattern that does not compile.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod compiler;
pub mod config;
pub mod engine;
pub mod errors;
pub mod form;
pub mod headless;
pub mod primitives;
pub mod redaction;
pub mod result;
pub mod sanitizers;
pub mod validators;

/// Re-exports the option records, form schema and shared limits.
pub use config::{
    CoordinateOptions, DateBound, DateOptions, EmailOptions, FormSchema, MarkupPolicy,
    NumericOptions, NumericType, PasswordOptions, PhoneMode, PhoneOptions, SanitizeOptions,
    TextOptions, UrlOptions, MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::InputGuardError;

/// Re-exports the trait every option record implements.
pub use engine::Validator;

/// Re-exports the validation result and its details.
pub use result::{PasswordStrength, ValidationDetails, ValidationResult};

/// Re-exports the validation dispatcher and its tags.
pub use validators::{validate, ValidationKind, ValidationOptions};

/// Re-exports the sanitization dispatcher and its tags.
pub use sanitizers::{sanitize, SanitizationContext};

/// Re-exports whole-form validation.
pub use form::{validate_form, FormReport};

/// Re-exports types and functions for one-shot, tag-driven use.
pub use headless::{headless_sanitize, headless_validate, headless_validate_json, options_from_json};

/// Re-exports the PII-safe redaction helper.
pub use redaction::redact_sensitive;
