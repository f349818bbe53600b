// inputguard-core/tests/contract_tests.rs
//! Behavioural contract of the public `validate` / `sanitize` surface.

use anyhow::Result;
use inputguard_core::primitives::html::{escape_html, unescape_html};
use inputguard_core::{
    sanitize, validate, EmailOptions, MarkupPolicy, NumericOptions, NumericType,
    PasswordStrength, SanitizationContext, SanitizeOptions, TextOptions, ValidationKind,
    ValidationOptions,
};
use test_log::test;

/// Inputs chosen to trip every rule set at least once.
const HOSTILE_INPUTS: &[&str] = &[
    "<script>alert('xss')</script>",
    "\" onmouseover=\"alert(1)",
    "javascript:alert(document.cookie)",
    "  JaVaScRiPt:void(0)  ",
    "javajavascript:script:x",
    "../../etc/passwd",
    "..hidden file .txt..",
    "Robert'); DROP TABLE students;--",
    "tab\there\r\nnew\u{0000}line\u{001F}",
    "   padded   value   ",
    "Ünïcödé <b>bold</b> & more",
    "data:text/html;base64,PHNjcmlwdD4=",
    "a@b..c@@d.e",
    "''''\"\"\"\"<<<>>>",
    "...",
];

#[test]
fn stripping_contexts_are_idempotent() {
    let options = SanitizeOptions::default();
    for context in SanitizationContext::ALL.into_iter().filter(|c| c.is_idempotent()) {
        for input in HOSTILE_INPUTS {
            let once = sanitize(context, Some(input), &options);
            let twice = sanitize(context, Some(&once), &options);
            assert_eq!(twice, once, "context {} is not stable for {:?}", context, input);
        }
    }
}

#[test]
fn escape_round_trips() {
    for input in ["&<>\"'/", "Tom & Jerry's <b>/path</b>", "plain text", "&amp; literal"] {
        assert_eq!(unescape_html(&escape_html(input)), input);
    }
}

#[test]
fn escaped_html_content_never_contains_angle_brackets() {
    for markup in [MarkupPolicy::Escape, MarkupPolicy::StripTags] {
        let options = SanitizeOptions { markup, ..Default::default() };
        for input in HOSTILE_INPUTS {
            let out = sanitize(SanitizationContext::HtmlContent, Some(input), &options);
            assert!(!out.contains(['<', '>']), "{:?} produced {:?}", input, out);
        }
    }
}

#[test]
fn email_examples() -> Result<()> {
    let ok = validate(ValidationKind::Email, Some("test@example.com"), None)?;
    assert!(ok.is_valid());
    assert_eq!(ok.cleaned(), "test@example.com");

    let bad = validate(ValidationKind::Email, Some("test..test@domain.com"), None)?;
    assert!(!bad.is_valid());
    assert!(bad.errors().iter().any(|e| e == "Email cannot contain consecutive dots"));
    Ok(())
}

#[test]
fn phone_example() -> Result<()> {
    let result = validate(ValidationKind::Phone, Some("(555) 123-4567"), None)?;
    assert!(result.is_valid());
    assert_eq!(result.formatted(), "(555) 123-4567");
    Ok(())
}

#[test]
fn common_password_fails_several_checks() -> Result<()> {
    let result = validate(ValidationKind::Password, Some("password123"), None)?;
    assert!(!result.is_valid());
    for expected in [
        "Password must contain at least one uppercase letter",
        "Password must contain at least one special character (@$!%*?&)",
        "Password is too common",
    ] {
        assert!(result.errors().iter().any(|e| e == expected), "missing {:?}", expected);
    }
    assert_eq!(result.cleaned(), "");
    Ok(())
}

#[test]
fn strong_password_scores_high() -> Result<()> {
    let result = validate(ValidationKind::Password, Some("P@ssw0rd123"), None)?;
    assert!(result.score().unwrap_or_default() >= 6);
    assert_eq!(result.strength(), Some(PasswordStrength::Strong));

    let clean = validate(ValidationKind::Password, Some("Gr8!Wombat#Tea"), None)?;
    assert!(clean.is_valid(), "errors: {:?}", clean.errors());
    assert_eq!(clean.score(), Some(7));
    Ok(())
}

#[test]
fn sanitize_examples() {
    let options = SanitizeOptions::default();
    assert_eq!(sanitize(SanitizationContext::Url, Some("javascript:alert(1)"), &options), "");

    let name = sanitize(SanitizationContext::Filename, Some("my<file>name?.txt"), &options);
    assert!(!name.contains(['<', '>', '?', ':']));
    assert!(!name.starts_with('.') && !name.ends_with('.'));
}

#[test]
fn numbers_in_range_validate_and_parse_back() -> Result<()> {
    let options = ValidationOptions::Numeric(NumericOptions {
        numeric_type: NumericType::Decimal,
        min: Some(-50.0),
        max: Some(5000.0),
        ..Default::default()
    });
    for (raw, expected) in [("0", 0.0), ("-50", -50.0), ("12.75", 12.75), ("4,999.5", 4999.5)] {
        let result = validate(ValidationKind::Numeric, Some(raw), Some(&options))?;
        assert!(result.is_valid(), "{} rejected: {:?}", raw, result.errors());
        assert_eq!(result.value(), Some(expected));
    }
    Ok(())
}

#[test]
fn absent_input_respects_required() -> Result<()> {
    let optional = ValidationOptions::Email(EmailOptions { required: false });
    let result = validate(ValidationKind::Email, None, Some(&optional))?;
    assert!(result.is_valid());
    assert!(result.errors().is_empty());

    for kind in ValidationKind::ALL {
        let mut options = ValidationOptions::default_for(kind);
        if let ValidationOptions::Text(text) = &mut options {
            *text = TextOptions { required: true, ..Default::default() };
        }
        let required = match &options {
            ValidationOptions::Numeric(o) => o.required,
            ValidationOptions::Date(o) => o.required,
            _ => true,
        };
        let result = validate(kind, Some(""), Some(&options))?;
        if required {
            assert_eq!(result.errors().len(), 1, "{} should report exactly one error", kind);
        } else {
            assert!(result.is_valid(), "{} should accept absent input", kind);
        }
    }
    Ok(())
}
