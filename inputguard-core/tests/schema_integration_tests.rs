// inputguard-core/tests/schema_integration_tests.rs
use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use inputguard_core::{validate_form, FormSchema, InputGuardError, ValidationKind, Validator};

const CONTACT_SCHEMA: &str = r#"
name: contact
fields:
  email:
    kind: email
  phone:
    kind: phone
    type: international
  website:
    kind: url
    required: false
  message:
    kind: text
    minLength: 10
    maxLength: 500
    required: true
  callbackAfter:
    kind: date
    minDate: today
"#;

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(CONTACT_SCHEMA.as_bytes())?;

    let schema = FormSchema::load_from_file(file.path())?;
    assert_eq!(schema.name.as_deref(), Some("contact"));
    assert_eq!(schema.fields.len(), 5);
    assert_eq!(schema.fields["phone"].kind(), ValidationKind::Phone);
    assert_eq!(schema.fields["callbackAfter"].kind(), ValidationKind::Date);
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = FormSchema::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read schema file"));
}

#[test]
fn test_unknown_kind_in_schema() {
    let yaml = "fields:\n  zip:\n    kind: zipcode\n";
    assert!(matches!(
        FormSchema::from_yaml_str(yaml),
        Err(InputGuardError::SchemaError(_))
    ));
}

#[test]
fn test_form_from_file_end_to_end() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(CONTACT_SCHEMA.as_bytes())?;
    let schema = FormSchema::load_from_file(file.path())?;

    let data: HashMap<String, String> = [
        ("email", "ops@example.org"),
        ("phone", "+44 20 7946 0958"),
        ("message", "Please call me back about the invoice."),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let report = validate_form(&schema, &data)?;
    assert!(report.is_valid, "unexpected failures: {:?}", report.results);
    assert_eq!(report.cleaned_data["phone"], "+442079460958");
    assert!(!report.cleaned_data.contains_key("website"));
    assert!(!report.cleaned_data.contains_key("callbackAfter"));
    Ok(())
}
