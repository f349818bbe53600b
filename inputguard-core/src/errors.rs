//! errors.rs - Custom error types for the inputguard-core library.
//!
//! Only programming and configuration mistakes are represented here. A value
//! that fails a validation rule is never an error: it is reported through the
//! `errors` list of a [`crate::ValidationResult`].
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `inputguard-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputGuardError {
    #[error("Unknown validation kind '{0}'")]
    UnknownKind(String),

    #[error("Unknown sanitization context '{0}'")]
    UnknownContext(String),

    #[error("Options for '{found}' cannot be used to validate '{expected}'")]
    OptionsMismatch { expected: String, found: String },

    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("Pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternLengthExceeded(usize, usize),

    #[error("Invalid date bound '{0}': expected YYYY-MM-DD or 'today'")]
    InvalidDateBound(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Invalid form schema: {0}")]
    SchemaError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
