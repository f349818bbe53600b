// inputguard-core/src/engine.rs
//! Defines the core `Validator` trait.
//!
//! Every option record implements `Validator`, so an options value is also the
//! rule set that applies it. The dispatcher in [`crate::validators`] and the
//! form runner in [`crate::form`] only ever talk to this trait.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::InputGuardError;
use crate::result::ValidationResult;
use crate::validators::ValidationKind;

/// A configured rule set for one semantic input type.
pub trait Validator: Send + Sync {
    /// The kind of input this rule set validates.
    fn kind(&self) -> ValidationKind;

    /// Validates `raw`, where an empty string means "absent".
    ///
    /// Rule violations are reported inside the returned `ValidationResult`.
    /// `Err` is reserved for misconfiguration, such as a custom pattern that
    /// does not compile.
    fn validate(&self, raw: &str) -> Result<ValidationResult, InputGuardError>;
}
