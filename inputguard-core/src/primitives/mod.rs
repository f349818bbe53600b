//! Shared primitives used by both the validation and the sanitization side.
//!
//! * `html`: the guarded-character entity map with escape/unescape.
//! * `passwords`: the common-password set and the ascending-run detector.
//! * `numbers`: grouping and currency formatting for parsed numbers.
//! * `dates`: lenient date parsing and locale-style formatting.

pub mod dates;
pub mod html;
pub mod numbers;
pub mod passwords;
