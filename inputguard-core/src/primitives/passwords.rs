//! Static reference data for password strength checks.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Characters that satisfy the special-character check.
pub const SPECIAL_CHARACTERS: &str = "@$!%*?&";

static COMMON_PASSWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend([
        "password", "123456", "password123", "admin", "qwerty",
        "letmein", "welcome", "monkey", "1234567890", "abc123",
    ]);
    set
});

// Ascending runs only. Digit runs start at 1, so "012" and "890" do not count.
static SEQUENTIAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "(?i)abc|bcd|cde|def|efg|fgh|ghi|hij|ijk|jkl|klm|lmn|mno|nop|opq|pqr|qrs|rst|stu|tuv|uvw|vwx|wxy|xyz\
         |123|234|345|456|567|678|789",
    )
    .expect("sequential pattern is valid")
});

/// Case-insensitive membership in the banned password list.
pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(password.to_lowercase().as_str())
}

/// True when the password contains three ascending letters or digits in a row.
pub fn has_sequential_chars(password: &str) -> bool {
    SEQUENTIAL_REGEX.is_match(password)
}

pub fn has_special_character(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
