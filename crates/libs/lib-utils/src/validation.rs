//! # Validation Utilities
//!
//! Pure field checks used by form submission and blur feedback.
//!
//! The email check is syntactic and permissive: something without spaces or
//! `@`, then `@`, then a domain containing at least one `.`. It is not an
//! RFC 5322 parser. U+FEFF counts as whitespace, as it does for browsers.

use regex::Regex;
use std::sync::LazyLock;

/// Default minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Default minimum username length, in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

/// Validate email shape.
///
/// # Examples
///
/// ```rust
/// use lib_utils::validation::validate_email;
///
/// assert!(validate_email("a@b.co"));
/// assert!(!validate_email("ab.co"));
/// ```
pub fn validate_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validate that a value has at least `min` characters.
pub fn validate_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Validate password length against `min_length` (normally [`MIN_PASSWORD_LENGTH`]).
pub fn validate_password(password: &str, min_length: usize) -> bool {
    validate_min_length(password, min_length)
}

/// Validate username length against `min_length` (normally [`MIN_USERNAME_LENGTH`]).
pub fn validate_username(username: &str, min_length: usize) -> bool {
    validate_min_length(username, min_length)
}
