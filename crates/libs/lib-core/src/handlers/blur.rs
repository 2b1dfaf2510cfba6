//! Advisory checks run when a field loses focus. They never block submission.

use lib_utils::validation::{validate_email, validate_password, validate_username};

use crate::config::Config;
use crate::error::ValidationError;

/// Kind of input a blur check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any `type="email"` input
    Email,
    /// Any `type="password"` input, confirmation included
    Password,
    /// The registration username input
    Username,
}

/// Check a field's raw value. Empty values are never flagged.
///
/// The frontend shows a hit as a short warning toast whatever the rejection's own severity.
pub fn check_field(kind: FieldKind, value: &str, config: &Config) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }

    match kind {
        FieldKind::Email if !validate_email(value) => Some(ValidationError::EmailInvalid),
        FieldKind::Password if !validate_password(value, config.min_password_length) => {
            Some(ValidationError::PasswordTooShort(config.min_password_length))
        }
        FieldKind::Username if !validate_username(value, config.min_username_length) => {
            Some(ValidationError::UsernameTooShort(config.min_username_length))
        }
        _ => None,
    }
}
