//! # Centralized Error Handling
//!
//! This module defines the engine-wide error type [`AppError`] and the
//! user-facing rejection type [`ValidationError`]. Both follow the `thiserror`
//! pattern.
//!
//! ## Error Categories
//!
//! 1. **Rejections** - the user typed something the form will not accept
//!    - [`Validation`](AppError::Validation) → toast with the rejection's own severity
//!
//! 2. **Failures** - the operation cannot run at all
//!    - [`Storage`](AppError::Storage) → `localStorage` missing or refusing writes
//!    - [`Decoding`](AppError::Decoding) → stored JSON is malformed
//!    - [`Config`](AppError::Config) → configuration rejected at start-up
//!
//! Failures abort the current operation. Nothing tries to repair stored data.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result, ValidationError};
//!
//! fn require_email(email: &str) -> Result<()> {
//!     if email.is_empty() {
//!         return Err(ValidationError::EmailMissing.into());
//!     }
//!     Ok(())
//! }
//!
//! let err = require_email("").unwrap_err();
//! assert_eq!(err.user_message(), "Please enter your email");
//! ```

use thiserror::Error;

use crate::toast::Severity;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// A submission or field value the forms refuse.
///
/// The `Display` text is exactly what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email")]
    EmailMissing,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    /// Login form password left blank.
    #[error("Please enter your password")]
    PasswordMissing,

    /// Registration form password left blank.
    #[error("Please enter a password")]
    NewPasswordMissing,

    #[error("Please enter a username")]
    UsernameMissing,

    /// Carries the configured minimum length.
    #[error("Username must be at least {0} characters long")]
    UsernameTooShort(usize),

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("This username is already taken")]
    UsernameTaken,

    /// No stored user matches. Deliberately does not say which field was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl ValidationError {
    /// Toast severity used when showing this rejection.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::UsernameTooShort(_)
            | ValidationError::PasswordTooShort(_)
            | ValidationError::EmailTaken
            | ValidationError::UsernameTaken => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Engine-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The user's input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The key/value store is unavailable or refused an operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// For failures, returns a generic message to avoid exposing storage details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(rejection) => rejection.to_string(),
            AppError::Storage(_) | AppError::Decoding(_) | AppError::Config(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    /// Toast severity for this error.
    pub fn severity(&self) -> Severity {
        match self {
            AppError::Validation(rejection) => rejection.severity(),
            _ => Severity::Error,
        }
    }

    /// Whether this is a user-input rejection rather than a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}
