//! # Utilities Library
//!
//! Field validators and time helpers shared by the account engine and the web frontend.

pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use time::{format_time, now_millis};
pub use validation::{
    validate_email, validate_min_length, validate_password, validate_username, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH,
};
