//! # Application Configuration
//!
//! Storage keys, timings and field length rules for the account forms. A browser
//! has no process environment, so [`Config::default`] is the source of truth;
//! the struct exists so tests and embedders can override individual values.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! let key = &config.users_key;
//! ```
//!
//! The config must be initialized once at application startup using [`init_config()`].

use std::sync::OnceLock;

use lib_utils::validation::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};

use crate::error::{AppError, Result};

/// Account form configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Storage key holding the JSON array of user records
    pub users_key: String,

    /// Storage key holding the JSON record of the logged-in user
    pub current_user_key: String,

    /// Default toast lifetime in milliseconds
    pub toast_duration_ms: u32,

    /// Lifetime of advisory toasts raised when a field loses focus
    pub blur_toast_duration_ms: u32,

    /// Delay before a new toast gets its `show` class, so the CSS transition runs
    pub toast_reveal_delay_ms: u32,

    /// Grace period between a toast's `hide` class and its removal
    pub toast_exit_ms: u32,

    /// Inline form message lifetime
    pub message_hide_ms: u32,

    /// Delay before the post-login redirect placeholder runs
    pub post_login_delay_ms: u32,

    /// Delay before the register form switches back to login
    pub post_register_delay_ms: u32,

    /// Minimum password length in characters, checked on registration and blur
    pub min_password_length: usize,

    /// Minimum username length in characters
    pub min_username_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_key: "users".to_string(),
            current_user_key: "currentUser".to_string(),
            toast_duration_ms: 5000,
            blur_toast_duration_ms: 3000,
            toast_reveal_delay_ms: 10,
            toast_exit_ms: 300,
            message_hide_ms: 5000,
            post_login_delay_ms: 2000,
            post_register_delay_ms: 2000,
            min_password_length: MIN_PASSWORD_LENGTH,
            min_username_length: MIN_USERNAME_LENGTH,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.users_key.is_empty() || self.current_user_key.is_empty() {
            return Err(AppError::Config("storage keys must not be empty".to_string()));
        }

        if self.users_key == self.current_user_key {
            return Err(AppError::Config(
                "users_key and current_user_key must differ".to_string(),
            ));
        }

        if self.toast_duration_ms == 0 || self.blur_toast_duration_ms == 0 {
            return Err(AppError::Config("toast durations must be positive".to_string()));
        }

        if self.toast_exit_ms == 0 || self.message_hide_ms == 0 {
            return Err(AppError::Config(
                "exit and message timings must be positive".to_string(),
            ));
        }

        if self.post_login_delay_ms == 0 || self.post_register_delay_ms == 0 {
            return Err(AppError::Config(
                "post-submit delays must be positive".to_string(),
            ));
        }

        if self.min_password_length == 0 || self.min_username_length == 0 {
            return Err(AppError::Config(
                "minimum field lengths must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if validation fails or config has already been initialized.
pub fn init_config(config: Config) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// Falls back to the defaults if [`init_config()`] was never called.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.users_key, "users");
        assert_eq!(config.current_user_key, "currentUser");
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.toast_exit_ms, 300);
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.min_username_length, 3);
    }

    #[test]
    fn test_rejects_shared_storage_key() {
        let config = Config {
            current_user_key: "users".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_durations() {
        let config = Config {
            toast_duration_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            message_hide_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_post_submit_delays() {
        let config = Config {
            post_login_delay_ms: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config {
            post_register_delay_ms: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_min_lengths() {
        let config = Config {
            min_password_length: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            min_username_length: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reveal_delay_may_be_zero() {
        let config = Config {
            toast_reveal_delay_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
