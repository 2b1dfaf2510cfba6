//! # Authentication Handlers
//!
//! Login and registration against the locally stored user collection.
//!
//! ## Overview
//!
//! - Both handlers run a short-circuiting validation gate first; the first
//!   failing check decides the [`ValidationError`] returned
//! - Login compares email and password exactly and records the match as the
//!   current user
//! - Registration rejects a taken email before a taken username, then appends
//!   the new record
//!
//! Passwords are stored and compared in plaintext.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use lib_core::{handlers::auth, Config, MemoryStore};
//! use shared::dto::auth::{LoginRequest, RegisterRequest};
//!
//! # fn main() -> lib_core::Result<()> {
//! let store = MemoryStore::new();
//! let config = Config::default();
//!
//! let signup = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");
//! auth::register(&store, &config, &signup, Utc::now())?;
//!
//! let user = auth::login(&store, &config, &LoginRequest::from_fields("x@y.com", "secret"))?;
//! assert_eq!(user.username, "abc");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use lib_utils::validation::{validate_email, validate_password, validate_username};
use shared::dto::auth::{LoginRequest, RegisterRequest, User};
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::model::store::{KeyValueStore, UserForCreate, UserRepository};

/// Run the login form's validation gate.
pub fn validate_login(req: &LoginRequest) -> std::result::Result<(), ValidationError> {
    if req.email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }

    if !validate_email(&req.email) {
        return Err(ValidationError::EmailInvalid);
    }

    if req.password.is_empty() {
        return Err(ValidationError::PasswordMissing);
    }

    Ok(())
}

/// Run the registration form's validation gate. Length minimums come from `config`.
pub fn validate_registration(
    req: &RegisterRequest,
    config: &Config,
) -> std::result::Result<(), ValidationError> {
    if req.email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }

    if !validate_email(&req.email) {
        return Err(ValidationError::EmailInvalid);
    }

    if req.username.is_empty() {
        return Err(ValidationError::UsernameMissing);
    }

    if !validate_username(&req.username, config.min_username_length) {
        return Err(ValidationError::UsernameTooShort(config.min_username_length));
    }

    if req.password.is_empty() {
        return Err(ValidationError::NewPasswordMissing);
    }

    if !validate_password(&req.password, config.min_password_length) {
        return Err(ValidationError::PasswordTooShort(config.min_password_length));
    }

    if req.password != req.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

/// Login handler - finds the matching user and records it as the current user.
///
/// # Returns
///
/// * `Ok(User)` - credentials matched; `currentUser` now holds this record
/// * `Err(AppError::Validation(_))` - a gate failed, or no record matched
///   ([`ValidationError::InvalidCredentials`])
/// * `Err(AppError::Storage | AppError::Decoding)` - the store could not be read or written
#[instrument(skip_all, fields(email = %req.email))]
pub fn login<S>(store: &S, config: &Config, req: &LoginRequest) -> Result<User>
where
    S: KeyValueStore + ?Sized,
{
    if let Err(rejection) = validate_login(req) {
        warn!("[LOGIN] rejected: {}", rejection);
        return Err(rejection.into());
    }

    let users = UserRepository::new(store, config);
    let Some(user) = users.find_by_credentials(&req.email, &req.password)? else {
        warn!("[LOGIN] no matching account");
        return Err(ValidationError::InvalidCredentials.into());
    };

    users.set_current_user(&user)?;
    info!("[LOGIN] signed in as {}", user.username);
    Ok(user)
}

/// Registration handler - appends a new user if email and username are free.
///
/// # Returns
///
/// * `Ok(User)` - the stored record
/// * `Err(AppError::Validation(_))` - a gate failed, or the email
///   ([`ValidationError::EmailTaken`]) or username
///   ([`ValidationError::UsernameTaken`]) is already registered
/// * `Err(AppError::Storage | AppError::Decoding)` - the store could not be read or written
#[instrument(skip_all, fields(username = %req.username, email = %req.email))]
pub fn register<S>(store: &S, config: &Config, req: &RegisterRequest, now: DateTime<Utc>) -> Result<User>
where
    S: KeyValueStore + ?Sized,
{
    if let Err(rejection) = validate_registration(req, config) {
        warn!("[REGISTER] rejected: {}", rejection);
        return Err(rejection.into());
    }

    let users = UserRepository::new(store, config);
    if let Some(existing) = users.find_by_email_or_username(&req.email, &req.username)? {
        let rejection = if existing.email == req.email {
            ValidationError::EmailTaken
        } else {
            ValidationError::UsernameTaken
        };
        warn!("[REGISTER] rejected: {}", rejection);
        return Err(rejection.into());
    }

    let user = users.create(
        UserForCreate::new(req.email.clone(), req.username.clone(), req.password.clone()),
        now,
    )?;
    info!("[REGISTER] created user {} (id {})", user.username, user.id);
    Ok(user)
}

#[cfg(test)]
mod tests;
