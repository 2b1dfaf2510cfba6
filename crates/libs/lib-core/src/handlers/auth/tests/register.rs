//! # Registration Tests
//!
//! Tests for the registration validation gate and uniqueness checks.

use super::*;

#[test]
fn test_register_success() {
    // Arrange
    let config = test_config();
    let store = MemoryStore::new();
    let req = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");

    // Act
    let user = register(&store, &config, &req, test_now()).unwrap();

    // Assert
    assert_eq!(user.email, "x@y.com");
    assert_eq!(user.username, "abc");
    assert_eq!(user.password, "secret");
    assert_eq!(user.id, 1_704_067_200_000);
    assert_eq!(user.created_at, "2024-01-01T00:00:00.000Z");
    assert_eq!(user_count(&store, &config), 1);
}

#[test]
fn test_register_does_not_log_in() {
    let config = test_config();
    let store = seeded_store(&config);

    assert!(UserRepository::new(&store, &config).current_user().unwrap().is_none());
}

#[test]
fn test_register_gate_order() {
    let config = test_config();
    let store = MemoryStore::new();

    let cases = [
        (("", "", "", ""), ValidationError::EmailMissing),
        (("bad", "", "", ""), ValidationError::EmailInvalid),
        (("x@y.com", "  ", "", ""), ValidationError::UsernameMissing),
        (("x@y.com", "ab", "", ""), ValidationError::UsernameTooShort(3)),
        (("x@y.com", "abc", "", ""), ValidationError::NewPasswordMissing),
        (("x@y.com", "abc", "12345", "12345"), ValidationError::PasswordTooShort(6)),
        (("x@y.com", "abc", "abc123", "abc124"), ValidationError::PasswordMismatch),
    ];

    for ((email, username, password, confirm), expected) in cases {
        let req = RegisterRequest::from_fields(email, username, password, confirm);
        let err = register(&store, &config, &req, test_now()).unwrap_err();
        assert_eq!(rejection(err), expected, "{req:?}");
    }

    assert_eq!(user_count(&store, &config), 0);
}

#[test]
fn test_register_mismatch_message() {
    let config = test_config();
    let store = MemoryStore::new();
    let req = RegisterRequest::from_fields("x@y.com", "abc", "abc123", "abc124");

    let err = register(&store, &config, &req, test_now()).unwrap_err();
    assert_eq!(err.user_message(), "Passwords do not match");
    assert_eq!(user_count(&store, &config), 0);
}

#[test]
fn test_register_duplicate_email() {
    let config = test_config();
    let store = seeded_store(&config);
    let req = RegisterRequest::from_fields("x@y.com", "other", "secret", "secret");

    let err = register(&store, &config, &req, test_now()).unwrap_err();

    let rejection = rejection(err);
    assert_eq!(rejection, ValidationError::EmailTaken);
    assert_eq!(rejection.to_string(), "An account with this email already exists");
    assert_eq!(user_count(&store, &config), 1);
}

#[test]
fn test_register_duplicate_username() {
    let config = test_config();
    let store = seeded_store(&config);
    let req = RegisterRequest::from_fields("new@y.com", "abc", "secret", "secret");

    let err = register(&store, &config, &req, test_now()).unwrap_err();

    assert_eq!(rejection(err), ValidationError::UsernameTaken);
    assert_eq!(user_count(&store, &config), 1);
}

#[test]
fn test_register_email_collision_reported_first() {
    let config = test_config();
    let store = seeded_store(&config);
    let req = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");

    let err = register(&store, &config, &req, test_now()).unwrap_err();
    assert_eq!(rejection(err), ValidationError::EmailTaken);
}

#[test]
fn test_register_collision_against_first_matching_record() {
    // The first record matching either field decides the message, even if a
    // later record shares the email.
    let config = test_config();
    let store = MemoryStore::new();
    register(&store, &config, &RegisterRequest::from_fields("a@b.co", "abc", "secret", "secret"), test_now()).unwrap();
    register(&store, &config, &RegisterRequest::from_fields("x@y.com", "xyz", "secret", "secret"), test_now()).unwrap();

    let req = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");
    let err = register(&store, &config, &req, test_now()).unwrap_err();
    assert_eq!(rejection(err), ValidationError::UsernameTaken);
}

#[test]
fn test_register_warning_severities() {
    let config = test_config();
    let store = seeded_store(&config);

    let short = RegisterRequest::from_fields("n@y.com", "ab", "secret", "secret");
    let err = register(&store, &config, &short, test_now()).unwrap_err();
    assert_eq!(err.severity(), Severity::Warning);

    let taken = RegisterRequest::from_fields("x@y.com", "new", "secret", "secret");
    let err = register(&store, &config, &taken, test_now()).unwrap_err();
    assert_eq!(err.severity(), Severity::Warning);

    let mismatch = RegisterRequest::from_fields("n@y.com", "new", "secret", "secret2");
    let err = register(&store, &config, &mismatch, test_now()).unwrap_err();
    assert_eq!(err.severity(), Severity::Error);
}

#[test]
fn test_register_uses_configured_password_minimum() {
    let config = Config {
        min_password_length: 8,
        ..test_config()
    };
    let store = MemoryStore::new();
    let req = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");

    let err = register(&store, &config, &req, test_now()).unwrap_err();

    assert_eq!(err.user_message(), "Password must be at least 8 characters long");
    assert_eq!(rejection(err), ValidationError::PasswordTooShort(8));
    assert_eq!(user_count(&store, &config), 0);
}

#[test]
fn test_register_uses_configured_username_minimum() {
    let config = Config {
        min_username_length: 4,
        ..test_config()
    };
    let store = MemoryStore::new();
    let req = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");

    let err = register(&store, &config, &req, test_now()).unwrap_err();
    assert_eq!(err.user_message(), "Username must be at least 4 characters long");

    let longer = RegisterRequest::from_fields("x@y.com", "abcd", "secret", "secret");
    assert!(register(&store, &config, &longer, test_now()).is_ok());
}
