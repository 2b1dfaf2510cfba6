//! # Integration Tests
//!
//! End-to-end flows across registration, login and storage.

use super::*;

#[test]
fn test_register_then_login() {
    // Arrange
    let config = test_config();
    let store = MemoryStore::new();
    let signup = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");
    let registered = register(&store, &config, &signup, test_now()).unwrap();

    // Act
    let logged_in = login(&store, &config, &LoginRequest::from_fields("x@y.com", "secret")).unwrap();

    // Assert
    assert_eq!(logged_in, registered);
    let current = UserRepository::new(&store, &config).current_user().unwrap();
    assert_eq!(current, Some(registered));
}

#[test]
fn test_register_same_email_twice() {
    let config = test_config();
    let store = MemoryStore::new();
    let signup = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");
    register(&store, &config, &signup, test_now()).unwrap();

    let again = RegisterRequest::from_fields("x@y.com", "abcd", "secret", "secret");
    let err = register(&store, &config, &again, test_now()).unwrap_err();

    assert!(err.user_message().contains("already exists"));
    assert_eq!(user_count(&store, &config), 1);
}

#[test]
fn test_stored_json_shape() {
    let config = test_config();
    let store = seeded_store(&config);
    login(&store, &config, &LoginRequest::from_fields("x@y.com", "secret")).unwrap();

    let users: serde_json::Value = serde_json::from_str(&store.get_item("users").unwrap().unwrap()).unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["email"], "x@y.com");
    assert_eq!(users[0]["password"], "secret");
    assert_eq!(users[0]["createdAt"], "2024-01-01T00:00:00.000Z");

    let current: serde_json::Value = serde_json::from_str(&store.get_item("currentUser").unwrap().unwrap()).unwrap();
    assert_eq!(current["username"], "abc");
}

#[test]
fn test_custom_storage_keys() {
    let config = Config {
        users_key: "accounts".to_string(),
        current_user_key: "session".to_string(),
        ..Config::default()
    };
    let store = seeded_store(&config);
    login(&store, &config, &LoginRequest::from_fields("x@y.com", "secret")).unwrap();

    assert!(store.get_item("accounts").unwrap().is_some());
    assert!(store.get_item("session").unwrap().is_some());
    assert!(store.get_item("users").unwrap().is_none());
}

#[test]
fn test_corrupt_storage_aborts_both_handlers() {
    let config = test_config();
    let store = MemoryStore::new();
    store.set_item("users", "not json").unwrap();

    let login_err = login(&store, &config, &LoginRequest::from_fields("x@y.com", "secret")).unwrap_err();
    assert!(matches!(login_err, AppError::Decoding(_)));

    let signup = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");
    let register_err = register(&store, &config, &signup, test_now()).unwrap_err();
    assert!(matches!(register_err, AppError::Decoding(_)));
    assert_eq!(register_err.user_message(), "An internal error occurred");

    assert_eq!(store.get_item("users").unwrap().as_deref(), Some("not json"));
}

#[test]
fn test_validation_happens_before_storage() {
    // A bad submission is rejected even when storage is corrupt.
    let config = test_config();
    let store = MemoryStore::new();
    store.set_item("users", "not json").unwrap();

    let err = login(&store, &config, &LoginRequest::from_fields("", "")).unwrap_err();
    assert_eq!(rejection(err), ValidationError::EmailMissing);
}
