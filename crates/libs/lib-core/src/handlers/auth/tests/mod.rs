//! # Auth Handler Tests
//!
//! Test suite for authentication handlers (registration and login).

mod integration;
mod register;

use super::*;
use crate::error::AppError;
use crate::model::store::MemoryStore;
use crate::toast::Severity;
use chrono::TimeZone;

/// Fixed registration time so ids are predictable
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Create test config
pub fn test_config() -> Config {
    Config::default()
}

/// Store with one registered user: x@y.com / abc / secret
pub fn seeded_store(config: &Config) -> MemoryStore {
    let store = MemoryStore::new();
    let req = RegisterRequest::from_fields("x@y.com", "abc", "secret", "secret");
    register(&store, config, &req, test_now()).expect("seed registration failed");
    store
}

/// Extract the rejection from a handler error
pub fn rejection(err: AppError) -> ValidationError {
    match err {
        AppError::Validation(rejection) => rejection,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

/// Number of stored users
pub fn user_count(store: &MemoryStore, config: &Config) -> usize {
    UserRepository::new(store, config).list().unwrap().len()
}
