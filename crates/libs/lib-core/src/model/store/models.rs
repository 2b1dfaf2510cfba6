use chrono::{DateTime, Utc};
use lib_utils::time::{format_time, now_millis};

pub use shared::dto::auth::User;

/// Data structure for creating a new user.
///
/// Contains only the fields the registration form supplies. The password is
/// stored as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForCreate {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl UserForCreate {
    /// Create a new `UserForCreate` instance.
    pub fn new(email: String, username: String, password: String) -> Self {
        Self {
            email,
            username,
            password,
        }
    }

    /// Stamp the record with an id and creation time taken from `now`.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: now_millis(now),
            email: self.email,
            username: self.username,
            password: self.password,
            created_at: format_time(now),
        }
    }
}
