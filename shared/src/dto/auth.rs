use serde::{Deserialize, Serialize};

/// Stored user record.
///
/// Passwords are kept in plaintext; the record is never sent anywhere but
/// the browser's own `localStorage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Millisecond timestamp taken at registration
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password: String,
    /// RFC 3339 timestamp taken at registration
    pub created_at: String,
}

/// Trim whitespace and byte order marks, the way browsers trim form input.
fn trim_field(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

/// Login form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a submission from raw field values. The email is trimmed, the password is not.
    pub fn from_fields(email: &str, password: &str) -> Self {
        Self {
            email: trim_field(email),
            password: password.to_string(),
        }
    }
}

/// Registration form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Build a submission from raw field values. Email and username are trimmed.
    pub fn from_fields(email: &str, username: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            email: trim_field(email),
            username: trim_field(username),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }
}
