//! # Shared Records Library
//!
//! This library defines the records exchanged between the account engine
//! (`lib-core`) and the browser frontend (`auth-web`), and the exact JSON shape
//! they take in `localStorage`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Records and form submissions
//!   - **[`dto::auth`]**: User records, login and registration submissions
//!
//! ## Storage Format
//!
//! Stored records serialize to JSON with `serde`:
//! - Field names are **camelCase** in JSON (`createdAt`), matching the shape
//!   other scripts on the same origin may already have written
//! - The user collection is a JSON array; the current user is a single object
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::User;
//!
//! let raw = r#"[{"id":1,"email":"x@y.com","username":"abc","password":"secret","createdAt":"2024-01-01T00:00:00Z"}]"#;
//! let users: Vec<User> = serde_json::from_str(raw).unwrap();
//! assert_eq!(users[0].username, "abc");
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
