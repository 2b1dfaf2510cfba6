//! # Form Handlers
//!
//! Submission handlers and field-level blur checks. Each handler runs to
//! completion synchronously against an injected [`KeyValueStore`](crate::KeyValueStore).

pub mod auth;
pub mod blur;

pub use auth::{login, register, validate_login, validate_registration};
pub use blur::{check_field, FieldKind};
