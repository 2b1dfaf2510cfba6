//! # Records and Form Submissions
//!
//! ## Module Organization
//!
//! - [`auth`] - Stored user records plus login and registration submissions
//!
//! ## Example Stored Values
//!
//! ```text
//! localStorage["users"]
//!
//! [
//!   {
//!     "id": 1704067200000,
//!     "email": "alice@example.com",
//!     "username": "alice",
//!     "password": "secret1",
//!     "createdAt": "2024-01-01T00:00:00.000Z"
//!   }
//! ]
//! ```
//!
//! `localStorage["currentUser"]` holds one object of the same shape.

pub mod auth;

pub use auth::*;
