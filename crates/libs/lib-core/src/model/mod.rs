//! # Model Layer
//!
//! Persisted records and the storage they live in.

pub mod store;
