//! # Core Library
//!
//! Headless account engine: configuration, error type, key/value storage,
//! the user repository, login and registration handlers, blur feedback,
//! the toast queue and form state.
//!
//! Nothing here touches the DOM. The browser frontend injects a
//! [`KeyValueStore`] backed by `localStorage`; tests inject [`MemoryStore`].

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod model;
pub mod toast;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result, ValidationError};
pub use forms::{ActiveForm, FormState, InlineMessage, MessageKind};
pub use model::store::{KeyValueStore, MemoryStore, UserRepository};
pub use toast::{Severity, Toast, ToastId, ToastPhase, ToastQueue, ToastStep, ToastTimer};
