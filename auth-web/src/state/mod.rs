//! Reactive application state

pub mod forms;
pub mod toasts;
