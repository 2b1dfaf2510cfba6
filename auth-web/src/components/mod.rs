//! UI Components

pub mod form_message;
pub mod toast;

pub use form_message::FormMessage;
pub use toast::ToastContainer;
