//! Form views

pub mod login;
pub mod register;

pub use login::LoginForm;
pub use register::RegisterForm;
