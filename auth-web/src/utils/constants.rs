//! Element ids rendered by the forms. Stylesheets and page scripts target these.

pub const LOGIN_FORM: &str = "login-form";
pub const REGISTER_FORM: &str = "register-form";

pub const LOGIN_EMAIL: &str = "login-email";
pub const LOGIN_PASSWORD: &str = "login-password";

pub const REGISTER_EMAIL: &str = "register-email";
pub const REGISTER_USERNAME: &str = "register-username";
pub const REGISTER_PASSWORD: &str = "register-password";
pub const REGISTER_CONFIRM_PASSWORD: &str = "register-confirm-password";

pub const LOGIN_MESSAGE: &str = "login-message";
pub const REGISTER_MESSAGE: &str = "register-message";

pub const TOAST_CONTAINER: &str = "toast-container";

pub const SWITCH_TO_REGISTER: &str = "switch-to-register";
pub const SWITCH_TO_LOGIN: &str = "switch-to-login";
