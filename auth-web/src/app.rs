//! Root component: provides form and toast state, renders both forms and the toast stack.

use leptos::prelude::*;

use crate::components::ToastContainer;
use crate::pages::{LoginForm, RegisterForm};
use crate::services::timers;
use crate::state::forms::provide_form_context;
use crate::state::toasts::provide_toast_context;

#[component]
pub fn App() -> impl IntoView {
    provide_form_context();
    provide_toast_context();

    // Pending timers must not outlive the signals they update.
    on_cleanup(timers::cancel_all);

    view! {
        <div class="app-container">
            <div class="form-container">
                <LoginForm/>
                <RegisterForm/>
            </div>
            <ToastContainer/>
        </div>
    }
}
