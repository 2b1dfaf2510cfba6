//! Login form

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::handlers::{auth, FieldKind};
use lib_core::{ActiveForm, MessageKind, Severity};
use shared::dto::auth::LoginRequest;

use crate::components::FormMessage;
use crate::services::storage::LocalStore;
use crate::services::timers::{self, TimerKey};
use crate::state::forms::use_form_context;
use crate::state::toasts::use_toast_context;
use crate::utils::constants::{LOGIN_EMAIL, LOGIN_FORM, LOGIN_MESSAGE, LOGIN_PASSWORD, SWITCH_TO_REGISTER};

#[component]
pub fn LoginForm() -> impl IntoView {
    let forms = use_form_context();
    let toasts = use_toast_context();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest::from_fields(&email.get_untracked(), &password.get_untracked());
        let outcome = LocalStore::open().and_then(|store| auth::login(&store, core_config(), &request));

        match outcome {
            Ok(user) => {
                // Inline messages report failures only.
                forms.hide_messages();
                toasts.show(format!("Welcome back, {}!", user.username), Severity::Success);

                email.set(String::new());
                password.set(String::new());

                // No dashboard yet; the redirect is a placeholder.
                timers::schedule(TimerKey::PostLogin, core_config().post_login_delay_ms, || {
                    log::info!("[LOGIN] Redirecting to dashboard...");
                });
            }
            Err(err) => {
                toasts.report(&err);
                forms.show_message(ActiveForm::Login, err.user_message(), MessageKind::Error);
            }
        }
    };

    let on_switch = move |ev: MouseEvent| {
        ev.prevent_default();
        forms.show_register();
    };

    view! {
        <form
            id=LOGIN_FORM
            class="form"
            class:active=move || forms.is_active(ActiveForm::Login)
            novalidate=true
            on:submit=on_submit
        >
            <h2>"Login"</h2>

            <div class="form-group">
                <label for=LOGIN_EMAIL>"Email"</label>
                <input
                    type="email"
                    id=LOGIN_EMAIL
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:blur=move |ev| toasts.check_blur(FieldKind::Email, &event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for=LOGIN_PASSWORD>"Password"</label>
                <input
                    type="password"
                    id=LOGIN_PASSWORD
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:blur=move |ev| toasts.check_blur(FieldKind::Password, &event_target_value(&ev))
                />
            </div>

            <button type="submit" class="btn">"Login"</button>

            <FormMessage form=ActiveForm::Login id=LOGIN_MESSAGE/>

            <p class="switch-form">
                "Don't have an account? "
                <a href="#" id=SWITCH_TO_REGISTER on:click=on_switch>"Register here"</a>
            </p>
        </form>
    }
}
