//! Registration form

use chrono::Utc;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::handlers::{auth, FieldKind};
use lib_core::{ActiveForm, MessageKind, Severity};
use shared::dto::auth::RegisterRequest;

use crate::components::FormMessage;
use crate::services::storage::LocalStore;
use crate::services::timers::{self, TimerKey};
use crate::state::forms::use_form_context;
use crate::state::toasts::use_toast_context;
use crate::utils::constants::{
    REGISTER_CONFIRM_PASSWORD, REGISTER_EMAIL, REGISTER_FORM, REGISTER_MESSAGE, REGISTER_PASSWORD,
    REGISTER_USERNAME, SWITCH_TO_LOGIN,
};

const REGISTERED: &str = "Registration successful! You can now login.";

#[component]
pub fn RegisterForm() -> impl IntoView {
    let forms = use_form_context();
    let toasts = use_toast_context();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let reset = move || {
        email.set(String::new());
        username.set(String::new());
        password.set(String::new());
        confirm_password.set(String::new());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = RegisterRequest::from_fields(
            &email.get_untracked(),
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        let outcome = LocalStore::open().and_then(|store| auth::register(&store, core_config(), &request, Utc::now()));

        match outcome {
            Ok(_) => {
                forms.hide_messages();
                toasts.show(REGISTERED, Severity::Success);
                reset();

                timers::schedule(TimerKey::PostRegister, core_config().post_register_delay_ms, move || {
                    forms.show_login();
                });
            }
            Err(err) => {
                toasts.report(&err);
                forms.show_message(ActiveForm::Register, err.user_message(), MessageKind::Error);
            }
        }
    };

    let on_switch = move |ev: MouseEvent| {
        ev.prevent_default();
        timers::cancel(TimerKey::PostRegister);
        forms.show_login();
    };

    view! {
        <form
            id=REGISTER_FORM
            class="form"
            class:active=move || forms.is_active(ActiveForm::Register)
            novalidate=true
            on:submit=on_submit
        >
            <h2>"Register"</h2>

            <div class="form-group">
                <label for=REGISTER_EMAIL>"Email"</label>
                <input
                    type="email"
                    id=REGISTER_EMAIL
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:blur=move |ev| toasts.check_blur(FieldKind::Email, &event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for=REGISTER_USERNAME>"Username"</label>
                <input
                    type="text"
                    id=REGISTER_USERNAME
                    placeholder="Choose a username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                    on:blur=move |ev| toasts.check_blur(FieldKind::Username, &event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for=REGISTER_PASSWORD>"Password"</label>
                <input
                    type="password"
                    id=REGISTER_PASSWORD
                    placeholder="Create a password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:blur=move |ev| toasts.check_blur(FieldKind::Password, &event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for=REGISTER_CONFIRM_PASSWORD>"Confirm Password"</label>
                <input
                    type="password"
                    id=REGISTER_CONFIRM_PASSWORD
                    placeholder="Repeat your password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    on:blur=move |ev| toasts.check_blur(FieldKind::Password, &event_target_value(&ev))
                />
            </div>

            <button type="submit" class="btn">"Register"</button>

            <FormMessage form=ActiveForm::Register id=REGISTER_MESSAGE/>

            <p class="switch-form">
                "Already have an account? "
                <a href="#" id=SWITCH_TO_LOGIN on:click=on_switch>"Login here"</a>
            </p>
        </form>
    }
}
