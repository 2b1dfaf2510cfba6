//! Form switcher state management

use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::{ActiveForm, FormState, InlineMessage, MessageKind};

use crate::services::timers::{self, TimerKey};

/// Which form is visible, plus each form's inline message.
#[derive(Clone, Copy)]
pub struct FormContext {
    pub state: RwSignal<FormState>,
}

impl FormContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::new()),
        }
    }

    pub fn is_active(&self, form: ActiveForm) -> bool {
        self.state.with(|state| state.is_active(form))
    }

    pub fn message(&self, form: ActiveForm) -> Option<InlineMessage> {
        self.state.with(|state| state.message(form).cloned())
    }

    pub fn show_login(&self) {
        self.cancel_message_timers();
        self.state.try_update(FormState::show_login);
    }

    pub fn show_register(&self) {
        self.cancel_message_timers();
        self.state.try_update(FormState::show_register);
    }

    /// Clear both inline messages, e.g. a stale failure after a successful submit.
    pub fn hide_messages(&self) {
        self.cancel_message_timers();
        self.state.try_update(FormState::hide_messages);
    }

    /// Show an inline message under `form` and hide it again after the configured delay.
    pub fn show_message(&self, form: ActiveForm, text: impl Into<String>, kind: MessageKind) {
        let text = text.into();
        let Some(generation) = self.state.try_update(|state| state.show_message(form, text, kind)) else {
            return;
        };

        let state = self.state;
        timers::schedule(TimerKey::MessageHide(form), core_config().message_hide_ms, move || {
            state.try_update(|state| state.hide_message(form, generation));
        });
    }

    fn cancel_message_timers(&self) {
        timers::cancel(TimerKey::MessageHide(ActiveForm::Login));
        timers::cancel(TimerKey::MessageHide(ActiveForm::Register));
    }
}

pub fn provide_form_context() -> FormContext {
    let context = FormContext::new();
    provide_context(context);
    context
}

pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
