//! # Form State
//!
//! Which form is on screen, plus the inline message slot under each form.
//!
//! Two states, Login-active and Register-active. Transitions happen only
//! through [`FormState::show_login`] and [`FormState::show_register`]; both
//! clear every inline message, and both are idempotent.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveForm {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Text shown in `#login-message` or `#register-message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMessage {
    pub text: String,
    pub kind: MessageKind,
    /// Bumped on every [`FormState::show_message`] so a stale auto-hide
    /// timer cannot clear a newer message.
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    active: ActiveForm,
    login_message: Option<InlineMessage>,
    register_message: Option<InlineMessage>,
    generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ActiveForm {
        self.active
    }

    pub fn is_active(&self, form: ActiveForm) -> bool {
        self.active == form
    }

    pub fn show_login(&mut self) {
        self.switch_to(ActiveForm::Login);
    }

    pub fn show_register(&mut self) {
        self.switch_to(ActiveForm::Register);
    }

    fn switch_to(&mut self, form: ActiveForm) {
        self.active = form;
        self.hide_messages();
    }

    pub fn hide_messages(&mut self) {
        self.login_message = None;
        self.register_message = None;
    }

    /// Fill a form's message slot, replacing whatever was there. Returns the
    /// generation to hand to [`hide_message`](Self::hide_message) later.
    pub fn show_message(&mut self, form: ActiveForm, text: impl Into<String>, kind: MessageKind) -> u64 {
        self.generation += 1;
        *self.slot_mut(form) = Some(InlineMessage {
            text: text.into(),
            kind,
            generation: self.generation,
        });
        self.generation
    }

    /// Clear a form's message if it is still the one identified by `generation`.
    pub fn hide_message(&mut self, form: ActiveForm, generation: u64) -> bool {
        let slot = self.slot_mut(form);
        if slot.as_ref().is_some_and(|message| message.generation == generation) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self, form: ActiveForm) -> Option<&InlineMessage> {
        match form {
            ActiveForm::Login => self.login_message.as_ref(),
            ActiveForm::Register => self.register_message.as_ref(),
        }
    }

    fn slot_mut(&mut self, form: ActiveForm) -> &mut Option<InlineMessage> {
        match form {
            ActiveForm::Login => &mut self.login_message,
            ActiveForm::Register => &mut self.register_message,
        }
    }
}
