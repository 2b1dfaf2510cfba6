//! Toast notifier state management

use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::handlers::blur::{check_field, FieldKind};
use lib_core::{AppError, Severity, ToastId, ToastQueue, ToastStep, ToastTimer};

use crate::services::timers::{self, TimerKey};

/// Live toasts shown in `#toast-container`.
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    /// Show a toast for the default duration.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Option<ToastId> {
        self.show_for(message, severity, core_config().toast_duration_ms)
    }

    /// Show a toast and start the timers the queue asks for.
    pub fn show_for(&self, message: impl Into<String>, severity: Severity, duration_ms: u32) -> Option<ToastId> {
        let message = message.into();
        let (id, steps) = self
            .queue
            .try_update(|queue| queue.show(message, severity, duration_ms, core_config()))?;

        for step in steps {
            self.start(id, step);
        }
        Some(id)
    }

    /// Start a toast's exit animation and detach it once the grace period ends.
    ///
    /// Safe to call from both the close button and the auto-dismiss timer, in
    /// any order and any number of times.
    pub fn remove(&self, id: ToastId) {
        timers::cancel(TimerKey::Toast(id, ToastTimer::Reveal));
        timers::cancel(TimerKey::Toast(id, ToastTimer::Dismiss));

        if let Some(Some(step)) = self.queue.try_update(|queue| queue.remove(id, core_config())) {
            self.start(id, step);
        }
    }

    fn start(&self, id: ToastId, step: ToastStep) {
        let context = *self;
        timers::schedule(TimerKey::Toast(id, step.timer), step.delay_ms, move || {
            let next = context
                .queue
                .try_update(|queue| queue.fire(id, step.timer, core_config()))
                .flatten();
            if let Some(next) = next {
                context.start(id, next);
            }
        });
    }

    /// Show an error as a toast. Failures are logged with their details first.
    pub fn report(&self, err: &AppError) {
        if !err.is_rejection() {
            log::error!("{}", err);
        }
        self.show(err.user_message(), err.severity());
    }

    /// Blur hook: warn briefly if a non-empty field value is invalid.
    pub fn check_blur(&self, kind: FieldKind, value: &str) {
        if let Some(rejection) = check_field(kind, value, core_config()) {
            self.show_for(rejection.to_string(), Severity::Warning, core_config().blur_toast_duration_ms);
        }
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}
