//! # Toast Queue
//!
//! State of the transient notifications stacked in `#toast-container`.
//!
//! A toast moves through three phases:
//!
//! ```text
//! push ──► Entering ──reveal──► Shown ──begin_exit──► Leaving ──detach──► (gone)
//!              └──────────────begin_exit─────────────────┘
//! ```
//!
//! The queue also decides the timing. [`ToastQueue::show`] and
//! [`ToastQueue::remove`] return the [`ToastStep`]s to schedule, and the
//! frontend hands each due timer back to [`ToastQueue::fire`]. Every
//! transition is idempotent: revealing, exiting or detaching a toast that has
//! already moved on (or is gone) changes nothing, so the close button and the
//! auto-dismiss timeout can race freely.

use crate::config::Config;

/// Toast severity, rendered as a CSS class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Identifier of a toast within one [`ToastQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached, waiting for the reveal delay
    Entering,
    /// Visible
    Shown,
    /// Playing its exit animation, detached when the grace period ends
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
    pub phase: ToastPhase,
}

impl Toast {
    /// Class attribute for the toast element, e.g. `"toast success show"`.
    pub fn class_name(&self) -> String {
        let phase = match self.phase {
            ToastPhase::Entering => "",
            ToastPhase::Shown => " show",
            ToastPhase::Leaving => " show hide",
        };
        format!("toast {}{}", self.severity.css_class(), phase)
    }
}

/// Deferred action on one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToastTimer {
    /// `Entering` → `Shown`
    Reveal,
    /// Auto-dismiss at the end of the toast's duration
    Dismiss,
    /// Removal once the exit animation has played
    Detach,
}

/// A timer the frontend must start, `delay_ms` from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStep {
    pub timer: ToastTimer,
    pub delay_ms: u32,
}

/// Ordered set of live toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new toast in the `Entering` phase and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, duration_ms: u32) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            duration_ms,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Attach a toast and return the reveal and dismiss timers to start.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
        config: &Config,
    ) -> (ToastId, [ToastStep; 2]) {
        let id = self.push(message, severity, duration_ms);
        let steps = [
            ToastStep {
                timer: ToastTimer::Reveal,
                delay_ms: config.toast_reveal_delay_ms,
            },
            ToastStep {
                timer: ToastTimer::Dismiss,
                delay_ms: duration_ms,
            },
        ];
        (id, steps)
    }

    /// Start the exit animation and return the detach timer to start.
    ///
    /// `None` when the toast is already leaving or gone, so only the first of
    /// several removals schedules a detach.
    pub fn remove(&mut self, id: ToastId, config: &Config) -> Option<ToastStep> {
        self.begin_exit(id).then_some(ToastStep {
            timer: ToastTimer::Detach,
            delay_ms: config.toast_exit_ms,
        })
    }

    /// Apply a timer that came due. Returns a follow-up timer, if any.
    pub fn fire(&mut self, id: ToastId, timer: ToastTimer, config: &Config) -> Option<ToastStep> {
        match timer {
            ToastTimer::Reveal => {
                self.reveal(id);
                None
            }
            ToastTimer::Dismiss => self.remove(id, config),
            ToastTimer::Detach => {
                self.detach(id);
                None
            }
        }
    }

    /// `Entering` → `Shown`.
    pub fn reveal(&mut self, id: ToastId) -> bool {
        match self.get_mut(id) {
            Some(toast) if toast.phase == ToastPhase::Entering => {
                toast.phase = ToastPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start the exit animation. Returns `false` if the toast is already leaving or gone.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.get_mut(id) {
            Some(toast) if toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove the toast. Returns `false` if it was already gone.
    pub fn detach(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| toast.id == id)
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
