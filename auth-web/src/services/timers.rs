//! Keyed registry of pending timeouts.
//!
//! Every deferred action goes through [`schedule`] under a [`TimerKey`]. A key
//! holds at most one pending timeout: scheduling it again cancels the older
//! one, and [`cancel`] / [`cancel_all`] drop pending work before it fires.
//! Callbacks still have to tolerate a disposed target, since the state they
//! touch may be gone by the time they run.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use lib_core::{ActiveForm, ToastId, ToastTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    Toast(ToastId, ToastTimer),
    MessageHide(ActiveForm),
    PostLogin,
    PostRegister,
}

thread_local! {
    static PENDING: RefCell<HashMap<TimerKey, Timeout>> = RefCell::new(HashMap::new());
}

/// Run `task` after `delay_ms`, replacing any timeout pending under `key`.
pub fn schedule(key: TimerKey, delay_ms: u32, task: impl FnOnce() + 'static) {
    let timeout = Timeout::new(delay_ms, move || {
        // Unregister before running so the task may schedule under the same key.
        let fired = PENDING.with(|pending| pending.borrow_mut().remove(&key));
        task();
        drop(fired);
    });

    let replaced = PENDING.with(|pending| pending.borrow_mut().insert(key, timeout));
    if replaced.is_some() {
        log::debug!("rescheduled {:?}", key);
    }
}

/// Cancel the timeout pending under `key`, if any.
pub fn cancel(key: TimerKey) -> bool {
    PENDING
        .with(|pending| pending.borrow_mut().remove(&key))
        .map(Timeout::cancel)
        .is_some()
}

/// Cancel every pending timeout.
pub fn cancel_all() {
    let drained: Vec<Timeout> = PENDING.with(|pending| pending.borrow_mut().drain().map(|(_, t)| t).collect());
    if !drained.is_empty() {
        log::debug!("cancelled {} pending timer(s)", drained.len());
    }
}
