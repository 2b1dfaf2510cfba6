//! Toast stack rendered into `#toast-container`

use leptos::prelude::*;
use lib_core::{Toast, ToastId};

use crate::state::toasts::use_toast_context;
use crate::utils::constants::TOAST_CONTAINER;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast_context();
    let ids = move || {
        toasts
            .queue
            .with(|queue| queue.toasts().iter().map(|toast| toast.id).collect::<Vec<_>>())
    };

    view! {
        <div id=TOAST_CONTAINER class="toast-container">
            <For
                each=ids
                key=|id| *id
                children=move |id| view! { <ToastItem id=id/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(id: ToastId) -> impl IntoView {
    let toasts = use_toast_context();
    let class = move || {
        toasts
            .queue
            .with(|queue| queue.get(id).map(Toast::class_name).unwrap_or_default())
    };
    let message = toasts
        .queue
        .with_untracked(|queue| queue.get(id).map(|toast| toast.message.clone()))
        .unwrap_or_default();

    view! {
        <div class=class role="status">
            <span class="toast-message">{message}</span>
            <button type="button" class="toast-close" on:click=move |_| toasts.remove(id)>
                "×"
            </button>
        </div>
    }
}
