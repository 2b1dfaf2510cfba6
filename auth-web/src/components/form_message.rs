//! Inline message slot under each form

use leptos::prelude::*;
use lib_core::ActiveForm;

use crate::state::forms::use_form_context;

#[component]
pub fn FormMessage(form: ActiveForm, id: &'static str) -> impl IntoView {
    let forms = use_form_context();

    let class = move || match forms.message(form) {
        Some(message) => format!("message show {}", message.kind.css_class()),
        None => "message".to_string(),
    };
    let text = move || forms.message(form).map(|message| message.text).unwrap_or_default();

    view! { <div id=id class=class>{text}</div> }
}
