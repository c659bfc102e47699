//! Submission feedback: success panel and failure banner.

use forms::{FormMachine, FormRecord};
use leptos::prelude::*;

use crate::state::form::FormSignal;

/// Confirmation shown in place of a form after a completed submission.
#[component]
pub fn SuccessNotice(
    title: &'static str,
    message: &'static str,
    action_label: &'static str,
    on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="success-notice" role="status">
            <div class="success-notice__icon">"✓"</div>
            <h3 class="success-notice__title">{title}</h3>
            <p class="success-notice__message">{message}</p>
            <button type="button" class="success-notice__action" on:click=move |_| on_action.run(())>
                {action_label}
            </button>
        </div>
    }
}

/// Generic "please try again" banner, present only after a failed submission.
pub fn failure_banner<R: FormRecord>(form: FormSignal<R>) -> impl IntoView {
    move || {
        form.with(FormMachine::banner)
            .map(|message| view! { <div class="form-banner" role="alert">{message}</div> })
    }
}
