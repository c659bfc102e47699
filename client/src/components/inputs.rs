//! Form controls bound to a `FormSignal`.
//!
//! DESIGN
//! ======
//! Plain generic functions rather than `#[component]`s so a single helper
//! serves every `FormRecord`. Each control reads its value and error from
//! the machine and writes back through `state::form::edit`; all of them are
//! disabled while a submission is in flight.

#[cfg(test)]
#[path = "inputs_test.rs"]
mod inputs_test;

use forms::{FieldInput, FormField, FormMachine, FormRecord};
use leptos::prelude::*;

use crate::state::form::{FormSignal, edit, field_error, field_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
}

impl InputKind {
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
        }
    }
}

pub fn control_class(has_error: bool) -> &'static str {
    if has_error { "form-control form-control--error" } else { "form-control" }
}

pub fn submit_label(busy: bool, idle: &'static str, busy_label: &'static str) -> &'static str {
    if busy { busy_label } else { idle }
}

pub fn reveal_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

pub(crate) fn errored<R: FormRecord>(form: FormSignal<R>, field: R::Field) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    move || form.with(|machine| machine.error(field).is_some())
}

pub(crate) fn busy<R: FormRecord>(form: FormSignal<R>) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    move || form.with(FormMachine::is_busy)
}

pub(crate) fn text_value<R: FormRecord>(form: FormSignal<R>, field: R::Field) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || form.with(|machine| field_text(machine, field))
}

/// Label, control and inline error for one field.
pub fn labeled<R: FormRecord>(
    form: FormSignal<R>,
    field: R::Field,
    required: bool,
    control: impl IntoView + 'static,
) -> impl IntoView {
    let error = move || form.with(|machine| field_error(machine, field));
    view! {
        <div class="form-field">
            <label for=field.id() class="form-field__label">
                {field.label()}
                {required.then(|| view! { <span class="form-field__required">" *"</span> })}
            </label>
            {control}
            {move || error().map(|message| view! { <p class="form-field__error">{message}</p> })}
        </div>
    }
}

pub fn text_input<R: FormRecord>(
    form: FormSignal<R>,
    field: R::Field,
    kind: InputKind,
    placeholder: &'static str,
) -> impl IntoView {
    let has_error = errored(form, field);
    view! {
        <input
            type=kind.as_attr()
            id=field.id()
            name=field.id()
            class=move || control_class(has_error())
            placeholder=placeholder
            prop:value=text_value(form, field)
            on:input=move |ev| edit(form, field, FieldInput::Text(event_target_value(&ev)))
            disabled=busy(form)
        />
    }
}

/// Date picker with optional `YYYY-MM-DD` bounds.
pub fn date_input<R: FormRecord>(
    form: FormSignal<R>,
    field: R::Field,
    min: Option<String>,
    max: Option<String>,
) -> impl IntoView {
    let has_error = errored(form, field);
    view! {
        <input
            type="date"
            id=field.id()
            name=field.id()
            class=move || control_class(has_error())
            min=min
            max=max
            prop:value=text_value(form, field)
            on:input=move |ev| edit(form, field, FieldInput::Text(event_target_value(&ev)))
            disabled=busy(form)
        />
    }
}

pub fn text_area<R: FormRecord>(
    form: FormSignal<R>,
    field: R::Field,
    rows: u32,
    placeholder: &'static str,
) -> impl IntoView {
    let has_error = errored(form, field);
    view! {
        <textarea
            id=field.id()
            name=field.id()
            rows=rows
            class=move || control_class(has_error())
            placeholder=placeholder
            prop:value=text_value(form, field)
            on:input=move |ev| edit(form, field, FieldInput::Text(event_target_value(&ev)))
            disabled=busy(form)
        ></textarea>
    }
}

/// Password input with its own show/hide toggle.
pub fn password_input<R: FormRecord>(form: FormSignal<R>, field: R::Field, visible: RwSignal<bool>) -> impl IntoView {
    let has_error = errored(form, field);
    view! {
        <div class="form-control-wrap">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                id=field.id()
                name=field.id()
                class=move || control_class(has_error())
                placeholder="••••••••"
                prop:value=text_value(form, field)
                on:input=move |ev| edit(form, field, FieldInput::Text(event_target_value(&ev)))
                disabled=busy(form)
            />
            <button
                type="button"
                class="form-control__reveal"
                aria-label=move || reveal_label(visible.get())
                on:click=move |_| visible.update(|shown| *shown = !*shown)
            >
                {move || reveal_label(visible.get())}
            </button>
        </div>
    }
}

pub fn submit_button<R: FormRecord>(form: FormSignal<R>, idle: &'static str, busy_label: &'static str) -> impl IntoView {
    let is_busy = busy(form);
    view! {
        <button type="submit" class="form-submit" disabled=is_busy>
            <Show when=is_busy>
                <span class="spinner"></span>
            </Show>
            {move || submit_label(is_busy(), idle, busy_label)}
        </button>
    }
}
