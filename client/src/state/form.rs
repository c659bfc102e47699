//! Reactive glue between `forms::FormMachine` and the page views.
//!
//! DESIGN
//! ======
//! Each form page owns one `RwSignal<FormMachine<R>>`. Reads go through the
//! pure accessors below so they can be tested without a reactive runtime;
//! `submit` is the only place a future is spawned.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use forms::{AfterSubmit, FieldInput, FieldValue, FormMachine, FormRecord, SubmissionPort};
use leptos::prelude::*;
use time::Date;

pub type FormSignal<R> = RwSignal<FormMachine<R>>;

pub fn new_form<R: FormRecord>() -> FormSignal<R> {
    RwSignal::new(FormMachine::new())
}

/// Current text of `field`. Flag fields read as empty.
pub fn field_text<R: FormRecord>(machine: &FormMachine<R>, field: R::Field) -> String {
    machine.record().value(field).as_text().unwrap_or_default().to_owned()
}

pub fn field_flag<R: FormRecord>(machine: &FormMachine<R>, field: R::Field) -> bool {
    matches!(machine.record().value(field), FieldValue::Flag(true))
}

pub fn field_error<R: FormRecord>(machine: &FormMachine<R>, field: R::Field) -> Option<String> {
    machine.error(field).map(str::to_owned)
}

/// Apply one input event. Rejected edits are logged and dropped; the view
/// keeps showing the stored value.
pub fn apply_edit<R: FormRecord>(machine: &mut FormMachine<R>, field: R::Field, input: FieldInput) {
    if let Err(err) = machine.set_field(field, input) {
        log::debug!("{} edit ignored: {err}", R::NAME);
    }
}

pub fn edit<R: FormRecord>(form: FormSignal<R>, field: R::Field, input: FieldInput) {
    form.update(|machine| apply_edit(machine, field, input));
}

pub fn submit_another<R: FormRecord>(form: FormSignal<R>) {
    form.update(FormMachine::submit_another);
}

/// Validate, then hand the snapshot to `port` on the local executor.
///
/// `on_redirect` runs only when the record's post-success transition is a
/// redirect.
pub fn submit<R, P>(form: FormSignal<R>, port: P, today: Date, on_redirect: impl FnOnce(&'static str) + 'static)
where
    R: FormRecord,
    P: SubmissionPort<R> + 'static,
{
    let snapshot = match form.try_update(|machine| machine.begin_submit(today)) {
        Some(Ok(snapshot)) => snapshot,
        Some(Err(blocked)) => {
            log::debug!("{} submit blocked: {blocked}", R::NAME);
            return;
        }
        None => return,
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = port.submit(&snapshot).await;
        let after = form.try_update(|machine| machine.finish_submit(result)).flatten();
        if let Some(path) = after.and_then(redirect_target) {
            on_redirect(path);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (port, snapshot, on_redirect);
        log::debug!("{} submit has no executor outside the browser", R::NAME);
    }
}

pub fn redirect_target(after: AfterSubmit) -> Option<&'static str> {
    match after {
        AfterSubmit::Redirect(path) => Some(path),
        AfterSubmit::ShowConfirmation => None,
    }
}
