//! Patient appointment request page.

#[cfg(test)]
#[path = "appointment_test.rs"]
mod appointment_test;

use forms::appointment::{dob_bounds, preferred_date_min};
use forms::{AppointmentField, AppointmentRequest, ClinicLocation, FieldInput, FormField, Urgency};
use leptos::prelude::*;

use crate::components::inputs::{
    InputKind, busy, control_class, date_input, errored, labeled, submit_button, text_area, text_input, text_value,
};
use crate::components::notice::{SuccessNotice, failure_banner};
use crate::content::{APPOINTMENTS_EMAIL, BOOKING_REASONS, CLINIC_PHONE};
use crate::net::submit::SimulatedSubmitter;
use crate::state::form::{FormSignal, edit, new_form, submit, submit_another};
use crate::util::today::{input_bound, today};

type Field = AppointmentField;

#[component]
pub fn AppointmentPage() -> impl IntoView {
    let form = new_form::<AppointmentRequest>();
    let opened = today();
    let (dob_min, dob_max) = dob_bounds(opened);
    let preferred_min = preferred_date_min(opened);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form, SimulatedSubmitter::default(), today(), |_| {});
    };
    let on_book_another = Callback::new(move |()| submit_another(form));
    let editing = move || !form.with(|machine| machine.is_success());

    view! {
        <div class="page page--appointment">
            <header class="page-header">
                <h1>"Patient Appointment Request"</h1>
                <p>
                    "Book your medical appointment with us. Fill out the form below and we'll get back to you soon."
                </p>
            </header>

            <div class="page-columns">
                <aside class="info-card">
                    <h2>"Why Book With Us?"</h2>
                    <p>"Fast, convenient, and professional healthcare services."</p>
                    {BOOKING_REASONS
                        .into_iter()
                        .map(|reason| {
                            view! {
                                <div class="info-card__item">
                                    <span class=format!("icon icon-{}", reason.icon)></span>
                                    <div>
                                        <h3>{reason.title}</h3>
                                        <p>{reason.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                    <h3>"Contact Info"</h3>
                    <p><span class="icon icon-phone"></span>{CLINIC_PHONE}</p>
                    <p><span class="icon icon-mail"></span>{APPOINTMENTS_EMAIL}</p>
                </aside>

                <section class="form-card">
                    <Show
                        when=editing
                        fallback=move || {
                            view! {
                                <SuccessNotice
                                    title="Appointment Request Submitted Successfully!"
                                    message="Thank you for your submission. We will contact you within 24 hours to confirm your appointment details."
                                    action_label="Book Another Appointment"
                                    on_action=on_book_another
                                />
                            }
                        }
                    >
                        <form class="form-grid" on:submit=on_submit novalidate=true>
                            {failure_banner(form)}

                            <h3 class="form-section">"Personal Information"</h3>
                            {labeled(form, Field::FullName, true, text_input(form, Field::FullName, InputKind::Text, "John Doe"))}
                            {labeled(form, Field::Phone, true, text_input(form, Field::Phone, InputKind::Tel, "(123) 456-7890"))}
                            {labeled(form, Field::Email, true, text_input(form, Field::Email, InputKind::Email, "john@example.com"))}
                            {labeled(
                                form,
                                Field::Dob,
                                true,
                                date_input(
                                    form,
                                    Field::Dob,
                                    Some(input_bound(dob_min)),
                                    Some(input_bound(dob_max)),
                                ),
                            )}
                            {labeled(
                                form,
                                Field::Address,
                                true,
                                text_input(form, Field::Address, InputKind::Text, "123 Main Street, City, State, ZIP Code"),
                            )}

                            <h3 class="form-section">"Location & Appointment Details"</h3>
                            {labeled(form, Field::Location, true, location_select(form))}
                            {labeled(
                                form,
                                Field::PreferredDate,
                                true,
                                date_input(
                                    form,
                                    Field::PreferredDate,
                                    Some(input_bound(preferred_min)),
                                    None,
                                ),
                            )}

                            <h3 class="form-section">"Medical Information"</h3>
                            {labeled(
                                form,
                                Field::Symptoms,
                                true,
                                text_area(
                                    form,
                                    Field::Symptoms,
                                    5,
                                    "Please describe your symptoms in detail, including when they started, severity, and any other relevant information...",
                                ),
                            )}
                            <p class="form-hint">
                                "Be as detailed as possible to help us prepare for your appointment."
                            </p>
                            {urgency_options(form)}
                            {labeled(
                                form,
                                Field::Notes,
                                false,
                                text_area(form, Field::Notes, 3, "Any other information you'd like to share..."),
                            )}

                            <div class="form-footer">
                                <p class="form-hint">
                                    <span class="icon icon-lock"></span>
                                    "Your information is secure and will not be shared"
                                </p>
                                {submit_button(form, "Submit Appointment Request", "Processing...")}
                            </div>
                        </form>
                    </Show>
                </section>
            </div>

            <p class="emergency-note">
                "For emergencies, please call 911 or visit your nearest emergency room."
            </p>
        </div>
    }
}

fn location_select(form: FormSignal<AppointmentRequest>) -> impl IntoView {
    let field = Field::Location;
    let has_error = errored(form, field);
    view! {
        <select
            id=field.id()
            name=field.id()
            class=move || control_class(has_error())
            prop:value=text_value(form, field)
            on:change=move |ev| edit(form, field, FieldInput::Text(event_target_value(&ev)))
            disabled=busy(form)
        >
            <option value="" disabled=true>"Select a location"</option>
            {ClinicLocation::ALL
                .into_iter()
                .map(|location| view! { <option value=location.value()>{location.display_name()}</option> })
                .collect_view()}
        </select>
    }
}

fn urgency_options(form: FormSignal<AppointmentRequest>) -> impl IntoView {
    let field = Field::Urgency;
    let current = text_value(form, field);
    view! {
        <fieldset class="urgency">
            <legend class="form-field__label">{field.label()}</legend>
            <div class="urgency__options">
                {Urgency::ALL
                    .into_iter()
                    .map(|level| {
                        let selected = move || current() == level.value();
                        view! {
                            <label class=move || urgency_class(selected())>
                                <input
                                    type="radio"
                                    name=field.id()
                                    value=level.value()
                                    prop:checked=selected
                                    on:change=move |_| edit(form, field, FieldInput::from(level.value()))
                                    disabled=busy(form)
                                />
                                <span class="urgency__level">{level.value()}</span>
                                <p class="urgency__description">{level.description()}</p>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

fn urgency_class(selected: bool) -> &'static str {
    if selected { "urgency__option urgency__option--selected" } else { "urgency__option" }
}
