//! Account registration page.
//!
//! Success navigates to the login route instead of showing a confirmation.

use forms::{FieldInput, FormField, RegistrationField, RegistrationRequest};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{HOME_PATH, LOGIN_PATH};
use crate::components::inputs::{InputKind, busy, date_input, errored, labeled, password_input, submit_button, text_input};
use crate::components::notice::failure_banner;
use crate::content::{PASSWORD_POLICY_HINT, REGISTRATION_BENEFITS};
use crate::net::submit::SimulatedSubmitter;
use crate::state::form::{FormSignal, edit, field_error, field_flag, new_form, submit};
use crate::util::today::{input_bound, today};

type Field = RegistrationField;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = new_form::<RegistrationRequest>();
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);
    let dob_max = input_bound(today());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        submit(form, SimulatedSubmitter::default(), today(), move |path| {
            navigate(path, NavigateOptions::default());
        });
    };

    view! {
        <div class="page page--register">
            <a href=HOME_PATH class="back-link">
                <span class="icon icon-arrow-left"></span>
                "Back to Home"
            </a>

            <div class="register-card">
                <aside class="register-card__aside">
                    <span class="icon icon-shield"></span>
                    <h2>"Join Our Medical Community"</h2>
                    <p>
                        "Create your account to access premium healthcare services and manage your appointments easily."
                    </p>
                    <ul class="benefits">
                        {REGISTRATION_BENEFITS
                            .into_iter()
                            .map(|benefit| view! { <li><span class="icon icon-check"></span>{benefit}</li> })
                            .collect_view()}
                    </ul>
                    <p>"Already have an account?"</p>
                    <a href=LOGIN_PATH class="register-card__signin">"Sign in here"</a>
                </aside>

                <section class="register-card__form">
                    <h1>"Create Account"</h1>
                    <p class="form-subtitle">"Fill in your details to get started"</p>

                    <form class="form-stack" on:submit=on_submit novalidate=true>
                        {failure_banner(form)}
                        {labeled(form, Field::FullName, false, text_input(form, Field::FullName, InputKind::Text, "John Doe"))}
                        {labeled(form, Field::Email, false, text_input(form, Field::Email, InputKind::Email, "you@example.com"))}
                        {labeled(form, Field::Phone, false, text_input(form, Field::Phone, InputKind::Tel, "(123) 456-7890"))}
                        {labeled(form, Field::Dob, false, date_input(form, Field::Dob, None, Some(dob_max)))}
                        {labeled(form, Field::Password, false, password_input(form, Field::Password, show_password))}
                        <p class="form-hint">{PASSWORD_POLICY_HINT}</p>
                        {labeled(form, Field::ConfirmPassword, false, password_input(form, Field::ConfirmPassword, show_confirm))}
                        {terms_checkbox(form)}
                        {submit_button(form, "Create Account", "Creating Account...")}
                    </form>
                </section>
            </div>

            <p class="page-footnote">"Your information is protected with HIPAA-compliant security measures"</p>
        </div>
    }
}

fn terms_checkbox(form: FormSignal<RegistrationRequest>) -> impl IntoView {
    let field = Field::AcceptTerms;
    let has_error = errored(form, field);
    let error = move || form.with(|machine| field_error(machine, field));
    view! {
        <div class="form-field form-field--checkbox">
            <label class=move || if has_error() { "checkbox checkbox--error" } else { "checkbox" }>
                <input
                    type="checkbox"
                    id=field.id()
                    name=field.id()
                    prop:checked=move || form.with(|machine| field_flag(machine, field))
                    on:change=move |ev| edit(form, field, FieldInput::Flag(event_target_checked(&ev)))
                    disabled=busy(form)
                />
                <span>
                    "I agree to the " <a href="/terms">"Terms & Conditions"</a> " and "
                    <a href="/privacy">"Privacy Policy"</a>
                </span>
            </label>
            {move || error().map(|message| view! { <p class="form-field__error">{message}</p> })}
        </div>
    }
}
