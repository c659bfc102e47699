//! Contact page: info cards, message form, department extensions.

use forms::{ContactField, ContactMessage};
use leptos::prelude::*;

use crate::components::inputs::{InputKind, labeled, submit_button, text_area, text_input};
use crate::components::notice::{SuccessNotice, failure_banner};
use crate::content::{CONTACT_CARDS, DEPARTMENTS, EMERGENCY_NOTICE, STREET_ADDRESS};
use crate::net::submit::SimulatedSubmitter;
use crate::state::form::{new_form, submit, submit_another};
use crate::util::today::today;

type Field = ContactField;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = new_form::<ContactMessage>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form, SimulatedSubmitter::default(), today(), |_| {});
    };
    let on_send_another = Callback::new(move |()| submit_another(form));
    let editing = move || !form.with(|machine| machine.is_success());

    view! {
        <div class="page page--contact">
            <header class="page-header">
                <h1>"Get in Touch"</h1>
                <p>
                    "We're here to help. Contact us for appointments, support, or any questions about our services."
                </p>
            </header>

            <div class="page-columns">
                <div class="contact-info">
                    <h2>"Contact Information"</h2>
                    <div class="contact-info__cards">
                        {CONTACT_CARDS
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <div class="contact-card">
                                        <span class=format!("icon icon-{}", card.icon)></span>
                                        <h3>{card.title}</h3>
                                        {card.details.iter().map(|detail| view! { <p>{*detail}</p> }).collect_view()}
                                        <p class="contact-card__description">{card.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="emergency-notice" role="note">
                        <span class="icon icon-alert-circle"></span>
                        <div>
                            <h3>"Emergency Notice"</h3>
                            <p>{EMERGENCY_NOTICE}</p>
                        </div>
                    </div>
                </div>

                <div class="contact-side">
                    <section class="form-card">
                        <Show
                            when=editing
                            fallback=move || {
                                view! {
                                    <SuccessNotice
                                        title="Message Sent Successfully!"
                                        message="Thank you for contacting us. Our team will get back to you within 24 hours."
                                        action_label="Send Another Message"
                                        on_action=on_send_another
                                    />
                                }
                            }
                        >
                            <div class="form-card__header">
                                <span class="icon icon-message-square"></span>
                                <h2>"Send us a Message"</h2>
                                <p>"Fill out the form below and we'll respond promptly."</p>
                            </div>
                            {failure_banner(form)}
                            <form class="form-stack" on:submit=on_submit novalidate=true>
                                {labeled(form, Field::Name, false, text_input(form, Field::Name, InputKind::Text, "John Doe"))}
                                {labeled(form, Field::Email, false, text_input(form, Field::Email, InputKind::Email, "you@example.com"))}
                                {labeled(form, Field::Subject, false, text_input(form, Field::Subject, InputKind::Text, "How can we help?"))}
                                {labeled(
                                    form,
                                    Field::Message,
                                    false,
                                    text_area(form, Field::Message, 6, "Please provide details about your inquiry..."),
                                )}
                                {submit_button(form, "Send Message", "Sending Message...")}
                            </form>
                        </Show>
                    </section>

                    <section class="departments">
                        <h2>"Department Contacts"</h2>
                        {DEPARTMENTS
                            .into_iter()
                            .map(|department| {
                                view! {
                                    <div class="department">
                                        <h3>{department.name}</h3>
                                        <p>"Phone: " <span>{department.dial_string()}</span></p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </section>

                    <section class="location">
                        <h2>"Our Location"</h2>
                        <p><span class="icon icon-map-pin"></span>{STREET_ADDRESS}", Healthcare City"</p>
                        <p class="location__parking">"Parking: Free parking available"</p>
                    </section>
                </div>
            </div>
        </div>
    }
}
