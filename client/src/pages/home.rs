//! Landing page: hero, features, stats, testimonials, call to action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::{APPOINTMENT_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::components::footer::SiteFooter;
use crate::content::{CTA_POINTS, FEATURES, HERO_HIGHLIGHTS, STATS, TESTIMONIALS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero">
                <div class="hero__copy">
                    <span class="hero__badge">"E-Health Appointment System"</span>
                    <h1>"Your Health, " <span class="hero__accent">"Our Priority"</span></h1>
                    <p>
                        "Book medical appointments instantly with trusted healthcare providers. Simple, secure, and accessible healthcare for everyone."
                    </p>
                    <div class="hero__actions">
                        <a href=REGISTER_PATH class="button button--primary">"Get Started Free"</a>
                        <a href=LOGIN_PATH class="button button--ghost">"Existing Patient"</a>
                    </div>
                </div>
                <div class="hero__highlights">
                    {HERO_HIGHLIGHTS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="hero__highlight">
                                    <span class=format!("icon icon-{}", item.icon)></span>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="features">
                <h2>"Why Choose Our Platform"</h2>
                <p>"We're revolutionizing healthcare access with technology that puts patients first"</p>
                <div class="features__grid">
                    {FEATURES
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <span class=format!("icon icon-{}", feature.icon)></span>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="stats">
                {STATS
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <div class="stat__value">{stat.value}</div>
                                <div class="stat__label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="testimonials">
                <h2>"What Our Users Say"</h2>
                <p>"Join thousands of satisfied patients and doctors"</p>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .into_iter()
                        .map(|testimonial| {
                            view! {
                                <figure class="testimonial">
                                    <div class="testimonial__stars" aria-label=format!("{} out of 5", testimonial.rating)>
                                        {testimonial
                                            .stars()
                                            .into_iter()
                                            .map(|filled| {
                                                view! {
                                                    <span class=star_class(filled)>"★"</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <blockquote>{format!("\"{}\"", testimonial.content)}</blockquote>
                                    <figcaption>
                                        <strong>{testimonial.name}</strong>
                                        <span>{testimonial.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Transform Your Healthcare Experience?"</h2>
                <p>"Join thousands who have made the switch to smarter healthcare management"</p>
                <div class="cta__actions">
                    <a href=APPOINTMENT_PATH class="button button--primary">"Book Appointment Now"</a>
                    <a href=REGISTER_PATH class="button button--ghost">"Create Free Account"</a>
                </div>
                <ul class="cta__points">
                    {CTA_POINTS
                        .into_iter()
                        .map(|point| view! { <li><span class="icon icon-check-circle"></span>{point}</li> })
                        .collect_view()}
                </ul>
            </section>

            <SiteFooter/>
        </div>
    }
}

fn star_class(filled: bool) -> &'static str {
    if filled { "star star--filled" } else { "star" }
}
