//! Login placeholder. The portal has no accounts backend yet; registration
//! redirects here so the flow has somewhere to land.

use leptos::prelude::*;

use crate::app::{HOME_PATH, REGISTER_PATH};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="page page--login">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Patient sign-in is not available yet."</p>
                <p>"If you just registered, your account request has been received."</p>
                <div class="login-card__actions">
                    <a href=REGISTER_PATH class="button button--primary">"Create Account"</a>
                    <a href=HOME_PATH class="button button--ghost">"Back to Home"</a>
                </div>
            </div>
        </div>
    }
}
