//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::navbar::NavBar;
use crate::pages::appointment::AppointmentPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;

/// Route paths. Casing matches the links already published by the clinic.
pub const HOME_PATH: &str = "/";
pub const APPOINTMENT_PATH: &str = "/Appointment";
pub const REGISTER_PATH: &str = "/Register";
pub const CONTACT_PATH: &str = "/contact";
pub const LOGIN_PATH: &str = "/Login";

/// HTML shell used by the SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/medicare.css"/>
        <Title text="MediCare | Book Your Appointment"/>
        <Router>
            <NavBar/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("Appointment") view=AppointmentPage/>
                    <Route path=StaticSegment("Register") view=RegisterPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("Login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
