//! Browser application for the MediCare booking portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the navigation shell and the four public pages on top of the
//! `forms` crate. The same crate compiles for SSR (`ssr`) inside the `medicare`
//! host and for WASM hydration (`hydrate`) in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
