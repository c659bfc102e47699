//! Sticky top navigation with a collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App` above the routed pages. Owns its `NavState` signal
//! and the window scroll subscription for as long as it is mounted.

use leptos::prelude::*;

use crate::state::nav::{LOGIN_LINK, MOBILE_REGISTER_LABEL, NavLink, NavState, PRIMARY_LINKS, REGISTER_LINK, nav_class};
use crate::util::scroll::watch_scroll;

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    watch_scroll(nav);

    let close_menu = move |_: leptos::ev::MouseEvent| nav.update(NavState::close_menu);
    let menu_open = move || nav.get().menu_open;

    let desktop_link = move |link: NavLink| {
        view! {
            <a href=link.href class="nav__link" on:click=close_menu>
                <span class=icon_class(link.icon)></span>
                {link.label}
            </a>
        }
    };
    let mobile_link = move |link: NavLink, label: &'static str| {
        view! {
            <a href=link.href class="nav__mobile-link" on:click=close_menu>
                <span class=icon_class(link.icon)></span>
                {label}
            </a>
        }
    };

    view! {
        <nav class=move || nav_class(nav.get())>
            <div class="nav__inner">
                <a href="/" class="nav__brand" on:click=close_menu>
                    <img src="/logo.jpeg" alt="MediCare Logo" class="nav__logo"/>
                    <span class="nav__brand-name">"MediCare"<span class="nav__brand-plus">"+"</span></span>
                </a>

                <div class="nav__links">
                    {PRIMARY_LINKS.into_iter().map(desktop_link).collect_view()}
                </div>

                <div class="nav__auth">
                    <a href=LOGIN_LINK.href class="nav__login" on:click=close_menu>{LOGIN_LINK.label}</a>
                    <a href=REGISTER_LINK.href class="nav__register" on:click=close_menu>{REGISTER_LINK.label}</a>
                </div>

                <button
                    class="nav__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="nav__mobile">
                    {PRIMARY_LINKS.into_iter().map(|link| mobile_link(link, link.label)).collect_view()}
                    <div class="nav__mobile-auth">
                        {mobile_link(LOGIN_LINK, LOGIN_LINK.label)}
                        {mobile_link(REGISTER_LINK, MOBILE_REGISTER_LABEL)}
                    </div>
                </div>
            </Show>
        </nav>
        <div class="nav-spacer"></div>
    }
}

fn icon_class(icon: &'static str) -> String {
    format!("icon icon-{icon}")
}
