//! Navigation shell state (mobile menu + scrolled styling).
//!
//! DESIGN
//! ======
//! The shell keeps this in a component-local `RwSignal`. The scroll listener
//! in `util::scroll` feeds `observe_scroll`; link clicks call `close_menu`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::app::{APPOINTMENT_PATH, CONTACT_PATH, HOME_PATH, LOGIN_PATH, REGISTER_PATH};

/// Vertical offset in CSS pixels past which the bar switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recompute `scrolled` for the given offset. Returns whether it changed.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = is_scrolled(scroll_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// CSS class for the bar itself.
pub fn nav_class(state: NavState) -> &'static str {
    if state.scrolled { "nav nav--scrolled" } else { "nav" }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const PRIMARY_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", href: HOME_PATH, icon: "home" },
    NavLink { label: "Appointment", href: APPOINTMENT_PATH, icon: "calendar" },
    NavLink { label: "Contact", href: CONTACT_PATH, icon: "phone" },
];

pub const LOGIN_LINK: NavLink = NavLink { label: "Login", href: LOGIN_PATH, icon: "log-in" };
pub const REGISTER_LINK: NavLink = NavLink { label: "Register", href: REGISTER_PATH, icon: "user" };

/// The register link is labelled differently inside the mobile menu.
pub const MOBILE_REGISTER_LABEL: &str = "Create Account";
