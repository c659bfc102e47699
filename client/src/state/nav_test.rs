use super::*;

// =============================================================
// Menu
// =============================================================

#[test]
fn default_is_closed_and_unscrolled() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
}

#[test]
fn toggle_flips_and_close_forces_closed() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);

    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Scroll threshold
// =============================================================

#[test]
fn threshold_is_strictly_greater_than_ten() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(10.0));
    assert!(is_scrolled(10.5));
    assert!(is_scrolled(400.0));
}

#[test]
fn observe_scroll_reports_transitions_only() {
    let mut state = NavState::default();
    assert!(!state.observe_scroll(5.0));
    assert!(state.observe_scroll(11.0));
    assert!(state.scrolled);
    assert!(!state.observe_scroll(300.0));
    assert!(state.observe_scroll(0.0));
    assert!(!state.scrolled);
}

#[test]
fn scrolling_does_not_touch_menu() {
    let mut state = NavState { menu_open: true, scrolled: false };
    state.observe_scroll(50.0);
    assert!(state.menu_open);
}

#[test]
fn nav_class_tracks_scrolled() {
    assert_eq!(nav_class(NavState::default()), "nav");
    assert_eq!(nav_class(NavState { menu_open: false, scrolled: true }), "nav nav--scrolled");
}

// =============================================================
// Links
// =============================================================

#[test]
fn links_cover_every_route() {
    let hrefs: Vec<_> = PRIMARY_LINKS.iter().chain([&LOGIN_LINK, &REGISTER_LINK]).map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/", "/Appointment", "/contact", "/Login", "/Register"]);
}
