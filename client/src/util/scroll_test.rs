#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scroll_y_is_zero_without_browser() {
    assert!(scroll_y().abs() < f64::EPSILON);
}

#[test]
fn zero_offset_is_not_scrolled() {
    let mut state = NavState::default();
    assert!(!state.observe_scroll(scroll_y()));
    assert!(!state.scrolled);
}
