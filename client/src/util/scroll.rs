//! Window scroll tracking for the navigation shell.
//!
//! TRADE-OFFS
//! ==========
//! Every scroll event recomputes the flag with no throttling; the signal is
//! only written when the threshold is actually crossed, so re-renders stay
//! rare. SSR paths no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

use crate::state::nav::NavState;

/// Current vertical scroll offset of the window, `0.0` without a browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Feed window scroll events into `nav` until the owning component unmounts.
///
/// The listener is registered on mount and removed by the owner's cleanup,
/// so remounting the shell never stacks listeners.
pub fn watch_scroll(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        let sync = move || {
            let y = scroll_y();
            let mut next = nav.get_untracked();
            if next.observe_scroll(y) {
                nav.set(next);
            }
        };
        sync();
        let handle = window_event_listener(leptos::ev::scroll, move |_| sync());
        on_cleanup(move || {
            log::debug!("nav scroll listener removed");
            handle.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}
