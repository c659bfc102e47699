//! Browser helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates `window` access (scroll offset, local date) from page and
//! component logic. Every helper has a non-hydrate branch so SSR and native
//! tests stay deterministic.

pub mod scroll;
pub mod today;
