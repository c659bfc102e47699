//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the form building blocks shared by
//! the appointment, registration and contact pages.

pub mod footer;
pub mod inputs;
pub mod navbar;
pub mod notice;
