//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form machine (if any) and delegates controls and
//! feedback rendering to `components`.

pub mod appointment;
pub mod contact;
pub mod home;
pub mod login;
pub mod register;
