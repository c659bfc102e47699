//! Submission transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal has no backend yet. `submit::SimulatedSubmitter` implements the
//! `forms::SubmissionPort` seam so a real HTTP port can replace it without
//! touching the pages.

pub mod submit;
