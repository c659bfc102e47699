//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal` by the components that own them. No
//! state is shared across pages; each form page builds its own machine.

pub mod form;
pub mod nav;
