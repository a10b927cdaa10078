//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wires route hooks and signals to the `session` operations and
//! delegates rendering details to `components`.

pub mod callback;
pub mod dashboard;
pub mod login;
