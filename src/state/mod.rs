//! Client-side view state.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s by the pages. Transitions are methods so
//! they can be tested without a reactive runtime.

pub mod auth;
pub mod login;
