//! Client authentication state machine.
//!
//! ARCHITECTURE
//! ============
//! Credential Submitter (`submit`) or Callback Resolver (`callback`) writes
//! the Session Store (`store`). The Route Guard (`guard`) reads it on every
//! navigation, and the Profile Loader (`profile`) invalidates it when the
//! server rejects the token. None of these modules depend on Leptos.

pub mod callback;
pub mod guard;
pub mod profile;
pub mod store;
pub mod submit;
