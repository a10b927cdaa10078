//! Networking modules for the identity/profile server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP calls behind the `AuthApi` seam and `types` defines
//! the wire schema shared with the server.

pub mod api;
pub mod types;
