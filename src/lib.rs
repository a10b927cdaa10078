//! # auth-portal
//!
//! Leptos + WASM client that establishes, persists, and validates a user's
//! authenticated session across local password login and redirect-based
//! external providers (Google, Okta).
//!
//! The authentication state machine lives in [`session`] and has no Leptos
//! dependency; [`pages`] and [`components`] wire it to the router.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
