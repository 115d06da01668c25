//! # portal-client
//!
//! Leptos + WASM frontend for the Portal web application: authentication
//! (email/password and Google OAuth), silent token refresh with transparent
//! 401 retry, a cached user profile, and a guarded placeholder dashboard.
//!
//! The session and profile managers are plain Rust with an injected
//! transport and navigation callback, so the whole token lifecycle is
//! unit-testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
