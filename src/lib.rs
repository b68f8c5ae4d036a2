//! # aeddi-login
//!
//! Leptos + WASM login screen for AEDDI: email/password sign-in, Google
//! (redirect and one-tap credential exchange) and Facebook (redirect).
//!
//! The sign-in flows live in [`controller::LoginController`], which talks to
//! the backend, session storage and navigation through traits so it runs
//! the same in the browser and in tests. `pages` renders the screens and
//! `app` wires routing for SSR + hydration.

pub mod app;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
