//! # auth-session
//!
//! Leptos + WASM client for account sign-in. Tracks the signed-in user and
//! drives register/login/logout against the users REST API, showing the
//! service's status message for a short window before redirecting.
//!
//! `state` holds the session snapshot and its async driver, `net` the REST
//! calls and wire types, `util` the router glue, and `pages`/`components`
//! the screens that consume it all.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
