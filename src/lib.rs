//! # public-dashboard
//!
//! Leptos + WASM page for shareable project dashboards: fetches a dashboard
//! by its public name, lays out its charts, and lets team members adjust
//! the background color and title before saving them back.
//!
//! The view rules live in `state` and are independent of the browser; the
//! backend is reached through the `net::api` capability traits so the
//! controller can be driven by fakes in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
