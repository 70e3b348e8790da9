//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the static profile content, the three pages that
//! render it, site chrome, and the client state that gives the site its
//! behavior: the persisted light/dark theme and animated route transitions.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
