//! # client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! This crate contains the routed pages, chrome components, page-level state
//! machines, and the HTTP client for the portfolio API. The server crate
//! renders it with SSR; the browser build hydrates it.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
