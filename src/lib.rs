//! # worldsmith
//!
//! Leptos + WASM frontend for the Worldsmith tabletop-campaign authoring
//! tool. Renders authentication, account, and world-building routes and
//! persists everything through the backend REST API.
//!
//! This crate contains pages, components, application state, and the REST
//! client. Domain logic (list filtering, draft merging, dirty tracking,
//! validation) lives in plain functions so it is testable without a browser.

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
    leptos::mount::hydrate_body(app::App);
}
