//! # client
//!
//! Leptos + WASM frontend for the reservation confirmation step.
//!
//! This crate renders the confirmation page, reads the session blobs left by
//! the date-picking step, and posts the finished record to the server. The
//! form rules themselves live in the `booking` crate.

pub mod app;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
