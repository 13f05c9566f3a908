//! # workspace-client
//!
//! Leptos + WASM frontend for the Workspace account flows. Replaces the
//! React `src/views` account screens with a Rust-native UI layer.
//!
//! This crate contains the account pages (sign-up, sign-in, reset,
//! verify), shared form components, page state, and the HTTP client for
//! the external auth service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install the panic hook, wire console logging, and
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
