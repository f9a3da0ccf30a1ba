//! # client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//! Replaces the original React single-page portfolio with a Rust-native
//! UI layer: static content sections, anchor navigation, and a floating
//! assistant chat widget that talks to a remote completion endpoint.
//!
//! This crate contains pages, components, application state, and the
//! outbound network layer for the assistant endpoint.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
