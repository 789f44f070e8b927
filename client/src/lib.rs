//! # client
//!
//! Leptos + WASM frontend for the chat-driven app builder.
//!
//! This crate contains the IDE page, its components, client state, the
//! build-request transitions, and the REST helpers for the auth and
//! generation services.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
