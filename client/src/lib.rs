//! # client
//!
//! Leptos + WASM chat page served by the receptionist server at `/`.
//!
//! The same page doubles as the widget content surface: with `?widget=1` it
//! renders a compact, tenant-branded panel that the embeddable loader frames
//! in an iframe.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
