//! # client
//!
//! Leptos + WASM frontend for the bin-packing viewer.
//!
//! This crate contains the box-form editor, the application state, the
//! packing service client, and the `CanvasHost` bridge component that drives
//! `scene::engine::Engine` from DOM events and service responses.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then mount [`app::App`].
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
