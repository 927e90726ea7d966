//! Canvas viewport synchronization.
//!
//! Bridges the canvas element's layout size to the engine. Browser-only, so
//! everything here is `#[cfg(feature = "csr")]`.

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use scene::engine::Engine;

/// Read the canvas element's CSS dimensions and device pixel ratio, then push them to the engine.
///
/// Called before every pointer event and on window resize so ray casting and
/// tooltip placement match what is on screen. The engine multiplies by DPR
/// itself when sizing the backing store.
#[cfg(feature = "csr")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    let core = &engine.core;
    let unchanged = (core.viewport.width - width).abs() < f64::EPSILON
        && (core.viewport.height - height).abs() < f64::EPSILON
        && (core.viewport.dpr - dpr).abs() < f64::EPSILON;
    if !unchanged {
        engine.set_viewport(width, height, dpr);
    }
}

/// Seed for box colors, taken from the wall clock.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn color_seed() -> u64 {
    js_sys::Date::now() as u64
}
