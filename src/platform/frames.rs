//! Animation-frame scheduling
//!
//! Thin wrappers over the window's frame scheduler. Handles are the
//! browser's request ids; `fx::FramePacer` tracks them per element.

use wasm_bindgen::prelude::*;

/// Schedule `callback` for the next animation frame
pub fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    let window = web_sys::window()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

/// Cancel a previously scheduled frame
pub fn cancel_frame(handle: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(handle);
    }
}
