//! Platform abstraction layer
//!
//! Handles the hosting-environment capabilities the effects consume:
//! - Motion preference (prefers-reduced-motion)
//! - Animation-frame scheduling
//!
//! Browser bindings are wasm-only; native builds and tests see the trait
//! plus a fixed stand-in.

pub mod motion;

#[cfg(target_arch = "wasm32")]
pub mod frames;

pub use motion::{FixedPreference, MotionPreferenceSource};

#[cfg(target_arch = "wasm32")]
pub use motion::MediaQueryPreference;
