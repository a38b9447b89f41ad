//! Campus FX - interaction effects for the CampusConnect web UI
//!
//! Core modules:
//! - `fx`: Pure effect logic (geometry, state machines, motion gating)
//! - `platform`: Browser capability seam (motion preference, frame scheduling)
//!
//! The controller itself lives in the wasm entry point (`main.rs`): it scans
//! the hosting document once on page-ready and wires DOM events into `fx`.

pub mod fx;
pub mod platform;

pub use fx::{RevealState, TiltAngles};

/// Effect tuning constants
pub mod consts {
    /// Visible fraction at which a surface reveals
    pub const REVEAL_RATIO: f64 = 0.15;
    /// Root margin shrinking the effective viewport 10% from the bottom
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

    /// Full angular range of the tilt effect in degrees (half per direction)
    pub const TILT_RANGE_DEG: f32 = 6.0;
    /// Per-axis tilt bound in degrees
    pub const TILT_MAX_DEG: f32 = TILT_RANGE_DEG / 2.0;
    /// Perspective distance for the tilt transform, pixels
    pub const TILT_PERSPECTIVE_PX: f32 = 700.0;

    /// Clickable controls that get ripple feedback
    pub const RIPPLE_SELECTOR: &str = ".btn";
    /// Surfaces that reveal as they scroll into view
    pub const REVEAL_SELECTOR: &str = ".card, .panel, .table-wrap";
    /// Cards that tilt under the pointer
    pub const TILT_SELECTOR: &str = ".card";

    /// Class for the transient ripple overlay
    pub const RIPPLE_CLASS: &str = "ripple";
    /// Class tagging a surface that has not yet revealed
    pub const REVEAL_PENDING_CLASS: &str = "reveal-init";
    /// Class tagging a revealed surface
    pub const REVEAL_DONE_CLASS: &str = "reveal-in";
    /// Class tagging a card while the pointer hovers it
    pub const TILT_ACTIVE_CLASS: &str = "tilting";
}
