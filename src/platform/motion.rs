//! Reduced-motion preference
//!
//! The accessibility signal that turns off the animated behaviors.

/// Source of the user's motion preference
pub trait MotionPreferenceSource {
    /// True when the platform asks for reduced motion
    fn reduced_motion(&self) -> bool;
}

/// Fixed preference for native builds and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPreference(pub bool);

impl MotionPreferenceSource for FixedPreference {
    fn reduced_motion(&self) -> bool {
        self.0
    }
}

/// Live preference from the document's media-query facility.
///
/// A missing or failing media query reads as "no preference".
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPreference;

#[cfg(target_arch = "wasm32")]
impl MotionPreferenceSource for MediaQueryPreference {
    fn reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_preference_reports_its_value() {
        assert!(FixedPreference(true).reduced_motion());
        assert!(!FixedPreference(false).reduced_motion());
        assert!(!FixedPreference::default().reduced_motion());
    }
}
