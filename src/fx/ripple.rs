//! Ripple overlay geometry
//!
//! A ripple is a square overlay big enough to cover its host element,
//! centered on the activation point. The overlay itself is ephemeral; the
//! controller removes it when its entrance animation ends.

use glam::Vec2;

/// Size and placement for one ripple overlay, in element-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    /// Side length of the square overlay
    pub size: f32,
    /// Left offset of the overlay's top-left corner
    pub left: f32,
    /// Top offset of the overlay's top-left corner
    pub top: f32,
}

/// Compute overlay geometry for a host of the given rendered size.
///
/// `pointer` is the activation point in element-local coordinates, clamped
/// into the element's box. `None` (keyboard activation) centers the overlay
/// on the element instead.
pub fn ripple_geometry(width: f32, height: f32, pointer: Option<Vec2>) -> RippleGeometry {
    let size = width.max(height);
    let center = pointer
        .map(|p| p.clamp(Vec2::ZERO, Vec2::new(width, height)))
        .unwrap_or_else(|| Vec2::new(width / 2.0, height / 2.0));
    RippleGeometry {
        size,
        left: center.x - size / 2.0,
        top: center.y - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_covers_the_larger_side() {
        let geom = ripple_geometry(200.0, 100.0, Some(Vec2::new(50.0, 50.0)));
        assert_eq!(geom.size, 200.0);

        let geom = ripple_geometry(40.0, 120.0, Some(Vec2::new(10.0, 10.0)));
        assert_eq!(geom.size, 120.0);
    }

    #[test]
    fn overlay_centers_on_pointer() {
        let geom = ripple_geometry(200.0, 100.0, Some(Vec2::new(150.0, 25.0)));
        assert!((geom.left + geom.size / 2.0 - 150.0).abs() < 0.001);
        assert!((geom.top + geom.size / 2.0 - 25.0).abs() < 0.001);
    }

    #[test]
    fn corner_click_offsets_by_half_size() {
        // Click at the exact top-left corner
        let geom = ripple_geometry(180.0, 44.0, Some(Vec2::ZERO));
        assert_eq!(geom.left, -geom.size / 2.0);
        assert_eq!(geom.top, -geom.size / 2.0);
    }

    #[test]
    fn stray_pointer_clamps_into_the_box() {
        // Element moved between the event and the rect read
        let geom = ripple_geometry(200.0, 100.0, Some(Vec2::new(250.0, -30.0)));
        assert!((geom.left + geom.size / 2.0 - 200.0).abs() < 0.001);
        assert!((geom.top + geom.size / 2.0 - 0.0).abs() < 0.001);
    }

    #[test]
    fn keyboard_activation_centers_on_element() {
        let geom = ripple_geometry(120.0, 40.0, None);
        assert_eq!(geom.size, 120.0);
        assert!((geom.left + geom.size / 2.0 - 60.0).abs() < 0.001);
        assert!((geom.top + geom.size / 2.0 - 20.0).abs() < 0.001);
    }
}
