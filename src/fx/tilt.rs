//! Pointer tilt
//!
//! Rotation angles derived from where the pointer sits inside a card, plus
//! the per-element pacing that keeps at most one style write queued per
//! animation frame.

use glam::Vec2;

use crate::consts::{TILT_MAX_DEG, TILT_RANGE_DEG};

/// Rotation pair applied to a tilting card, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltAngles {
    /// Rotation about the horizontal axis (vertical pointer position, inverted)
    pub rot_x: f32,
    /// Rotation about the vertical axis (horizontal pointer position)
    pub rot_y: f32,
}

impl TiltAngles {
    /// Neutral pose applied on pointer exit
    pub const NEUTRAL: Self = Self {
        rot_x: 0.0,
        rot_y: 0.0,
    };
}

/// Derive tilt angles for a card of `size` hovered at `local`, both in
/// element-local pixels. Points outside the box clamp to its edge; a
/// degenerate box reads as its own center.
pub fn tilt_angles(size: Vec2, local: Vec2) -> TiltAngles {
    let nx = if size.x > 0.0 {
        (local.x / size.x).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let ny = if size.y > 0.0 {
        (local.y / size.y).clamp(0.0, 1.0)
    } else {
        0.5
    };

    TiltAngles {
        rot_x: ((0.5 - ny) * TILT_RANGE_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
        rot_y: ((nx - 0.5) * TILT_RANGE_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
    }
}

/// Outstanding-frame tracker for one element.
///
/// The controller schedules at most one style write per element per frame:
/// before scheduling it calls [`FramePacer::take`] and cancels whatever
/// comes back, then [`FramePacer::store`]s the fresh handle. The frame
/// callback calls [`FramePacer::complete`] once it has run.
#[derive(Debug, Default)]
pub struct FramePacer {
    pending: Option<i32>,
}

impl FramePacer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Surrender the outstanding handle, if any, for cancellation
    pub fn take(&mut self) -> Option<i32> {
        self.pending.take()
    }

    /// Record a freshly scheduled frame handle
    pub fn store(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// The scheduled frame ran; nothing is outstanding any more
    pub fn complete(&mut self) {
        self.pending = None;
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hover_point_maps_linearly() {
        // 200x100 card hovered at (150, 25): normalized (0.75, 0.25)
        let angles = tilt_angles(Vec2::new(200.0, 100.0), Vec2::new(150.0, 25.0));
        assert!((angles.rot_x - 1.5).abs() < 0.001);
        assert!((angles.rot_y - 1.5).abs() < 0.001);
    }

    #[test]
    fn corners_hit_the_bounds() {
        let size = Vec2::new(300.0, 150.0);

        let top_right = tilt_angles(size, Vec2::new(300.0, 0.0));
        assert_eq!(top_right.rot_x, TILT_MAX_DEG);
        assert_eq!(top_right.rot_y, TILT_MAX_DEG);

        let bottom_left = tilt_angles(size, Vec2::new(0.0, 150.0));
        assert_eq!(bottom_left.rot_x, -TILT_MAX_DEG);
        assert_eq!(bottom_left.rot_y, -TILT_MAX_DEG);
    }

    #[test]
    fn outside_points_clamp_to_the_edge() {
        let size = Vec2::new(100.0, 100.0);
        let angles = tilt_angles(size, Vec2::new(-50.0, 400.0));
        assert_eq!(angles.rot_x, -TILT_MAX_DEG);
        assert_eq!(angles.rot_y, -TILT_MAX_DEG);
    }

    #[test]
    fn degenerate_box_is_neutral() {
        assert_eq!(tilt_angles(Vec2::ZERO, Vec2::new(10.0, 10.0)), TiltAngles::NEUTRAL);
    }

    #[test]
    fn pacer_tracks_one_handle() {
        let mut pacer = FramePacer::new();
        assert!(pacer.is_idle());
        assert_eq!(pacer.take(), None);

        pacer.store(1);
        assert!(!pacer.is_idle());

        // Rescheduling surrenders the old handle exactly once
        assert_eq!(pacer.take(), Some(1));
        assert_eq!(pacer.take(), None);

        pacer.store(2);
        pacer.complete();
        assert!(pacer.is_idle());
        assert_eq!(pacer.take(), None);
    }

    proptest! {
        #[test]
        fn angles_stay_bounded(
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
            x in -500.0f32..2500.0,
            y in -500.0f32..2500.0,
        ) {
            let angles = tilt_angles(Vec2::new(w, h), Vec2::new(x, y));
            prop_assert!((-TILT_MAX_DEG..=TILT_MAX_DEG).contains(&angles.rot_x));
            prop_assert!((-TILT_MAX_DEG..=TILT_MAX_DEG).contains(&angles.rot_y));
        }

        #[test]
        fn center_is_neutral(w in 1.0f32..2000.0, h in 1.0f32..2000.0) {
            let angles = tilt_angles(Vec2::new(w, h), Vec2::new(w / 2.0, h / 2.0));
            prop_assert_eq!(angles, TiltAngles::NEUTRAL);
        }
    }
}
