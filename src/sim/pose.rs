//! Accumulated entity pose
//!
//! Each movable entity owns a single 4x4 affine transform that is composed
//! incrementally, never rebuilt from scratch. New operations post-multiply,
//! so the most recent one reaches the position first. The homogeneous
//! position is only ever recomputed by running the accumulated transform
//! over its previous value.

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Pose of a movable entity: transform, position, heading, scale.
///
/// `heading` accumulates additively across ticks and is not range-bound;
/// reduce it with [`crate::standardize_deg`] at decision points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pose {
    /// Accumulated affine transform, the source of truth for render pose
    pub transform: Mat4,
    /// Homogeneous position, updated only via [`Pose::step`]
    pub position: Vec4,
    /// Signed rotation angle in radians
    pub heading: f32,
    /// Cumulative scale record (base size times all growth applied)
    pub scale: Vec3,
}

impl Pose {
    /// Pose at the arena origin with the base size folded in.
    pub fn new(heading: f32, base_scale: Vec3) -> Self {
        Self {
            transform: Mat4::from_scale(base_scale),
            position: Vec4::new(0.0, 0.0, 1.0, 1.0),
            heading,
            scale: base_scale,
        }
    }

    /// Compose a rotation about +Z and advance the heading by the same delta.
    pub fn rotate(&mut self, delta: f32) {
        self.transform *= Mat4::from_rotation_z(delta);
        self.heading += delta;
    }

    /// Compose a translation. Does not move `position`; call [`Pose::step`].
    pub fn translate(&mut self, offset: Vec3) {
        self.transform *= Mat4::from_translation(offset);
    }

    /// Compose a scale and fold it into the cumulative scale record.
    pub fn grow(&mut self, factor: Vec3) {
        self.transform *= Mat4::from_scale(factor);
        self.scale *= factor;
    }

    /// Recompute the position by applying the accumulated transform to the
    /// previous position. Must run exactly once per tick of movement, after
    /// the translation is composed and before boundary checks.
    pub fn step(&mut self) {
        self.position = self.transform * self.position;
    }

    /// Current world position on the arena plane.
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_new_folds_base_scale() {
        let pose = Pose::new(FRAC_PI_2, Vec3::new(0.09, 0.06, 1.0));
        assert_eq!(pose.transform, Mat4::from_scale(Vec3::new(0.09, 0.06, 1.0)));
        assert_eq!(pose.position, Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(pose.heading, FRAC_PI_2);
    }

    #[test]
    fn test_operations_post_multiply() {
        let mut pose = Pose::new(0.0, Vec3::ONE);
        pose.translate(Vec3::new(0.5, 0.0, 0.0));
        pose.rotate(FRAC_PI_2);

        let expected = Mat4::from_translation(Vec3::new(0.5, 0.0, 0.0))
            * Mat4::from_rotation_z(FRAC_PI_2);
        assert!(pose.transform.abs_diff_eq(expected, 1e-6));
        assert!((pose.heading - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_step_applies_transform_to_previous_position() {
        let mut pose = Pose::new(0.0, Vec3::ONE);
        pose.translate(Vec3::new(0.0, 0.25, 0.0));
        pose.step();
        assert!((pose.xy() - Vec2::new(0.0, 0.25)).length() < 1e-6);

        // The accumulated translation reapplies to the already-moved point.
        pose.step();
        assert!((pose.xy() - Vec2::new(0.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_grow_updates_scale_record() {
        let mut pose = Pose::new(0.0, Vec3::new(0.09, 0.06, 1.0));
        pose.grow(Vec3::new(1.05, 1.05, 1.0));
        assert!((pose.scale.x - 0.0945).abs() < 1e-6);
        assert!((pose.scale.y - 0.063).abs() < 1e-6);
        assert!((pose.scale.z - 1.0).abs() < 1e-6);
    }
}
