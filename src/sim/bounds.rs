//! Arena boundary bouncing
//!
//! When a thrust tick carries the craft past an edge of the arena, its
//! heading is reflected. This is a heading-space reflection paired with the
//! craft's single thrust axis, not a velocity-vector bounce, and the edge
//! tests lean on the heading's quadrant: a craft can only cross the top
//! while its standardized heading points up, and so on. The margin of one
//! thrust step keeps the craft from escaping before the reflection lands.

use glam::Vec2;
use std::f32::consts::PI;

use super::pose::Pose;
use crate::consts::{ARENA_HALF_EXTENT, THRUST_STEP};
use crate::standardize_deg;

/// Arena edge the craft is bouncing off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Right,
    Left,
}

/// Edge crossed by the given position/heading pair, if any.
///
/// Evaluated as a chain, so at most one edge fires per tick even in a
/// corner. The heading ranges make the top/bottom and right/left pairs
/// mutually exclusive on their own.
pub fn edge_crossed(position: Vec2, heading: f32) -> Option<Edge> {
    let margin = ARENA_HALF_EXTENT - THRUST_STEP;
    let std_deg = standardize_deg(heading);

    if position.y >= margin && std_deg < 180.0 {
        Some(Edge::Top)
    } else if position.y <= -margin && std_deg > 180.0 {
        Some(Edge::Bottom)
    } else if position.x >= margin && (std_deg > 270.0 || std_deg < 90.0) {
        Some(Edge::Right)
    } else if position.x <= -margin && (std_deg > 90.0 && std_deg < 270.0) {
        Some(Edge::Left)
    } else {
        None
    }
}

/// Reflect the craft's heading off an edge.
///
/// Each branch composes one rotation; [`Pose::rotate`] keeps the stored
/// heading in lockstep, so top/bottom leave `-h`, right leaves `2h`, and
/// left leaves `π - h`.
pub fn reflect(craft: &mut Pose, edge: Edge) {
    let h = craft.heading;
    match edge {
        Edge::Top | Edge::Bottom => craft.rotate(-2.0 * h),
        Edge::Right => craft.rotate(h),
        Edge::Left => craft.rotate(PI - 2.0 * h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_edge_detection_by_heading_quadrant() {
        // Same top-edge position, opposite headings.
        let top = Vec2::new(0.0, 0.9995);
        assert_eq!(edge_crossed(top, FRAC_PI_4), Some(Edge::Top));
        assert_eq!(edge_crossed(top, -FRAC_PI_4), None);

        let bottom = Vec2::new(0.0, -0.9995);
        assert_eq!(edge_crossed(bottom, -FRAC_PI_4), Some(Edge::Bottom));

        let right = Vec2::new(0.9995, 0.0);
        assert_eq!(edge_crossed(right, FRAC_PI_4), Some(Edge::Right));

        let left = Vec2::new(-0.9995, 0.0);
        assert_eq!(edge_crossed(left, PI - FRAC_PI_4), Some(Edge::Left));

        assert_eq!(edge_crossed(Vec2::ZERO, FRAC_PI_4), None);
    }

    #[test]
    fn test_top_reflection_flips_heading_sign() {
        let mut craft = Pose::new(FRAC_PI_4, Vec3::ONE);
        let before = craft.transform;

        reflect(&mut craft, Edge::Top);

        assert!((craft.heading + FRAC_PI_4).abs() < 1e-6);
        let expected = before * glam::Mat4::from_rotation_z(-2.0 * FRAC_PI_4);
        assert!(craft.transform.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_right_reflection_doubles_heading() {
        let mut craft = Pose::new(FRAC_PI_4, Vec3::ONE);
        reflect(&mut craft, Edge::Right);
        assert!((craft.heading - 2.0 * FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_left_reflection_mirrors_about_vertical() {
        let mut craft = Pose::new(PI - FRAC_PI_4, Vec3::ONE);
        reflect(&mut craft, Edge::Left);
        assert!((craft.heading - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_heading_accumulates_across_bounces() {
        // Repeated bounces keep adding to the stored heading; nothing ever
        // folds it back into a fixed range.
        let mut craft = Pose::new(FRAC_PI_4, Vec3::ONE);
        reflect(&mut craft, Edge::Right); // heading = π/2
        reflect(&mut craft, Edge::Right); // heading = π
        reflect(&mut craft, Edge::Right); // heading = 2π
        assert!((craft.heading - 2.0 * PI).abs() < 1e-5);
        assert!(standardize_deg(craft.heading) < 1e-3);
    }

    proptest! {
        /// Away from the literal corner overlap, the four raw edge
        /// conditions are mutually exclusive.
        #[test]
        fn prop_edges_exclusive_off_corners(
            x in -1.2f32..1.2,
            y in -1.2f32..1.2,
            heading in -20.0f32..20.0,
        ) {
            let margin = ARENA_HALF_EXTENT - THRUST_STEP;
            prop_assume!(!(x.abs() >= margin && y.abs() >= margin));

            let std_deg = standardize_deg(heading);
            let hits = [
                y >= margin && std_deg < 180.0,
                y <= -margin && std_deg > 180.0,
                x >= margin && (std_deg > 270.0 || std_deg < 90.0),
                x <= -margin && (std_deg > 90.0 && std_deg < 270.0),
            ];
            prop_assert!(hits.iter().filter(|&&hit| hit).count() <= 1);
        }

        /// Standardized headings always land in [0, 360).
        #[test]
        fn prop_standardized_heading_in_range(heading in -1e4f32..1e4) {
            let std_deg = standardize_deg(heading);
            prop_assert!((0.0..360.0).contains(&std_deg));
        }
    }
}
