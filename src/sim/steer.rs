//! Pointer steering
//!
//! While the steering button is held, the craft turns a fixed step per tick
//! along the shorter arc toward the pointer. The decision is a function of
//! the cursor/heading delta wrapped into [0, 2π) and nothing else.

use glam::Vec2;

use super::pose::Pose;
use crate::consts::TURN_STEP;
use crate::wrap_angle;

/// Squared pointer offset below which the steering direction is undefined
/// and the tick applies no rotation.
const DIRECTION_EPSILON: f32 = 1e-12;

/// Which way the craft turns this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    CounterClockwise,
    Clockwise,
}

/// Decide the turn direction from the wrapped cursor/heading delta.
///
/// A delta strictly inside (0, π) turns counterclockwise; everything else,
/// including exactly 0 and exactly π, turns clockwise.
pub fn turn_direction(cursor_angle: f32, heading: f32) -> Turn {
    let delta = wrap_angle(cursor_angle - heading);
    if delta > 0.0 && delta < std::f32::consts::PI {
        Turn::CounterClockwise
    } else {
        Turn::Clockwise
    }
}

/// Rotate the craft one step toward the pointer.
///
/// No-op when the pointer coincides with the craft position, where atan2
/// has no meaningful direction.
pub fn steer_toward(craft: &mut Pose, pointer: Vec2) {
    let offset = pointer - craft.xy();
    if offset.length_squared() < DIRECTION_EPSILON {
        return;
    }
    let cursor_angle = offset.y.atan2(offset.x);
    match turn_direction(cursor_angle, craft.heading) {
        Turn::CounterClockwise => craft.rotate(TURN_STEP),
        Turn::Clockwise => craft.rotate(-TURN_STEP),
    }
}
