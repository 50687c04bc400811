//! Per-frame simulation tick
//!
//! One tick per rendered frame, no delta-time scaling: the turn and thrust
//! steps are per-tick constants, so simulation speed follows the host frame
//! rate. The order inside a tick is load-bearing: steering first, then
//! thrust and the position recompute, then boundary bouncing against the
//! fresh position, then gem absorption.

use glam::{Vec2, Vec3};

use super::{bounds, collect, steer};
use super::state::GameState;
use crate::consts::THRUST_STEP;

/// Input snapshot for a single tick.
///
/// Held-state booleans plus the pointer position already mapped into the
/// arena's normalized coordinate space (y-up, origin at the center). The
/// snapshot may change between ticks but never within one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering button (left pointer button) currently held
    pub steer: bool,
    /// Thrust keys currently held; forward wins when both are down
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
}

/// Advance the game by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if input.steer {
        steer::steer_toward(&mut state.craft, input.pointer);
    }

    if input.thrust_forward || input.thrust_backward {
        let step = if input.thrust_forward {
            THRUST_STEP
        } else {
            -THRUST_STEP
        };
        state.craft.translate(Vec3::new(0.0, step, 0.0));
        // Exactly one position recompute per tick, before the edge check.
        state.craft.step();

        if let Some(edge) = bounds::edge_crossed(state.craft.xy(), state.craft.heading) {
            bounds::reflect(&mut state.craft, edge);
        }
    }

    collect::absorb_gems(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TURN_STEP;
    use glam::{Mat4, Vec4};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    /// State with the base-size fold stripped so positions advance by plain
    /// thrust steps, which keeps expected values easy to read.
    fn plain_state() -> GameState {
        let mut state = GameState::new();
        state.craft.transform = Mat4::IDENTITY;
        state.craft.scale = Vec3::ONE;
        state
    }

    #[test]
    fn test_position_unchanged_without_thrust() {
        let mut state = GameState::new();
        let before = state.craft.position;

        let input = TickInput {
            steer: true,
            pointer: Vec2::new(0.5, -0.3),
            ..Default::default()
        };
        for _ in 0..50 {
            tick(&mut state, &input);
        }
        // Steering turned the transform, but the position only moves on
        // thrust ticks.
        assert_eq!(state.craft.position, before);
        assert!(state.craft.heading != FRAC_PI_2);
    }

    #[test]
    fn test_thrust_recomputes_position_from_transform() {
        let mut state = plain_state();
        let input = TickInput {
            thrust_forward: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!((state.craft.xy().y - THRUST_STEP).abs() < 1e-7);

        // The accumulated translation reapplies to the moved point, so the
        // second tick advances by two steps.
        tick(&mut state, &input);
        assert!((state.craft.xy().y - 3.0 * THRUST_STEP).abs() < 1e-7);
    }

    #[test]
    fn test_forward_wins_over_backward() {
        let mut state = plain_state();
        let input = TickInput {
            thrust_forward: true,
            thrust_backward: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!(state.craft.xy().y > 0.0);
    }

    #[test]
    fn test_gem_scores_exactly_once_at_first_crossing() {
        let mut state = plain_state();
        // Park the craft below the (0.7, 0.7) gem, just outside range.
        state.craft.position = Vec4::new(0.7, 0.58, 1.0, 1.0);
        state.craft.heading = FRAC_PI_2;

        let input = TickInput {
            thrust_forward: true,
            ..Default::default()
        };

        // Cumulative steps reach the radius on the sixth tick.
        for expected_score in [0, 0, 0, 0, 0, 1] {
            tick(&mut state, &input);
            assert_eq!(state.score, expected_score);
        }
        assert!(state.targets[0].absorbed);

        // Later ticks while still near the gem change nothing.
        for _ in 0..4 {
            tick(&mut state, &input);
            assert_eq!(state.score, 1);
        }
    }

    #[test]
    fn test_top_edge_bounce_flips_heading() {
        let mut state = plain_state();
        state.craft.position = Vec4::new(0.0, 0.9995, 1.0, 1.0);
        state.craft.heading = FRAC_PI_4;

        let input = TickInput {
            thrust_forward: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert!((state.craft.heading + FRAC_PI_4).abs() < 1e-6);
        let expected = Mat4::from_translation(Vec3::new(0.0, THRUST_STEP, 0.0))
            * Mat4::from_rotation_z(-2.0 * FRAC_PI_4);
        assert!(state.craft.transform.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_steering_tick_turns_one_step() {
        let mut state = plain_state();
        let input = TickInput {
            steer: true,
            // Straight up from the origin: cursor angle 90 deg, matching
            // the heading, so the tie-break turns clockwise.
            pointer: Vec2::new(0.0, 0.5),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!((state.craft.heading - (FRAC_PI_2 - TURN_STEP)).abs() < 1e-7);
    }

    #[test]
    fn test_win_is_terminal_but_loop_keeps_ticking() {
        let mut state = GameState::new();
        let positions: Vec<_> = state.targets.iter().map(|t| t.world_pos).collect();
        for pos in positions {
            state.craft.position = Vec4::new(pos.x, pos.y, 1.0, 1.0);
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 4);
        assert!(state.won());

        let ticks_before = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks_before + 1);
        assert_eq!(state.score, 4);
    }
}
