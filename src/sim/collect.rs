//! Gem absorption and scoring
//!
//! Runs every tick regardless of input. Absorption is irreversible and each
//! gem scores exactly once, on the tick its distance first drops under the
//! absorption radius.

use glam::{Vec2, Vec3};

use super::state::GameState;
use crate::consts::{ABSORB_RADIUS, GROWTH_FACTOR};

/// Absorb any gems within range of the craft.
///
/// Each absorption bumps the score by one and folds a growth scale into the
/// craft's shared transform; the craft stays a point for distance purposes,
/// so growth never widens its reach.
pub fn absorb_gems(state: &mut GameState) {
    let craft_pos = state.craft.xy();
    for target in &mut state.targets {
        if target.absorbed {
            continue;
        }
        let gem_pos = Vec2::new(target.world_pos.x, target.world_pos.y);
        if craft_pos.distance(gem_pos) < ABSORB_RADIUS {
            target.absorbed = true;
            state.score += 1;
            state
                .craft
                .grow(Vec3::new(GROWTH_FACTOR, GROWTH_FACTOR, 1.0));
        }
    }
}
