//! Game state and core simulation types

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use super::pose::Pose;
use crate::consts::*;

/// A stationary collectible gem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Fixed world position, never moves
    pub world_pos: Vec3,
    /// Static render transform (translate then scale), built once
    pub transform: Mat4,
    /// Irreversibly set on the first tick the craft comes within range
    pub absorbed: bool,
}

impl Target {
    pub fn new(id: u32, world_pos: Vec3) -> Self {
        let transform = Mat4::from_translation(world_pos)
            * Mat4::from_scale(Vec3::new(GEM_HALF_SIZE, GEM_HALF_SIZE, 1.0));
        Self {
            id,
            world_pos,
            transform,
            absorbed: false,
        }
    }
}

/// Complete game state, mutated in place by the tick loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The player craft
    pub craft: Pose,
    /// The four gems (stable id order)
    pub targets: Vec<Target>,
    /// Count of absorbed gems, incremented by 1 per absorption
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Craft at the arena center pointing up, gems at their fixed spots.
    pub fn new() -> Self {
        let craft = Pose::new(
            FRAC_PI_2,
            Vec3::new(CRAFT_HALF_WIDTH, CRAFT_HALF_HEIGHT, 1.0),
        );
        let targets = GEM_POSITIONS
            .iter()
            .enumerate()
            .map(|(i, &[x, y])| Target::new(i as u32, Vec3::new(x, y, 0.0)))
            .collect();
        Self {
            craft,
            targets,
            score: 0,
            time_ticks: 0,
        }
    }

    /// All gems absorbed. The simulation keeps ticking after this; only the
    /// overlay changes.
    pub fn won(&self) -> bool {
        self.score as usize == self.targets.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
