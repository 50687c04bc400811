//! Gem Chase - a pointer-steered arena chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, bouncing, gem collection)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: User preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Angular steering step per tick (radians)
    pub const TURN_STEP: f32 = 0.001;
    /// Linear thrust step per tick (arena units)
    pub const THRUST_STEP: f32 = 0.001;
    /// Distance below which a gem is absorbed
    pub const ABSORB_RADIUS: f32 = 0.1;
    /// Per-axis craft growth applied on each absorption
    pub const GROWTH_FACTOR: f32 = 1.05;
    /// Arena half extent; positions live in [-1, 1] on both axes
    pub const ARENA_HALF_EXTENT: f32 = 1.0;

    /// Craft base half extents (folded into its transform at spawn)
    pub const CRAFT_HALF_WIDTH: f32 = 0.09;
    pub const CRAFT_HALF_HEIGHT: f32 = 0.06;
    /// Gem base half extent
    pub const GEM_HALF_SIZE: f32 = 0.07;

    /// Fixed gem positions, set once at startup
    pub const GEM_POSITIONS: [[f32; 2]; 4] =
        [[0.7, 0.7], [-0.3, 0.8], [-0.7, -0.2], [0.2, -0.8]];
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Reduce a heading (radians, unbounded) to degrees in [0, 360).
///
/// Used only at branch decision points; stored headings are never
/// normalized.
#[inline]
pub fn standardize_deg(heading: f32) -> f32 {
    let deg = heading.to_degrees() % 360.0;
    if deg < 0.0 { deg + 360.0 } else { deg }
}
