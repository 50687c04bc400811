//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One tick per frame, fixed per-tick steps
//! - Input read as a snapshot at the start of each tick
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collect;
pub mod pose;
pub mod state;
pub mod steer;
pub mod tick;

pub use bounds::{Edge, edge_crossed, reflect};
pub use collect::absorb_gems;
pub use pose::Pose;
pub use state::{GameState, Target};
pub use steer::{Turn, steer_toward, turn_direction};
pub use tick::{TickInput, tick};
