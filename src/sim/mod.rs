//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `step` per tick, driven by the caller
//! - Seeded RNG only
//! - Row-major brick iteration
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{PaddleHit, WallBounce, ball_missed, contain, paddle_collision, wall_bounce};
pub use grid::{Brick, BrickGrid};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, RngState};
pub use tick::{TickInput, auto_launch_velocity, tick};
