//! Tile Breaker - a minimal breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, brick grid, collisions)
//! - `settings`: Behavior switches loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{BrickResponse, Settings};
pub use sim::{Arena, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default screen size (points)
    pub const SCREEN_WIDTH: f32 = 390.0;
    pub const SCREEN_HEIGHT: f32 = 844.0;

    /// Brick edge length; the paddle is one tile wide
    pub const TILE_SIZE: f32 = 40.0;
    /// Paddle height
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Brick grid dimensions
    pub const GRID_ROWS: usize = 10;
    pub const GRID_COLUMNS: usize = 6;

    /// Ball diameter (rendering only, collisions treat the ball as a point)
    pub const BALL_SIZE: f32 = 10.0;
    /// Gap between the served ball and the top of the paddle
    pub const SERVE_GAP: f32 = 10.0;
    /// Speed of the autoplay launch (points per tick)
    pub const AUTO_LAUNCH_SPEED: f32 = 5.0;

    /// Misses allowed before game over
    pub const MAX_MISSED_BALLS: u32 = 3;

    /// Fraction of |dy| a paddle edge hit can add to dx
    pub const PADDLE_ENGLISH: f32 = 0.5;
}
