//! Play area geometry
//!
//! Screen coordinates: origin top-left, y grows downward. The brick grid is
//! anchored at the origin, one tile per cell.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Display geometry supplied at initialization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub screen_width: f32,
    pub screen_height: f32,
    pub tile_size: f32,
    pub platform_height: f32,
    pub rows: usize,
    pub columns: usize,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tile_size: TILE_SIZE,
            platform_height: PLATFORM_HEIGHT,
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
        }
    }
}

impl Arena {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Self::default()
        }
    }

    /// Leftmost x the ball may reach before bouncing
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.tile_size / 2.0
    }

    /// Rightmost x the ball may reach before bouncing
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.screen_width - self.tile_size / 2.0
    }

    /// Ceiling y the ball may reach before bouncing
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.tile_size / 2.0
    }

    /// Paddle center line
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.screen_height - self.platform_height / 2.0
    }

    /// Top edge of the paddle
    #[inline]
    pub fn paddle_top(&self) -> f32 {
        self.screen_height - self.platform_height
    }

    /// Where a served ball rests for a paddle at `paddle_x`
    #[inline]
    pub fn serve_position(&self, paddle_x: f32) -> Vec2 {
        Vec2::new(paddle_x, self.paddle_top() - SERVE_GAP)
    }

    /// Horizontal center of the screen
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.screen_width / 2.0
    }

    /// Grid cell containing `pos`, or `None` when off the grid
    pub fn cell_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        let row = (pos.y / self.tile_size).floor();
        let column = (pos.x / self.tile_size).floor();
        // NaN fails both comparisons and falls through to None
        if row >= 0.0 && column >= 0.0 && row < self.rows as f32 && column < self.columns as f32 {
            Some((row as usize, column as usize))
        } else {
            None
        }
    }

    /// Center of the brick at (row, column)
    pub fn cell_center(&self, row: usize, column: usize) -> Vec2 {
        Vec2::new(
            self.tile_size / 2.0 + column as f32 * self.tile_size,
            self.tile_size / 2.0 + row as f32 * self.tile_size,
        )
    }
}
