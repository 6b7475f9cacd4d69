//! Collision detection and response
//!
//! Pure queries over the arena geometry. The ball is treated as a point; the
//! walls sit half a tile in from the screen edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::PADDLE_ENGLISH;

/// Which velocity components a wall contact flips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallBounce {
    /// Left or right wall
    pub flip_x: bool,
    /// Ceiling
    pub flip_y: bool,
}

impl WallBounce {
    #[inline]
    pub fn any(&self) -> bool {
        self.flip_x || self.flip_y
    }

    /// Apply to a velocity. Both axes flip independently on a corner hit.
    pub fn apply(&self, velocity: Vec2) -> Vec2 {
        Vec2::new(
            if self.flip_x { -velocity.x } else { velocity.x },
            if self.flip_y { -velocity.y } else { velocity.y },
        )
    }
}

/// Check a tentative position against the side walls and ceiling
pub fn wall_bounce(next: Vec2, arena: &Arena) -> WallBounce {
    WallBounce {
        flip_x: next.x < arena.min_x() || next.x > arena.max_x(),
        flip_y: next.y < arena.min_y(),
    }
}

/// Mirror a tentative position back inside the walls it crossed
pub fn contain(next: Vec2, arena: &Arena) -> Vec2 {
    let (min_x, max_x, min_y) = (arena.min_x(), arena.max_x(), arena.min_y());

    let mut x = next.x;
    if x < min_x {
        x = 2.0 * min_x - x;
    } else if x > max_x {
        x = 2.0 * max_x - x;
    }
    // Velocity wider than the play area would overshoot the mirror
    if min_x <= max_x {
        x = x.clamp(min_x, max_x);
    }

    let mut y = next.y;
    if y < min_y {
        y = 2.0 * min_y - y;
    }

    Vec2::new(x, y)
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// A descending ball crossing the paddle's top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// Contact point on the top edge
    pub point: Vec2,
    /// Hit offset from paddle center, -1 (left edge) to 1 (right edge)
    pub offset: f32,
}

/// Check whether the segment `pos -> next` crosses the paddle's top edge
pub fn paddle_collision(pos: Vec2, next: Vec2, paddle_x: f32, arena: &Arena) -> Option<PaddleHit> {
    let top = arena.paddle_top();
    if next.y <= pos.y || pos.y > top || next.y < top {
        return None;
    }

    let t = (top - pos.y) / (next.y - pos.y);
    let x = pos.x + (next.x - pos.x) * t;
    let half_width = arena.tile_size / 2.0;
    let offset = (x - paddle_x) / half_width;
    if !(-1.0..=1.0).contains(&offset) {
        return None;
    }

    Some(PaddleHit {
        point: Vec2::new(x, top),
        offset,
    })
}

/// Bounce a ball off the paddle, adding english from the hit offset
pub fn paddle_response(velocity: Vec2, hit: &PaddleHit) -> Vec2 {
    let reflected = reflect_velocity(velocity, Vec2::NEG_Y);
    let max_english = reflected.y.abs() * PADDLE_ENGLISH;
    let english = hit.offset.clamp(-1.0, 1.0) * max_english;
    Vec2::new(reflected.x + english, reflected.y)
}

/// Check if the ball fell past the bottom of the screen
#[inline]
pub fn ball_missed(next: Vec2, arena: &Arena) -> bool {
    next.y > arena.screen_height
}
