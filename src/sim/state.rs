//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here: brick flags, ball
//! and paddle positions, the missed-ball count and pending events.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::{ball_missed, contain, paddle_collision, paddle_response, wall_bounce};
use super::grid::BrickGrid;
use crate::settings::{BrickResponse, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball rests above the paddle, waiting for launch
    Serve,
    /// Ball in flight
    Playing,
    /// Out of balls
    GameOver,
    /// Every brick destroyed
    Cleared,
}

/// Something the renderer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Reset,
    Launched { velocity: Vec2 },
    WallBounce { flip_x: bool, flip_y: bool },
    BrickDestroyed { row: usize, column: usize },
    PaddleHit { offset: f32 },
    BallMissed { missed_balls: u32 },
    GameOver,
    Cleared,
}

/// The ball. Velocity is absent until launched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Option<Vec2>,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, vel: None }
    }

    #[inline]
    pub fn in_flight(&self) -> bool {
        self.vel.is_some()
    }
}

/// The player's paddle, one tile wide
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal center
    pub x: f32,
}

impl Paddle {
    /// Move the center to `x`, optionally clamped within the side walls
    pub fn move_to(&mut self, x: f32, arena: &Arena, clamp: bool) {
        if !x.is_finite() {
            return;
        }
        self.x = if clamp && arena.min_x() <= arena.max_x() {
            x.clamp(arena.min_x(), arena.max_x())
        } else {
            x
        };
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out a generator on a fresh stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Autoplay launch RNG
    pub rng_state: RngState,
    pub grid: BrickGrid,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Balls lost past the paddle since the last reset
    pub missed_balls: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events, drained by the renderer
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(arena: Arena, settings: Settings, seed: u64) -> Self {
        let paddle = Paddle { x: arena.center_x() };
        Self {
            arena,
            settings,
            seed,
            rng_state: RngState::new(seed),
            grid: BrickGrid::new(arena.rows, arena.columns),
            ball: Ball::new(arena.serve_position(paddle.x)),
            paddle,
            missed_balls: 0,
            phase: GamePhase::Serve,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Misses allowed before game over
    #[inline]
    pub fn max_missed_balls(&self) -> u32 {
        self.settings.max_missed_balls
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Restore every brick, recenter paddle and ball, clear the miss count
    pub fn reset(&mut self) {
        self.missed_balls = 0;
        self.grid.reset();
        self.paddle.x = self.arena.center_x();
        self.serve();
        self.events.push(GameEvent::Reset);
        log::info!("Game reset");
    }

    /// Put the ball back above the paddle with no velocity
    fn serve(&mut self) {
        self.ball = Ball::new(self.arena.serve_position(self.paddle.x));
        self.phase = GamePhase::Serve;
    }

    /// Move the paddle center. A served ball follows it.
    pub fn move_paddle(&mut self, x: f32) {
        self.paddle.move_to(x, &self.arena, self.settings.clamp_paddle);
        if self.phase == GamePhase::Serve {
            self.ball.pos = self.arena.serve_position(self.paddle.x);
        }
        if self.settings.step_on_paddle_move {
            self.step();
        }
    }

    /// Give the ball its velocity. Only the first launch after a serve takes
    /// effect; returns whether this one did.
    pub fn launch(&mut self, velocity: Vec2) -> bool {
        if self.ball.in_flight() || self.phase != GamePhase::Serve {
            return false;
        }
        if !velocity.is_finite() || velocity == Vec2::ZERO {
            log::warn!("Ignoring launch with velocity {velocity}");
            return false;
        }

        self.ball.vel = Some(velocity);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Launched { velocity });
        log::debug!("Ball launched with velocity {velocity}");
        true
    }

    /// Advance the ball one tick and resolve collisions
    pub fn step(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(vel) = self.ball.vel else {
            return;
        };

        let pos = self.ball.pos;
        let next = pos + vel;

        let bounce = wall_bounce(next, &self.arena);
        let mut new_vel = bounce.apply(vel);
        if bounce.any() {
            self.events.push(GameEvent::WallBounce {
                flip_x: bounce.flip_x,
                flip_y: bounce.flip_y,
            });
        }

        if let Some((row, column)) = self.arena.cell_at(next) {
            if self.grid.destroy(row, column) {
                log::debug!("Brick ({row}, {column}) destroyed");
                self.events.push(GameEvent::BrickDestroyed { row, column });
                // A ceiling bounce already turned the ball around
                if self.settings.brick_response == BrickResponse::Reflect && !bounce.flip_y {
                    new_vel.y = -new_vel.y;
                }
            }
        }

        if let Some(hit) = paddle_collision(pos, next, self.paddle.x, &self.arena) {
            new_vel = paddle_response(new_vel, &hit);
            self.events.push(GameEvent::PaddleHit { offset: hit.offset });
        } else if ball_missed(next, &self.arena) {
            self.miss();
            return;
        }

        self.ball.pos = contain(next, &self.arena);
        self.ball.vel = Some(new_vel);

        if self.grid.all_destroyed() {
            self.phase = GamePhase::Cleared;
            self.events.push(GameEvent::Cleared);
            log::info!("All bricks destroyed");
        }
    }

    fn miss(&mut self) {
        self.missed_balls += 1;
        self.events.push(GameEvent::BallMissed {
            missed_balls: self.missed_balls,
        });
        log::info!(
            "Ball missed ({}/{})",
            self.missed_balls,
            self.max_missed_balls()
        );

        self.serve();
        if self.missed_balls >= self.max_missed_balls() {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            log::info!("Game over");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arena::default(), Settings::default(), 0)
    }
}
