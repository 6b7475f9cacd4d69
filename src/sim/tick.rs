//! Fixed timestep simulation tick
//!
//! Input is applied first, then the ball advances exactly one step. The
//! scheduler calling `tick` owns the timing; input delivery never advances
//! the ball on its own.

use glam::Vec2;
use rand::Rng;

use super::state::{GamePhase, GameState};
use crate::consts::AUTO_LAUNCH_SPEED;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle drag position
    pub paddle_x: Option<f32>,
    /// Launch vector (one-shot, ignored while in flight)
    pub launch: Option<Vec2>,
    /// Start over
    pub reset: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
    }

    let mut input = input.clone();
    if input.idle_mode {
        // Track the ball, leading it by one tick
        let target = state.ball.pos + state.ball.vel.unwrap_or(Vec2::ZERO);
        input.paddle_x = Some(target.x);

        if state.phase == GamePhase::Serve && input.launch.is_none() {
            input.launch = Some(auto_launch_velocity(state));
        }
    }

    if let Some(x) = input.paddle_x {
        state.move_paddle(x);
    }
    if let Some(velocity) = input.launch {
        state.launch(velocity);
    }

    match state.phase {
        GamePhase::GameOver | GamePhase::Cleared => return,
        GamePhase::Serve | GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    state.step();
}

/// Seeded upward launch, within 30 degrees of vertical
pub fn auto_launch_velocity(state: &mut GameState) -> Vec2 {
    let mut rng = state.rng_state.next_rng();
    let angle: f32 = rng.random_range(-30.0_f32..=30.0).to_radians();
    Vec2::new(angle.sin(), -angle.cos()) * AUTO_LAUNCH_SPEED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::arena::Arena;
    use crate::sim::state::GameEvent;
    use proptest::prelude::*;

    #[test]
    fn test_tick_serve_to_playing() {
        let mut state = GameState::default();
        assert_eq!(state.phase, GamePhase::Serve);

        // Tick without launch - should stay in Serve
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Serve);
        assert_eq!(state.time_ticks, 1);

        // Launch
        let input = TickInput {
            launch: Some(Vec2::new(1.0, -4.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        // Launched and advanced in the same tick
        assert_eq!(state.ball.pos, Vec2::new(196.0, 810.0));
    }

    #[test]
    fn test_tick_moves_paddle_then_serves_from_it() {
        let mut state = GameState::default();
        let input = TickInput {
            paddle_x: Some(100.0),
            launch: Some(Vec2::new(0.0, -2.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.x, 100.0);
        assert_eq!(state.ball.pos, Vec2::new(100.0, 812.0));
    }

    #[test]
    fn test_tick_reset() {
        let mut state = GameState::default();
        state.grid.destroy(1, 1);
        state.missed_balls = 2;
        tick(
            &mut state,
            &TickInput {
                reset: true,
                ..Default::default()
            },
        );
        assert_eq!(state.grid.remaining(), 60);
        assert_eq!(state.missed_balls, 0);
    }

    #[test]
    fn test_idle_mode_launches_upward() {
        let mut state = GameState::default();
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        let vel = state.ball.vel.unwrap();
        assert!(vel.y < 0.0);
        assert!((vel.length() - AUTO_LAUNCH_SPEED).abs() < 0.001);
    }

    #[test]
    fn test_end_to_end_single_brick() {
        // Up-left from center: (195, 814) - k * (1, 6); first enters the
        // grid at k = 70, cell (9, 3), and stays in it through k = 75
        let mut state = GameState::new(Arena::default(), Settings::default(), 1);
        tick(
            &mut state,
            &TickInput {
                launch: Some(Vec2::new(-1.0, -6.0)),
                ..Default::default()
            },
        );
        for _ in 1..72 {
            tick(&mut state, &TickInput::default());
        }

        assert!(state.grid.is_destroyed(9, 3));
        let destroyed: Vec<_> = state
            .grid
            .iter()
            .filter(|(_, _, b)| b.destroyed)
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(destroyed, vec![(9, 3)]);
        assert_eq!(state.ball.pos, Vec2::new(123.0, 382.0));
    }

    #[test]
    fn test_idle_mode_keeps_ball_alive() {
        let mut state = GameState::new(Arena::default(), Settings::default(), 42);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..5_000 {
            tick(&mut state, &input);
        }
        assert_eq!(state.missed_balls, 0);
        assert!(state.grid.remaining() < 60);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(Arena::default(), Settings::default(), 99999);
        let mut state2 = GameState::new(Arena::default(), Settings::default(), 99999);

        let inputs = [
            TickInput {
                paddle_x: Some(150.0),
                ..Default::default()
            },
            TickInput {
                idle_mode: true,
                ..Default::default()
            },
            TickInput {
                paddle_x: Some(220.0),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(400) {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.grid, state2.grid);
        assert_eq!(state1.drain_events(), state2.drain_events());
    }

    #[test]
    fn test_game_over_stops_ticking() {
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 0);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::Launched { .. }))
        );
    }

    proptest! {
        #[test]
        fn prop_reset_clears_any_state(
            hits in proptest::collection::vec((0usize..10, 0usize..6), 0..40),
            missed in 0u32..3,
        ) {
            let mut state = GameState::default();
            for (row, column) in hits {
                state.grid.destroy(row, column);
            }
            state.missed_balls = missed;
            state.reset();
            prop_assert_eq!(state.missed_balls, 0);
            prop_assert!(state.grid.iter().all(|(_, _, b)| !b.destroyed));
            prop_assert_eq!(state.ball.vel, None);
        }

        #[test]
        fn prop_relaunch_ignored_in_flight(
            dx in -10.0f32..10.0, dy in -10.0f32..-0.1,
            dx2 in -10.0f32..10.0, dy2 in -10.0f32..10.0,
        ) {
            let mut state = GameState::default();
            prop_assert!(state.launch(Vec2::new(dx, dy)));
            prop_assert!(!state.launch(Vec2::new(dx2, dy2)));
            prop_assert_eq!(state.ball.vel, Some(Vec2::new(dx, dy)));
        }

        #[test]
        fn prop_off_grid_never_touches_bricks(
            x in 260.0f32..360.0, y in 30.0f32..800.0,
            dx in -5.0f32..5.0, dy in -5.0f32..5.0,
        ) {
            prop_assume!(dx != 0.0 || dy != 0.0);
            let mut state = GameState::default();
            state.launch(Vec2::new(dx, dy));
            state.ball.pos = Vec2::new(x, y);
            state.step();
            prop_assert_eq!(state.grid.remaining(), 60);
        }

        #[test]
        fn prop_ball_stays_inside_walls(
            seed in any::<u64>(),
            paddle_x in 0.0f32..390.0,
        ) {
            let mut state = GameState::new(Arena::default(), Settings::default(), seed);
            let launch = TickInput { paddle_x: Some(paddle_x), idle_mode: true, ..Default::default() };
            tick(&mut state, &launch);
            for _ in 0..300 {
                tick(&mut state, &TickInput::default());
                let pos = state.ball.pos;
                prop_assert!(pos.x >= state.arena.min_x() && pos.x <= state.arena.max_x());
                prop_assert!(pos.y >= state.arena.min_y());
            }
        }
    }
}
