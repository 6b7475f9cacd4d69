//! Tile Breaker entry point
//!
//! Runs the simulation headless with the autoplay paddle, the way a frame
//! loop would drive it, and logs what happens.
//!
//! Usage: `tile-breaker [seed] [seconds]`

use tile_breaker::consts::*;
use tile_breaker::sim::{Arena, GameEvent, GamePhase, GameState, TickInput, tick};
use tile_breaker::Settings;

/// Simulated display refresh rate
const FRAME_DT: f32 = 1.0 / 60.0;

/// Game instance holding all state
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(Arena::default(), settings, seed),
            accumulator: 0.0,
            input: TickInput {
                idle_mode: true,
                ..Default::default()
            },
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.launch = None;
            self.input.reset = false;
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::BrickDestroyed { row, column } => {
                    log::info!(
                        "Tick {}: brick ({}, {}) destroyed, {} left",
                        self.state.time_ticks,
                        row,
                        column,
                        self.state.grid.remaining()
                    );
                }
                GameEvent::BallMissed { missed_balls } => {
                    log::warn!("Tick {}: ball missed ({})", self.state.time_ticks, missed_balls);
                }
                other => log::debug!("Tick {}: {:?}", self.state.time_ticks, other),
            }
        }
    }

    fn finished(&self) -> bool {
        matches!(self.state.phase, GamePhase::GameOver | GamePhase::Cleared)
    }

    /// Brick grid as text, `#` standing and `.` destroyed
    fn render_grid(&self) -> String {
        let mut out = String::new();
        for (_, column, brick) in self.state.grid.iter() {
            out.push(if brick.destroyed { '.' } else { '#' });
            if column + 1 == self.state.grid.columns() {
                out.push('\n');
            }
        }
        out
    }
}

fn main() {
    env_logger::init();
    log::info!("Tile Breaker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);

    let settings = Settings::load();
    log::info!("Game initialized with seed: {}, settings: {:?}", seed, settings);

    let mut game = Game::new(settings, seed);
    let frames = (seconds / FRAME_DT) as u32;
    for _ in 0..frames {
        game.update(FRAME_DT);
        if game.finished() {
            break;
        }
    }

    let state = &game.state;
    log::info!(
        "Finished after {} ticks in phase {:?}",
        state.time_ticks,
        state.phase
    );
    println!("{}", game.render_grid());
    println!(
        "phase: {:?}  bricks left: {}  missed balls: {}/{}",
        state.phase,
        state.grid.remaining(),
        state.missed_balls,
        state.max_missed_balls()
    );
}
