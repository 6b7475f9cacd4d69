//! Simulation settings
//!
//! Rule switches for paddle clamping, brick response and the miss limit.
//! Loaded from a JSON file when one is present, defaults otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_MISSED_BALLS;

/// What the ball does when it destroys a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrickResponse {
    /// Brick is flagged, ball keeps its course
    #[default]
    Pass,
    /// Brick is flagged and the ball's vertical velocity flips
    Reflect,
}

impl BrickResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrickResponse::Pass => "pass",
            BrickResponse::Reflect => "reflect",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pass" | "pierce" => Some(BrickResponse::Pass),
            "reflect" | "bounce" => Some(BrickResponse::Reflect),
            _ => None,
        }
    }
}

/// Game rule settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keep the paddle center within the side walls
    pub clamp_paddle: bool,
    /// Run a simulation step on every paddle move, in addition to the tick
    pub step_on_paddle_move: bool,
    /// Ball response to a brick hit
    pub brick_response: BrickResponse,
    /// Misses allowed before game over
    pub max_missed_balls: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clamp_paddle: true,
            step_on_paddle_move: false,
            brick_response: BrickResponse::Pass,
            max_missed_balls: MAX_MISSED_BALLS,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const PATH_ENV: &'static str = "TILE_BREAKER_SETTINGS";
    /// Settings file looked up in the working directory
    pub const DEFAULT_PATH: &'static str = "tile_breaker_settings.json";

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::debug!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from `$TILE_BREAKER_SETTINGS` or the default path
    pub fn load() -> Self {
        let path = std::env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());
        Self::load_from(Path::new(&path))
    }
}
