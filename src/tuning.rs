//! Data-driven game balance
//!
//! Every knob has a default from [`crate::consts`]; a JSON override may set any
//! subset of fields. Overrides come from LocalStorage on the web and from the
//! `SWEET_RUSH_TUNING` environment variable natively. Nothing is ever written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while reading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick rate must be positive and finite, got {0}")]
    TickRate(f64),
    #[error("world {width}x{height} is too small to hold the level")]
    WorldTooSmall { width: f32, height: f32 },
    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("jump force must point upward (negative), got {0}")]
    JumpForce(f32),
}

/// Simulation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed step rate of the stepper
    pub tick_rate_hz: f64,
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_force: f32,
    /// Horizontal speed while a direction is held
    pub movement_speed: f32,
    /// Autorun speed, also used to scroll obstacles and sweets
    pub auto_move_speed: f32,
    pub background_scroll_speed: f32,
    pub obstacle_interval_ms: f64,
    /// Weighted sweet points needed for victory
    pub victory_threshold: u32,
    pub world_width: f32,
    pub world_height: f32,
    pub starting_lives: u8,
    /// Optional cap on downward velocity. `None` leaves falls unbounded.
    pub terminal_velocity: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            movement_speed: MOVEMENT_SPEED,
            auto_move_speed: AUTO_MOVE_SPEED,
            background_scroll_speed: BACKGROUND_SCROLL_SPEED,
            obstacle_interval_ms: OBSTACLE_INTERVAL_MS,
            victory_threshold: VICTORY_THRESHOLD,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            starting_lives: STARTING_LIVES,
            terminal_velocity: None,
        }
    }
}

impl Tuning {
    /// Environment variable holding a native JSON override
    pub const ENV_VAR: &'static str = "SWEET_RUSH_TUNING";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "sweet_rush_tuning";

    /// Duration of one simulation tick in milliseconds
    pub fn tick_ms(&self) -> f64 {
        1000.0 / self.tick_rate_hz
    }

    /// Parse and validate a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(TuningError::TickRate(self.tick_rate_hz));
        }
        // The level layout is fixed: the floor and question block must be inside the world
        let min_width = (QUESTION_BLOCK_X + QUESTION_BLOCK_WIDTH).max(PLAYER_WIDTH);
        let min_height = FLOOR_Y + PLATFORM_THICKNESS;
        if !(self.world_width >= min_width && self.world_height >= min_height) {
            return Err(TuningError::WorldTooSmall {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if !(self.jump_force.is_finite() && self.jump_force < 0.0) {
            return Err(TuningError::JumpForce(self.jump_force));
        }

        let non_negative = [
            ("gravity", self.gravity as f64),
            ("movement_speed", self.movement_speed as f64),
            ("auto_move_speed", self.auto_move_speed as f64),
            ("background_scroll_speed", self.background_scroll_speed as f64),
            ("obstacle_interval_ms", self.obstacle_interval_ms),
            (
                "terminal_velocity",
                self.terminal_velocity.map_or(0.0, f64::from),
            ),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Load the override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        Self::from_override(json.as_deref())
    }

    /// Load the override from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let json = std::env::var(Self::ENV_VAR).ok();
        Self::from_override(json.as_deref())
    }

    fn from_override(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(tuning)) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Some(Err(e)) => {
                log::warn!("Ignoring tuning override: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}
