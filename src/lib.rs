//! Sweet Rush - a side-scrolling sweet-collecting runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `clock`: Fixed-step scheduling on top of host frame timestamps
//! - `input`: Key latch sampled once per tick
//! - `renderer`: Snapshot consumers (Canvas 2D on the web, headless natively)
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-memory session leaderboard

pub mod clock;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use clock::{Frame, Stepper};
pub use highscores::{HighScores, RunOutcome};
pub use input::{HorizontalInput, InputLatch, Key};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Target simulation rate
    pub const TICK_RATE_HZ: f64 = 60.0;

    /// Logical world size
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Vertical acceleration added every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_FORCE: f32 = -15.0;
    /// Horizontal speed while a direction key is held
    pub const MOVEMENT_SPEED: f32 = 5.0;
    /// Autorun speed; also the scroll speed of obstacles and sweets
    pub const AUTO_MOVE_SPEED: f32 = 3.0;
    /// Parallax scroll speed of background decorations
    pub const BACKGROUND_SCROLL_SPEED: f32 = 0.5;
    /// Per-tick horizontal velocity decay when no direction is held
    pub const HORIZONTAL_DAMPING: f32 = 0.8;
    /// Below this horizontal speed the runner is considered idle
    pub const RUN_THRESHOLD: f32 = 0.1;

    /// Milliseconds between obstacle waves
    pub const OBSTACLE_INTERVAL_MS: f64 = 8000.0;
    /// Weighted sweet points needed to win
    pub const VICTORY_THRESHOLD: u32 = 50;
    pub const STARTING_LIVES: u8 = 3;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 100.0;

    /// Level layout
    pub const FLOOR_Y: f32 = 500.0;
    pub const PLATFORM_THICKNESS: f32 = 32.0;
    /// Walkable block with a coin, placed at a fixed spot above the floor
    pub const QUESTION_BLOCK_X: f32 = 300.0;
    pub const QUESTION_BLOCK_Y: f32 = 400.0;
    pub const QUESTION_BLOCK_WIDTH: f32 = 100.0;

    /// Sweets
    pub const SWEET_SIZE: f32 = 32.0;
    pub const INITIAL_SWEETS: usize = 5;
    /// Sweets are topped up while the furthest one is closer than this past the right edge
    pub const SWEET_LOOKAHEAD: f32 = 200.0;
    /// Offsets of a top-up pair from the furthest sweet
    pub const SWEET_SPAWN_OFFSETS: [f32; 2] = [200.0, 350.0];
    pub const SWEET_MIN_Y: f32 = 150.0;
    pub const SWEET_MAX_Y: f32 = 350.0;

    /// Obstacle waves
    pub const OBSTACLE_MIN_Y: f32 = 200.0;
    pub const OBSTACLE_MAX_Y: f32 = 500.0;
    pub const OBSTACLE_ROW_GAP: f32 = 10.0;
    pub const OBSTACLE_WALL_GAP: f32 = 5.0;
    pub const OBSTACLE_WALL_HEIGHT: usize = 3;

    /// Chance per tick of a new background decoration
    pub const BACKGROUND_SPAWN_CHANCE: f64 = 0.01;
}
