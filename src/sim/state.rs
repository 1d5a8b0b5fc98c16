//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`], owned by the host and passed
//! by reference into each subsystem. There are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawner;
use crate::consts::*;
use crate::highscores::{HighScores, RunOutcome};
use crate::tuning::Tuning;

/// Top-level run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Process start, before the first run
    Menu,
    /// Active gameplay; the only phase in which the core ticks
    Playing,
    /// Hit an obstacle
    GameOver,
    /// Reached the sweet threshold
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Animation pose reported to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Idle,
    Run,
    Jump,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub size: Vec2,
    /// Airborne flag; a jump is only honored while this is false
    pub is_jumping: bool,
    pub facing: Facing,
    pub pose: Pose,
    /// Weighted sweet points collected this run
    pub coins: u32,
    pub lives: u8,
}

impl Player {
    /// A fresh runner at the start position, already moving forward
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::new(tuning.auto_move_speed, 0.0),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            is_jumping: false,
            facing: Facing::Right,
            pose: Pose::Run,
            coins: 0,
            lives: tuning.starting_lives,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Normal,
    Brick,
    Question,
    Spike,
    Barrier,
}

impl PlatformKind {
    /// Kinds that kill on contact wherever they appear
    pub fn is_hazard(self) -> bool {
        matches!(self, PlatformKind::Spike | PlatformKind::Barrier)
    }
}

/// Kinds the spawner may choose for an obstacle wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Brick,
    Spike,
    Barrier,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Brick, ObstacleKind::Spike, ObstacleKind::Barrier];

    /// Fixed footprint of one obstacle of this kind
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Brick => Vec2::new(40.0, 40.0),
            ObstacleKind::Spike => Vec2::new(24.0, 24.0),
            ObstacleKind::Barrier => Vec2::new(40.0, 40.0),
        }
    }

    pub fn platform_kind(self) -> PlatformKind {
        match self {
            ObstacleKind::Brick => PlatformKind::Brick,
            ObstacleKind::Spike => PlatformKind::Spike,
            ObstacleKind::Barrier => PlatformKind::Barrier,
        }
    }
}

/// Layout of one obstacle wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstaclePattern {
    /// One obstacle
    Single,
    /// Two in a row
    Double,
    /// Three in a row
    Triple,
    /// Three stacked upward
    Wall,
}

impl ObstaclePattern {
    pub const ALL: [ObstaclePattern; 4] = [
        ObstaclePattern::Single,
        ObstaclePattern::Double,
        ObstaclePattern::Triple,
        ObstaclePattern::Wall,
    ];
}

/// A level platform or a spawned obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
    /// Question blocks may carry a coin (display only)
    pub has_coin: bool,
    /// Contact ends the run
    pub lethal: bool,
}

impl Platform {
    /// A fixed level platform; walkable unless its kind is a hazard
    pub fn level(kind: PlatformKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            kind,
            has_coin: false,
            lethal: kind.is_hazard(),
        }
    }

    /// A spawned obstacle; always lethal, even bricks
    pub fn obstacle(kind: ObstacleKind, pos: Vec2) -> Self {
        Self {
            pos,
            size: kind.size(),
            kind: kind.platform_kind(),
            has_coin: false,
            lethal: true,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweetKind {
    Dhokla,
    Mithai,
    Vadapav,
    Jalebi,
    Ladoo,
}

impl SweetKind {
    pub const ALL: [SweetKind; 5] = [
        SweetKind::Dhokla,
        SweetKind::Mithai,
        SweetKind::Vadapav,
        SweetKind::Jalebi,
        SweetKind::Ladoo,
    ];

    /// Points added to the player's coins on pickup
    pub fn weight(self) -> u32 {
        match self {
            SweetKind::Dhokla => 1,
            SweetKind::Mithai => 2,
            SweetKind::Vadapav => 3,
            SweetKind::Jalebi => 4,
            SweetKind::Ladoo => 5,
        }
    }
}

/// A collectible sweet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sweet {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Set during pickup, removed in the same tick
    pub collected: bool,
    pub kind: SweetKind,
}

impl Sweet {
    pub fn new(id: u32, kind: SweetKind, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(SWEET_SIZE),
            collected: false,
            kind,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Decoration types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundKind {
    Temple,
    Tree,
    Cloud,
}

impl BackgroundKind {
    pub const ALL: [BackgroundKind; 3] = [BackgroundKind::Temple, BackgroundKind::Tree, BackgroundKind::Cloud];

    pub fn size(self) -> Vec2 {
        match self {
            BackgroundKind::Temple => Vec2::new(200.0, 300.0),
            BackgroundKind::Tree => Vec2::new(100.0, 150.0),
            BackgroundKind::Cloud => Vec2::new(120.0, 40.0),
        }
    }

    /// Fixed spawn height
    pub fn spawn_y(self) -> f32 {
        match self {
            BackgroundKind::Temple => 200.0,
            BackgroundKind::Tree => 300.0,
            BackgroundKind::Cloud => 100.0,
        }
    }
}

/// A purely decorative background element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundElement {
    pub kind: BackgroundKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Things that happened during the last tick (for sound, HUD pops, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    Collected { count: u32, points: u32 },
    ObstaclesSpawned { kind: ObstacleKind, pattern: ObstaclePattern, count: u32 },
    GameOver { distance: f32 },
    Victory { coins: u32 },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Static level platforms
    pub platforms: Vec<Platform>,
    /// Spawned obstacles, oldest first
    pub obstacles: Vec<Platform>,
    /// Active sweets, oldest first
    pub sweets: Vec<Sweet>,
    pub background: Vec<BackgroundElement>,
    /// Distance scrolled this run
    pub distance: f32,
    /// Ticks simulated this run
    pub time_ticks: u64,
    /// Host timestamp of the last obstacle wave; armed on the first tick of a run
    pub last_obstacle_spawn_ms: Option<f64>,
    /// Victory already fired this run
    pub victory_signalled: bool,
    /// Survives restarts
    pub high_scores: HighScores,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Next entity ID (never reused within a session)
    next_id: u32,
}

impl GameState {
    /// Create a new game in the menu phase with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game in the menu phase
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::spawn(&tuning),
            platforms: level_platforms(&tuning),
            tuning,
            phase: GamePhase::Menu,
            obstacles: Vec::new(),
            sweets: Vec::new(),
            background: Vec::new(),
            distance: 0.0,
            time_ticks: 0,
            last_obstacle_spawn_ms: None,
            victory_signalled: false,
            high_scores: HighScores::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start a run from the menu or restart after a finished run.
    ///
    /// Ignored while already playing. Returns whether a run started.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }
        let from = self.phase;
        self.reset_run();
        self.phase = GamePhase::Playing;
        log::info!("Run started (from {:?}, seed {})", from, self.seed);
        true
    }

    /// Put every per-run collection and counter back to its initial value
    fn reset_run(&mut self) {
        self.player = Player::spawn(&self.tuning);
        self.platforms = level_platforms(&self.tuning);
        self.obstacles.clear();
        self.sweets.clear();
        self.background.clear();
        self.events.clear();
        self.distance = 0.0;
        self.time_ticks = 0;
        self.last_obstacle_spawn_ms = None;
        self.victory_signalled = false;
        spawner::seed_sweets(self);
    }

    /// End the run: freeze the player, record the score, switch phase
    pub(crate) fn finish_run(&mut self, outcome: RunOutcome) {
        self.player.vel = Vec2::ZERO;
        let rank = self.high_scores.add_run(
            self.distance,
            self.player.coins,
            outcome,
            self.time_ticks,
        );

        match outcome {
            RunOutcome::GameOver => {
                self.phase = GamePhase::GameOver;
                self.events.push(GameEvent::GameOver {
                    distance: self.distance,
                });
            }
            RunOutcome::Victory => {
                self.phase = GamePhase::Victory;
                self.events.push(GameEvent::Victory {
                    coins: self.player.coins,
                });
            }
        }

        log::info!(
            "Run ended: {:?} after {} ticks, distance {:.0}, coins {}",
            outcome,
            self.time_ticks,
            self.distance,
            self.player.coins
        );
        if let Some(rank) = rank {
            log::info!("New high score table entry at rank {}", rank);
        }
    }

    /// Best distance recorded this session
    pub fn high_score(&self) -> f32 {
        self.high_scores.best_distance()
    }
}

/// The fixed level: a full-width floor and one question block
pub fn level_platforms(tuning: &Tuning) -> Vec<Platform> {
    let floor = Platform::level(
        PlatformKind::Normal,
        Vec2::new(0.0, FLOOR_Y),
        Vec2::new(tuning.world_width, PLATFORM_THICKNESS),
    );
    let mut question = Platform::level(
        PlatformKind::Question,
        Vec2::new(QUESTION_BLOCK_X, QUESTION_BLOCK_Y),
        Vec2::new(QUESTION_BLOCK_WIDTH, PLATFORM_THICKNESS),
    );
    question.has_coin = true;
    vec![floor, question]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_menu() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.sweets.is_empty());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.platforms.len(), 2);
        assert_eq!(state.high_score(), 0.0);
    }

    #[test]
    fn test_start_seeds_run() {
        let mut state = GameState::new(7);
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.sweets.len(), INITIAL_SWEETS);
        assert_eq!(state.player.vel, Vec2::new(AUTO_MOVE_SPEED, 0.0));
        assert_eq!(state.player.pose, Pose::Run);
        assert_eq!(state.player.lives, STARTING_LIVES);
    }

    #[test]
    fn test_start_while_playing_is_ignored() {
        let mut state = GameState::new(7);
        state.start();
        state.distance = 120.0;
        state.player.coins = 9;
        assert!(!state.start());
        assert_eq!(state.distance, 120.0);
        assert_eq!(state.player.coins, 9);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(7);
        state.start();
        let first: Vec<u32> = state.sweets.iter().map(|s| s.id).collect();
        state.phase = GamePhase::GameOver;
        state.start();
        let second: Vec<u32> = state.sweets.iter().map(|s| s.id).collect();
        assert!(first.iter().all(|id| !second.contains(id)));
    }

    #[test]
    fn test_sweet_weights() {
        let total: u32 = SweetKind::ALL.iter().map(|k| k.weight()).sum();
        assert_eq!(total, 15);
        assert_eq!(SweetKind::Dhokla.weight(), 1);
        assert_eq!(SweetKind::Ladoo.weight(), 5);
    }

    #[test]
    fn test_obstacles_are_lethal_level_bricks_are_not() {
        let brick = Platform::obstacle(ObstacleKind::Brick, Vec2::new(800.0, 300.0));
        assert!(brick.lethal);
        assert_eq!(brick.size, Vec2::new(40.0, 40.0));
        let floor_brick = Platform::level(PlatformKind::Brick, Vec2::ZERO, Vec2::splat(32.0));
        assert!(!floor_brick.lethal);
        let spike = Platform::level(PlatformKind::Spike, Vec2::ZERO, Vec2::splat(24.0));
        assert!(spike.lethal);
    }

    #[test]
    fn test_finish_run_records_score() {
        let mut state = GameState::new(7);
        state.start();
        state.distance = 300.0;
        state.player.vel = Vec2::new(3.0, 2.0);
        state.finish_run(RunOutcome::GameOver);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.high_score(), 300.0);
        assert_eq!(state.events, vec![GameEvent::GameOver { distance: 300.0 }]);
    }
}
