//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Host time enters only through `TickInput::now_ms`
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod rect;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Resolution, check_victory, resolve};
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use state::{
    BackgroundElement, BackgroundKind, Facing, GameEvent, GamePhase, GameState, ObstacleKind,
    ObstaclePattern, Platform, PlatformKind, Player, Pose, Sweet, SweetKind, level_platforms,
};
pub use tick::{TickInput, tick};
