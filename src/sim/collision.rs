//! Collision detection and scoring
//!
//! Runs once per tick after motion and spawning. The pass order matters:
//! platforms and obstacles first (a lethal hit ends the tick), then sweet
//! pickup, then the victory check, then airborne inference.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState};
use crate::highscores::RunOutcome;

/// What the resolver did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Touched a lethal platform; nothing after the platform pass ran
    pub hit_obstacle: bool,
    /// Landed on at least one walkable platform
    pub landed: bool,
    /// Sweets picked up
    pub collected: u32,
    /// Sum of their weights
    pub points: u32,
    /// Victory fired this tick
    pub victory: bool,
}

/// Resolve all player contacts for the current tick
pub fn resolve(state: &mut GameState) -> Resolution {
    let mut result = Resolution::default();

    match resolve_platforms(state) {
        PlatformContact::Lethal => {
            state.finish_run(RunOutcome::GameOver);
            result.hit_obstacle = true;
            return result;
        }
        PlatformContact::Landed => result.landed = true,
        PlatformContact::None => {}
    }

    let (collected, points) = collect_sweets(state);
    result.collected = collected;
    result.points = points;

    result.victory = check_victory(state);

    if !result.landed && state.player.vel.y >= 0.0 {
        state.player.is_jumping = true;
    }

    result
}

enum PlatformContact {
    None,
    Landed,
    Lethal,
}

/// Level platforms first, then obstacles, each tested against the player's
/// box as left by any earlier landing in this pass. The last landing wins.
fn resolve_platforms(state: &mut GameState) -> PlatformContact {
    let was_airborne = state.player.is_jumping;
    let mut contact = PlatformContact::None;

    for platform in state.platforms.iter().chain(state.obstacles.iter()) {
        let surface = platform.rect();
        if !state.player.rect().in_landing_band(&surface) {
            continue;
        }
        if platform.lethal {
            state.player.vel = Vec2::ZERO;
            return PlatformContact::Lethal;
        }
        state.player.pos.y = surface.top() - state.player.size.y;
        state.player.vel.y = 0.0;
        state.player.is_jumping = false;
        contact = PlatformContact::Landed;
    }

    if matches!(contact, PlatformContact::Landed) && was_airborne {
        state.events.push(GameEvent::Landed);
    }
    contact
}

/// Pick up every overlapping sweet at once. Returns (count, points).
fn collect_sweets(state: &mut GameState) -> (u32, u32) {
    let player = state.player.rect();
    let mut count = 0;
    let mut points = 0;

    for sweet in state.sweets.iter_mut() {
        if sweet.collected || !player.intersects(&sweet.rect()) {
            continue;
        }
        sweet.collected = true;
        count += 1;
        points += sweet.kind.weight();
    }
    if count == 0 {
        return (0, 0);
    }

    state.sweets.retain(|s| !s.collected);
    state.player.coins = state.player.coins.saturating_add(points);
    state.events.push(GameEvent::Collected { count, points });
    log::debug!(
        "Collected {} sweet(s) for {} points, total {}",
        count,
        points,
        state.player.coins
    );
    (count, points)
}

/// Fire victory once per run when the threshold is reached.
/// Returns true only on the call that fires it.
pub fn check_victory(state: &mut GameState) -> bool {
    if state.victory_signalled
        || state.phase != GamePhase::Playing
        || state.player.coins < state.tuning.victory_threshold
    {
        return false;
    }
    state.victory_signalled = true;
    state.finish_run(RunOutcome::Victory);
    true
}
