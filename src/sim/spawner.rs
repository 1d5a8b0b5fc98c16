//! Procedural spawning of obstacles, sweets and background decorations
//!
//! All draws come from the state's seeded RNG, so a run is reproducible from
//! its seed and the host timestamps fed to [`spawn`].

use glam::Vec2;
use rand::Rng;

use super::state::{
    BackgroundElement, BackgroundKind, GameEvent, GameState, ObstacleKind, ObstaclePattern,
    Platform, Sweet, SweetKind,
};
use crate::consts::*;

/// Run every spawner for one tick, after the world has scrolled
pub fn spawn(state: &mut GameState, now_ms: f64) {
    spawn_obstacles(state, now_ms);
    top_up_sweets(state);
    maybe_spawn_background(state);
}

/// Lay out one obstacle wave. Every member shares the wave's origin column
/// or row; rows grow rightward and walls grow upward.
pub fn obstacle_wave(kind: ObstacleKind, pattern: ObstaclePattern, base: Vec2) -> Vec<Platform> {
    let size = kind.size();
    let row = |count: usize| -> Vec<Platform> {
        (0..count)
            .map(|i| {
                let offset = Vec2::new((size.x + OBSTACLE_ROW_GAP) * i as f32, 0.0);
                Platform::obstacle(kind, base + offset)
            })
            .collect()
    };

    match pattern {
        ObstaclePattern::Single => row(1),
        ObstaclePattern::Double => row(2),
        ObstaclePattern::Triple => row(3),
        ObstaclePattern::Wall => (0..OBSTACLE_WALL_HEIGHT)
            .map(|i| {
                let offset = Vec2::new(0.0, (size.y + OBSTACLE_WALL_GAP) * i as f32);
                Platform::obstacle(kind, base - offset)
            })
            .collect(),
    }
}

/// Emit a wave when the interval has elapsed since the previous one.
///
/// The first call of a run only arms the timer. The timer restarts at `now_ms`
/// rather than advancing by the interval, so a late frame pushes every later
/// wave back by the overrun.
pub fn spawn_obstacles(state: &mut GameState, now_ms: f64) -> bool {
    let Some(last) = state.last_obstacle_spawn_ms else {
        state.last_obstacle_spawn_ms = Some(now_ms);
        return false;
    };
    if now_ms - last < state.tuning.obstacle_interval_ms {
        return false;
    }
    state.last_obstacle_spawn_ms = Some(now_ms);

    let kind = ObstacleKind::ALL[state.rng.random_range(0..ObstacleKind::ALL.len())];
    let pattern = ObstaclePattern::ALL[state.rng.random_range(0..ObstaclePattern::ALL.len())];
    let base_y = state.rng.random_range(OBSTACLE_MIN_Y..OBSTACLE_MAX_Y);
    let base = Vec2::new(state.tuning.world_width, base_y);

    let wave = obstacle_wave(kind, pattern, base);
    let count = wave.len() as u32;
    state.obstacles.extend(wave);
    state.events.push(GameEvent::ObstaclesSpawned {
        kind,
        pattern,
        count,
    });
    log::debug!(
        "Obstacle wave: {:?} {:?} x{} at y={:.0} (t={:.0}ms)",
        pattern,
        kind,
        count,
        base_y,
        now_ms
    );
    true
}

/// Keep sweets coming: while the furthest sweet (never counted nearer than
/// the right edge) is within the lookahead, append a pair beyond it.
/// Returns how many sweets were added.
pub fn top_up_sweets(state: &mut GameState) -> usize {
    let edge = state.tuning.world_width;
    let furthest = state.sweets.iter().map(|s| s.pos.x).fold(edge, f32::max);
    if furthest >= edge + SWEET_LOOKAHEAD {
        return 0;
    }

    for offset in SWEET_SPAWN_OFFSETS {
        let y = state.rng.random_range(SWEET_MIN_Y..SWEET_MAX_Y);
        let kind = random_sweet_kind(state);
        let id = state.next_entity_id();
        state
            .sweets
            .push(Sweet::new(id, kind, Vec2::new(furthest + offset, y)));
    }
    SWEET_SPAWN_OFFSETS.len()
}

/// Opening layout of a run: evenly spaced, alternating heights
pub fn seed_sweets(state: &mut GameState) {
    for i in 0..INITIAL_SWEETS {
        let x = 300.0 + 150.0 * i as f32;
        let y = if i % 2 == 0 { 350.0 } else { 300.0 };
        let kind = random_sweet_kind(state);
        let id = state.next_entity_id();
        state.sweets.push(Sweet::new(id, kind, Vec2::new(x, y)));
    }
}

/// Occasionally add a decoration at the right edge
pub fn maybe_spawn_background(state: &mut GameState) -> bool {
    if !state.rng.random_bool(BACKGROUND_SPAWN_CHANCE) {
        return false;
    }
    let kind = BackgroundKind::ALL[state.rng.random_range(0..BackgroundKind::ALL.len())];
    state.background.push(BackgroundElement {
        kind,
        pos: Vec2::new(state.tuning.world_width, kind.spawn_y()),
        size: kind.size(),
    });
    true
}

fn random_sweet_kind(state: &mut GameState) -> SweetKind {
    SweetKind::ALL[state.rng.random_range(0..SweetKind::ALL.len())]
}
