//! Fixed timestep simulation tick
//!
//! Per tick: input → player motion → world scroll → spawners → collisions.

use super::collision::{Resolution, resolve};
use super::motion::{scroll_world, step_player};
use super::spawner::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::input::HorizontalInput;

/// How far ahead (pixels) the autopilot looks for an obstacle at its feet
const AUTOPILOT_LOOKAHEAD: f32 = 12.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction, sampled once for the whole tick
    pub horizontal: HorizontalInput,
    /// Jump edge; dropped if the player is airborne
    pub jump: bool,
    /// Host timestamp (ms) used by the obstacle spawn timer
    pub now_ms: f64,
    /// Idle/demo mode - the simulation steers itself
    pub autopilot: bool,
}

/// Advance the game state by one fixed step.
///
/// Returns what the collision pass did, or `None` without touching the state
/// unless the phase is `Playing`, so a step that was already queued when the
/// run ended is harmless.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<Resolution> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    state.events.clear();
    state.time_ticks += 1;

    let mut input = input.clone();
    if input.autopilot {
        steer(state, &mut input);
    }
    let input = &input;

    if step_player(&mut state.player, &state.tuning, input.horizontal, input.jump) {
        state.events.push(GameEvent::Jumped);
    }
    scroll_world(state);
    spawn(state, input.now_ms);
    let resolution = resolve(state);
    if resolution.hit_obstacle {
        log::debug!(
            "Obstacle hit at ({:.0}, {:.0})",
            state.player.pos.x,
            state.player.pos.y
        );
    }

    Some(resolution)
}

/// Demo steering: let the autorun carry the player and hop over obstacles
/// that are about to reach its feet.
fn steer(state: &GameState, input: &mut TickInput) {
    input.horizontal = HorizontalInput::None;
    if state.player.is_jumping {
        return;
    }

    let player = state.player.rect();
    let threatened = state.obstacles.iter().any(|obstacle| {
        let r = obstacle.rect();
        let gap = r.left() - player.right();
        let at_feet = player.bottom() >= r.top() && player.bottom() <= r.bottom();
        (0.0..=AUTOPILOT_LOOKAHEAD).contains(&gap) && at_feet
    });
    if threatened {
        input.jump = true;
    }
}
