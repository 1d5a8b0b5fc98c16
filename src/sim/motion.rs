//! Player physics and world scrolling
//!
//! Velocities are in pixels per tick. The player integrates with the velocity
//! it had before this tick's gravity is added, so a grounded runner whose
//! vertical speed was zeroed by the last landing does not move vertically;
//! the resolver re-snaps it after gravity builds up again.

use super::state::{Facing, GameState, Player, Pose};
use crate::consts::{HORIZONTAL_DAMPING, RUN_THRESHOLD};
use crate::input::HorizontalInput;
use crate::tuning::Tuning;

/// Advance the player by one tick. Returns true if a jump started.
pub fn step_player(
    player: &mut Player,
    tuning: &Tuning,
    horizontal: HorizontalInput,
    jump: bool,
) -> bool {
    player.vel.x = match horizontal {
        HorizontalInput::Left => -tuning.movement_speed,
        HorizontalInput::Right => tuning.movement_speed,
        // Decays toward zero but never snaps
        HorizontalInput::None => player.vel.x * HORIZONTAL_DAMPING,
    };

    // Requests while airborne are dropped, not buffered
    let jumped = jump && !player.is_jumping;
    if jumped {
        player.vel.y = tuning.jump_force;
        player.is_jumping = true;
    }

    player.pos += player.vel;
    player.vel.y += tuning.gravity;
    if let Some(max_fall) = tuning.terminal_velocity {
        player.vel.y = player.vel.y.min(max_fall);
    }

    clamp_to_world(player, tuning);
    update_pose(player);
    jumped
}

/// Keep the player box inside the world. Non-finite coordinates collapse
/// onto the nearest bound instead of propagating.
pub fn clamp_to_world(player: &mut Player, tuning: &Tuning) {
    let max_x = (tuning.world_width - player.size.x).max(0.0);
    let max_y = (tuning.world_height - player.size.y).max(0.0);
    player.pos.x = player.pos.x.min(max_x).max(0.0);
    player.pos.y = player.pos.y.min(max_y).max(0.0);
}

/// Derive facing and animation pose from velocity and the airborne flag
pub fn update_pose(player: &mut Player) {
    if player.vel.x < 0.0 {
        player.facing = Facing::Left;
    } else if player.vel.x > 0.0 {
        player.facing = Facing::Right;
    }

    player.pose = if player.is_jumping {
        Pose::Jump
    } else if player.vel.x.abs() > RUN_THRESHOLD {
        Pose::Run
    } else {
        Pose::Idle
    };
}

/// Scroll every dynamic entity left, drop whatever left the screen, and
/// advance the distance counter. Level platforms stay put.
pub fn scroll_world(state: &mut GameState) {
    let speed = state.tuning.auto_move_speed;
    let parallax = state.tuning.background_scroll_speed;

    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }
    state.obstacles.retain(|o| o.pos.x + o.size.x > 0.0);

    for sweet in &mut state.sweets {
        sweet.pos.x -= speed;
    }
    state.sweets.retain(|s| s.pos.x + s.size.x > 0.0);

    for element in &mut state.background {
        element.pos.x -= parallax;
    }
    state.background.retain(|e| e.pos.x + e.size.x > 0.0);

    state.distance += speed;
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::sim::state::{
        BackgroundElement, BackgroundKind, ObstacleKind, Platform, Sweet, SweetKind,
    };

    fn grounded_player() -> Player {
        let mut player = Player::spawn(&Tuning::default());
        player.pos = Vec2::new(200.0, 452.0);
        player.vel = Vec2::ZERO;
        player.is_jumping = false;
        player
    }

    #[test]
    fn test_held_direction_sets_speed() {
        let tuning = Tuning::default();
        let mut player = grounded_player();
        step_player(&mut player, &tuning, HorizontalInput::Left, false);
        assert_eq!(player.vel.x, -5.0);
        assert_eq!(player.pos.x, 195.0);
        assert_eq!(player.facing, Facing::Left);
        assert_eq!(player.pose, Pose::Run);

        step_player(&mut player, &tuning, HorizontalInput::Right, false);
        assert_eq!(player.vel.x, 5.0);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_release_decays_without_snapping() {
        let tuning = Tuning::default();
        let mut player = grounded_player();
        player.vel.x = 3.0;
        step_player(&mut player, &tuning, HorizontalInput::None, false);
        assert!((player.vel.x - 2.4).abs() < 1e-6);
        for _ in 0..60 {
            step_player(&mut player, &tuning, HorizontalInput::None, false);
        }
        assert!(player.vel.x > 0.0);
        assert_eq!(player.pose, Pose::Idle);
        // Facing is kept while the sign is positive
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let tuning = Tuning::default();
        let mut player = grounded_player();
        assert!(step_player(&mut player, &tuning, HorizontalInput::None, true));
        assert!(player.is_jumping);
        assert_eq!(player.pose, Pose::Jump);
        // Moved by the impulse, then gravity added
        assert_eq!(player.pos.y, 437.0);
        assert_eq!(player.vel.y, -14.5);

        // Second request mid-air is dropped
        assert!(!step_player(&mut player, &tuning, HorizontalInput::None, true));
        assert_eq!(player.vel.y, -14.0);
    }

    #[test]
    fn test_gravity_after_integration() {
        let tuning = Tuning::default();
        let mut player = grounded_player();
        step_player(&mut player, &tuning, HorizontalInput::None, false);
        // Position used the zero velocity; gravity shows up next tick
        assert_eq!(player.pos.y, 452.0);
        assert_eq!(player.vel.y, 0.5);
    }

    #[test]
    fn test_terminal_velocity_caps_fall() {
        let tuning = Tuning {
            terminal_velocity: Some(4.0),
            ..Tuning::default()
        };
        let mut player = grounded_player();
        player.pos.y = 0.0;
        for _ in 0..30 {
            step_player(&mut player, &tuning, HorizontalInput::None, false);
        }
        assert_eq!(player.vel.y, 4.0);
    }

    #[test]
    fn test_clamp_normalizes_nan() {
        let tuning = Tuning::default();
        let mut player = grounded_player();
        player.pos = Vec2::new(f32::NAN, -40.0);
        clamp_to_world(&mut player, &tuning);
        assert!(player.pos.x.is_finite());
        assert_eq!(player.pos.y, 0.0);
    }

    #[test]
    fn test_scroll_and_despawn() {
        let mut state = GameState::new(1);
        state.start();
        state.sweets.clear();
        state.obstacles.push(Platform::obstacle(ObstacleKind::Spike, Vec2::new(-21.0, 300.0)));
        state.obstacles.push(Platform::obstacle(ObstacleKind::Spike, Vec2::new(-20.0, 300.0)));
        state.sweets.push(Sweet::new(90, SweetKind::Mithai, Vec2::new(100.0, 200.0)));
        state.sweets.push(Sweet::new(91, SweetKind::Mithai, Vec2::new(-29.0, 200.0)));
        state.background.push(BackgroundElement {
            kind: BackgroundKind::Cloud,
            pos: Vec2::new(-119.6, 100.0),
            size: BackgroundKind::Cloud.size(),
        });

        scroll_world(&mut state);

        // -21 - 3 + 24 = 0 → gone; -20 - 3 + 24 = 1 → kept
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, -23.0);
        assert_eq!(state.sweets.len(), 1);
        assert_eq!(state.sweets[0].id, 90);
        assert_eq!(state.sweets[0].pos.x, 97.0);
        // Background moves at the parallax speed
        assert!(state.background.is_empty());
        assert_eq!(state.distance, 3.0);
        // Level platforms never scroll
        assert_eq!(state.platforms[0].pos.x, 0.0);
    }

    fn horizontal_from(code: u8) -> HorizontalInput {
        match code {
            0 => HorizontalInput::Left,
            1 => HorizontalInput::Right,
            _ => HorizontalInput::None,
        }
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            start_x in -200.0f32..1000.0,
            start_y in -200.0f32..800.0,
            vel_y in -40.0f32..40.0,
            inputs in proptest::collection::vec((0u8..3, any::<bool>()), 1..240),
        ) {
            let tuning = Tuning::default();
            let mut player = grounded_player();
            player.pos = Vec2::new(start_x, start_y);
            player.vel.y = vel_y;
            for (code, jump) in inputs {
                step_player(&mut player, &tuning, horizontal_from(code), jump);
                prop_assert!(player.pos.x >= 0.0 && player.pos.x <= 800.0 - player.size.x);
                prop_assert!(player.pos.y >= 0.0 && player.pos.y <= 600.0 - player.size.y);
            }
        }
    }
}
