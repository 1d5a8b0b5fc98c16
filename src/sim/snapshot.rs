//! Read-only view of the simulation handed to renderers and the HUD

use serde::Serialize;

use super::state::{BackgroundElement, GameEvent, GamePhase, GameState, Platform, Player, Sweet};

/// Everything a frame needs to draw, borrowed from the state
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    pub platforms: &'a [Platform],
    pub obstacles: &'a [Platform],
    pub sweets: &'a [Sweet],
    pub background: &'a [BackgroundElement],
    /// Events from the most recent tick
    pub events: &'a [GameEvent],
    pub distance: f32,
    pub high_score: f32,
    pub time_ticks: u64,
    pub victory_threshold: u32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Snapshot<'_> {
    /// Coins shown in the HUD
    pub fn coins(&self) -> u32 {
        self.player.coins
    }

    /// Serialize for external hosts (debug overlays, replays)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            player: &self.player,
            platforms: &self.platforms,
            obstacles: &self.obstacles,
            sweets: &self.sweets,
            background: &self.background,
            events: &self.events,
            distance: self.distance,
            high_score: self.high_score(),
            time_ticks: self.time_ticks,
            victory_threshold: self.tuning.victory_threshold,
            world_width: self.tuning.world_width,
            world_height: self.tuning.world_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(7);
        let menu = state.snapshot();
        assert_eq!(menu.phase, GamePhase::Menu);
        assert!(menu.sweets.is_empty());

        state.start();
        state.player.coins = 9;
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.coins(), 9);
        assert_eq!(snap.sweets.len(), 5);
        assert_eq!(snap.platforms.len(), 2);
        assert_eq!(snap.victory_threshold, 50);
    }

    #[test]
    fn test_snapshot_json() {
        let mut state = GameState::new(7);
        state.start();
        let json = state.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["sweets"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["player"]["lives"], 3);
    }
}
