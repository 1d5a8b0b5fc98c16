//! Session high score leaderboard
//!
//! Lives only in memory for the lifetime of the simulation context; a fresh
//! process starts with an empty table. Runs are ranked by distance travelled.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    GameOver,
    Victory,
}

/// A single finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Distance travelled (ranking key)
    pub distance: f32,
    /// Weighted sweet points collected
    pub coins: u32,
    pub outcome: RunOutcome,
    /// Simulation ticks the run lasted
    pub ticks: u64,
}

/// High score leaderboard (sorted descending by distance)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a distance qualifies for the leaderboard
    pub fn qualifies(&self, distance: f32) -> bool {
        if !(distance > 0.0) {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|e| distance > e.distance)
            .unwrap_or(true)
    }

    /// Record a finished run. Returns the rank achieved (1-indexed) or None.
    ///
    /// Ties never displace an earlier run, so the best distance only changes
    /// when it is strictly exceeded.
    pub fn add_run(
        &mut self,
        distance: f32,
        coins: u32,
        outcome: RunOutcome,
        ticks: u64,
    ) -> Option<usize> {
        if !self.qualifies(distance) {
            return None;
        }

        let entry = HighScoreEntry {
            distance,
            coins,
            outcome,
            ticks,
        };

        let pos = self.entries.iter().position(|e| distance > e.distance);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Best distance so far (0 when no run has been recorded)
    pub fn best_distance(&self) -> f32 {
        self.entries.first().map(|e| e.distance).unwrap_or(0.0)
    }
}
