//! Renderer that draws nothing; used natively and in tests

use super::{PhaseWatch, Renderer};
use crate::sim::{GameEvent, Snapshot};

/// Counts frames and reports phase changes through the log
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub phases: PhaseWatch,
    /// Sweets collected across everything drawn so far
    pub sweets_seen: u32,
    last_tick: Option<u64>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        self.frames += 1;

        // A tick's events stay in the snapshot until the next tick
        if self.last_tick != Some(snapshot.time_ticks) {
            for event in snapshot.events {
                if let GameEvent::Collected { count, .. } = event {
                    self.sweets_seen += count;
                }
            }
            self.last_tick = Some(snapshot.time_ticks);
        }

        if let Some(phase) = self.phases.observe(snapshot.phase) {
            log::info!(
                "Phase {:?} at tick {} (distance {:.0}, coins {})",
                phase,
                snapshot.time_ticks,
                snapshot.distance,
                snapshot.coins()
            );
        }
    }
}
