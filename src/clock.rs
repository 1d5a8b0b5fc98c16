//! Frame pacing: turns host frame callbacks into fixed simulation steps
//!
//! At most one tick runs per frame callback. If the host falls behind the
//! step interval, the simulation slows down instead of bursting to catch up.

use crate::input::InputLatch;
use crate::sim::{GamePhase, GameState, tick};
use crate::tuning::Tuning;

/// What a frame callback did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// One simulation tick ran
    Stepped,
    /// Too soon since the last tick
    Waiting,
    /// Not playing; nothing is scheduled
    Halted,
}

/// Fixed-step scheduler driven by host timestamps (milliseconds)
#[derive(Debug, Clone)]
pub struct Stepper {
    tick_ms: f64,
    last_ms: Option<f64>,
}

impl Stepper {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            tick_ms: tuning.tick_ms(),
            last_ms: None,
        }
    }

    /// Step interval in milliseconds
    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Forget the last step time so the next frame steps immediately
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Handle one host frame callback
    pub fn on_frame(&mut self, now_ms: f64, state: &mut GameState, latch: &mut InputLatch) -> Frame {
        if state.phase != GamePhase::Playing {
            self.last_ms = None;
            return Frame::Halted;
        }

        let elapsed = self.last_ms.map_or(f64::INFINITY, |last| now_ms - last);
        if elapsed < self.tick_ms {
            return Frame::Waiting;
        }

        self.last_ms = Some(now_ms);
        let input = latch.sample(now_ms);
        match tick(state, &input) {
            Some(_) => Frame::Stepped,
            None => Frame::Halted,
        }
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}
