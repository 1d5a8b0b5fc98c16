//! Keyboard latch between host events and the fixed-step simulation
//!
//! Key handlers write here whenever the browser delivers an event; the stepper
//! samples it exactly once per tick into an immutable [`TickInput`], so a tick
//! never sees half of a key change.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Held horizontal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalInput {
    #[default]
    None,
    Left,
    Right,
}

/// Keys the core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

/// Held keys plus a pending jump edge
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    left_held: bool,
    right_held: bool,
    jump_held: bool,
    jump_pending: bool,
    /// Demo mode: the simulation steers itself
    pub autopilot: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Jump => {
                // Auto-repeat keydowns while held are not new presses
                if !self.jump_held {
                    self.jump_pending = true;
                }
                self.jump_held = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Jump => self.jump_held = false,
        }
    }

    /// Replace the held direction (for touch controls and scripted hosts)
    pub fn set_horizontal(&mut self, direction: HorizontalInput) {
        self.left_held = direction == HorizontalInput::Left;
        self.right_held = direction == HorizontalInput::Right;
    }

    /// Request a single jump
    pub fn jump(&mut self) {
        self.jump_pending = true;
    }

    /// Current held direction; left wins when both are down
    pub fn horizontal(&self) -> HorizontalInput {
        if self.left_held {
            HorizontalInput::Left
        } else if self.right_held {
            HorizontalInput::Right
        } else {
            HorizontalInput::None
        }
    }

    /// Snapshot the latch for one tick, consuming the jump edge
    pub fn sample(&mut self, now_ms: f64) -> TickInput {
        TickInput {
            horizontal: self.horizontal(),
            jump: std::mem::take(&mut self.jump_pending),
            now_ms,
            autopilot: self.autopilot,
        }
    }

    /// Forget held keys and pending edges (new run, lost focus)
    pub fn clear(&mut self) {
        let autopilot = self.autopilot;
        *self = Self {
            autopilot,
            ..Self::default()
        };
    }
}
