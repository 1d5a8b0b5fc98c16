//! Rendering module
//!
//! Renderers only read a [`Snapshot`]; they never mutate the simulation.
//! The browser build draws with Canvas 2D, everything else runs headless.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod headless;
pub mod palette;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use headless::HeadlessRenderer;

use crate::sim::{GamePhase, Snapshot};

/// Anything that can present a frame of the game
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>);
}

/// Reports each phase once when it changes, including the first one seen
#[derive(Debug, Default, Clone, Copy)]
pub struct PhaseWatch {
    last: Option<GamePhase>,
}

impl PhaseWatch {
    /// Returns the phase if it differs from the previous observation
    pub fn observe(&mut self, phase: GamePhase) -> Option<GamePhase> {
        if self.last == Some(phase) {
            return None;
        }
        self.last = Some(phase);
        Some(phase)
    }

    pub fn last(&self) -> Option<GamePhase> {
        self.last
    }
}

/// Status line shown by hosts for each phase
pub fn phase_message(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Menu => "Press Enter to start",
        GamePhase::Playing => "",
        GamePhase::GameOver => "Game over! Press Enter to retry",
        GamePhase::Victory => "You collected enough sweets!",
    }
}

/// Why a drawing surface could not be set up
#[derive(Debug, thiserror::Error)]
pub enum RenderInitError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasMissing(String),
    #[error("element is not a canvas")]
    NotACanvas,
    #[error("2d context unavailable")]
    ContextUnavailable,
}
