//! Sweet Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use sweet_rush::renderer::{CanvasRenderer, PhaseWatch, Renderer, phase_message};
    use sweet_rush::sim::{GamePhase, GameState};
    use sweet_rush::{InputLatch, Key, Stepper, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        stepper: Stepper,
        latch: InputLatch,
        renderer: Option<CanvasRenderer>,
        /// Phase shown by the HUD; empty before the first frame
        phases: PhaseWatch,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning) -> Self {
            let stepper = Stepper::from_tuning(&tuning);
            Self {
                state: GameState::with_tuning(seed, tuning),
                stepper,
                latch: InputLatch::new(),
                renderer: None,
                phases: PhaseWatch::default(),
            }
        }

        /// Start a run (or restart after game over / victory)
        fn start(&mut self) {
            if self.state.start() {
                self.stepper.reset();
                self.latch.clear();
            }
        }

        fn frame(&mut self, time: f64) {
            self.stepper.on_frame(time, &mut self.state, &mut self.latch);
            // Run ended on this frame: drop keys held through the finish
            if self.phases.last() == Some(GamePhase::Playing) && self.state.phase != GamePhase::Playing
            {
                self.latch.clear();
            }

            if let Some(renderer) = self.renderer.as_mut() {
                renderer.draw(&self.state.snapshot());
            }
            self.update_hud();
        }

        /// Update HUD elements in DOM (if the page has them)
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let set_text = |id: &str, text: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            };
            set_text("hud-coins", &self.state.player.coins.to_string());
            set_text("hud-distance", &format!("{:.0}", self.state.distance));
            set_text("hud-best", &format!("{:.0}", self.state.high_score()));

            if let Some(phase) = self.phases.observe(self.state.phase) {
                set_text("hud-message", phase_message(phase));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sweet Rush starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, Tuning::load())));
        log::info!("Game initialized with seed: {}", seed);

        match CanvasRenderer::new("canvas") {
            Ok(renderer) => game.borrow_mut().renderer = Some(renderer),
            // The simulation keeps running without a surface
            Err(e) => log::error!("Rendering disabled: {}", e),
        }

        setup_keyboard(game.clone());
        request_animation_frame(game);

        log::info!("Sweet Rush running!");
    }

    fn map_key(key: &str) -> Option<Key> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "ArrowUp" | "w" | "W" => Some(Key::Jump),
            _ => None,
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(k) = map_key(&key) {
                    event.prevent_default();
                    g.latch.key_down(k);
                    return;
                }
                match key.as_str() {
                    "Enter" => g.start(),
                    "i" | "I" => {
                        g.latch.autopilot = !g.latch.autopilot;
                        log::info!("Autopilot: {}", g.latch.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(k) = map_key(&event.key()) {
                    game.borrow_mut().latch.key_up(k);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sweet_rush::renderer::{HeadlessRenderer, Renderer};
    use sweet_rush::sim::{GamePhase, GameState};
    use sweet_rush::{InputLatch, Stepper, Tuning};

    /// Five minutes of simulated play
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Sweet Rush (native) starting headless autopilot session");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let tuning = Tuning::load();
    let mut stepper = Stepper::from_tuning(&tuning);
    let mut state = GameState::with_tuning(seed, tuning);
    let mut latch = InputLatch::new();
    latch.autopilot = true;
    let mut renderer = HeadlessRenderer::new();

    // Whole milliseconds so every frame clears the step interval
    let frame_ms = stepper.tick_ms().ceil();
    state.start();
    let mut now = 0.0;
    for _ in 0..MAX_FRAMES {
        stepper.on_frame(now, &mut state, &mut latch);
        renderer.draw(&state.snapshot());
        if state.phase != GamePhase::Playing {
            break;
        }
        now += frame_ms;
    }

    log::info!(
        "Session over: {:?} after {} ticks, distance {:.0}, coins {}, sweets seen {} (seed {})",
        state.phase,
        state.time_ticks,
        state.distance,
        state.player.coins,
        renderer.sweets_seen,
        seed
    );
    println!(
        "{:?}: distance {:.0}, coins {}, best {:.0}",
        state.phase,
        state.distance,
        state.player.coins,
        state.high_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
