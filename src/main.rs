//! Dino Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use dino_runner::renderer::{CanvasSurface, render};
    use dino_runner::sim::{GameEvent, GameState, JumpOutcome, handle_jump, step, toggle_pause};
    use dino_runner::ui::Hud;
    use dino_runner::{Config, HighScore};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        hud: Hud,
        /// An animation frame is pending; guards against a second loop
        frame_scheduled: bool,
    }

    impl Game {
        fn render(&mut self) {
            render(&self.state, &mut self.surface);
        }

        /// Refit the canvas to its container; redraw the idle screen
        fn resize(&mut self) {
            let (w, h) = self.surface.fit_to_container();
            self.state.resize(w, h);
            log::debug!("Canvas resized to {}x{}", w, h);
            if !self.state.is_running() {
                self.render();
            }
        }

        /// Reflect simulation events in the DOM and storage
        fn apply_events(&mut self, events: &[GameEvent]) {
            for event in events {
                match *event {
                    GameEvent::SessionStarted => {
                        self.hud.hide_screens();
                        self.hud.set_score(0);
                        self.hud.set_high_score(self.state.high_score);
                    }
                    GameEvent::ObstacleCleared => {}
                    GameEvent::GameOver {
                        final_score,
                        new_high_score,
                    } => {
                        // The session state already holds the raised value
                        if new_high_score {
                            HighScore::new(self.state.high_score).save();
                            self.hud.set_high_score(self.state.high_score);
                        }
                        self.hud.show_game_over(final_score);
                    }
                }
            }
        }

        /// Jump input. Returns true if a session started and needs a loop.
        fn jump(&mut self) -> bool {
            match handle_jump(&mut self.state, now()) {
                JumpOutcome::Started => {
                    self.apply_events(&[GameEvent::SessionStarted]);
                    true
                }
                JumpOutcome::Resumed => {
                    self.hud.set_paused(false);
                    false
                }
                JumpOutcome::Jumped | JumpOutcome::Ignored => false,
            }
        }

        fn toggle_pause(&mut self) {
            let paused = toggle_pause(&mut self.state);
            self.hud.set_paused(paused);
        }

        fn pause_if_running(&mut self, reason: &str) {
            if self.state.is_running() && !self.state.paused {
                self.toggle_pause();
                log::info!("Auto-paused ({})", reason);
            }
        }

        /// One animation frame. Returns whether the loop should continue.
        fn frame(&mut self, time: f64) -> bool {
            self.frame_scheduled = false;
            // Stale frame after game over
            if !self.state.is_running() {
                return false;
            }

            self.state.record_frame(time);
            let events = step(&mut self.state);
            self.apply_events(&events);
            if self.state.is_running() {
                self.hud.set_score(self.state.display_score());
            }
            self.render();

            self.state.is_running()
        }
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

        log::info!("Dino Runner starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("[data-canvas]")?
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config = Config::load();
        let high_score = HighScore::load();
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(config, seed, high_score.best()),
            surface: CanvasSurface::new(canvas.clone())?,
            hud: Hud::from_document(&document)?,
            frame_scheduled: false,
        }));

        {
            let mut g = game.borrow_mut();
            g.hud.set_high_score(g.state.high_score);
            g.hud.show_start();
            // Sizes the canvas and draws the idle scene
            g.resize();
        }

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;
        setup_resize(game.clone())?;
        setup_auto_pause(game)?;

        log::info!("Dino Runner ready");
        Ok(())
    }

    fn on_jump(game: &Rc<RefCell<Game>>) {
        let started = game.borrow_mut().jump();
        if started {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        on_jump(&game);
                    }
                    "Escape" => {
                        game.borrow_mut().toggle_pause();
                    }
                    _ => {}
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click on the canvas
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                on_jump(&game);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().pause_if_running("tab hidden");
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().pause_if_running("window blur");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.frame_scheduled {
                return;
            }
            g.frame_scheduled = true;
        }

        let Some(window) = web_sys::window() else {
            log::error!("No window; game loop cannot run");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = game.borrow_mut().frame(time);
        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_runner::headless::run_session;
    use dino_runner::sim::GameState;
    use dino_runner::{Config, HighScore};

    /// About three minutes at 60 fps
    const MAX_FRAMES: u64 = 10_800;

    env_logger::init();
    log::info!("Dino Runner (native) starting...");
    log::info!("Native mode runs headless sessions - run with `trunk serve` for the web version");

    let config = Config::load();
    let mut high_score = HighScore::load();

    for (seed, autopilot) in [(1, false), (2, true)] {
        let mut state = GameState::new(config.clone(), seed, high_score.best());
        let summary = run_session(&mut state, MAX_FRAMES, autopilot);
        if high_score.record(summary.final_score) {
            high_score.save();
        }
        log::info!(
            "seed {} autopilot {}: score {} after {} frames ({} obstacles cleared, {})",
            seed,
            autopilot,
            summary.final_score,
            summary.frames,
            summary.obstacles_cleared,
            if summary.crashed { "crashed" } else { "frame cap" }
        );
    }

    println!("High score: {}", high_score.best());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
