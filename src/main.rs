//! Ring Hop entry point
//!
//! Browser: wires the canvas, score element and space key to the frame loop.
//! Native: runs a headless demo session on the software rasterizer.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use ring_hop::platform::{CanvasSurface, DomScoreDisplay};
    use ring_hop::sim::{FrameLoop, Game};
    use ring_hop::{GameConfig, GameError};

    type WebLoop = FrameLoop<CanvasSurface, DomScoreDisplay>;

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Ring Hop starting...");

        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let document = window.document().ok_or(GameError::NoDocument)?;

        let config = GameConfig::load(&document);
        match config.to_json() {
            Ok(json) => log::info!("Effective config: {}", json),
            Err(e) => log::warn!("Could not serialize config: {}", e),
        }
        let surface = CanvasSurface::from_document(&document, &config.canvas_id)?;
        let display = DomScoreDisplay::from_document(&document, &config.score_id)?;

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut game = Game::new(surface, display, &config, seed)?;
        game.platform_mut().subscribe_on_rotation(|| {
            log::debug!("Ring completed a turn");
        });
        log::info!("Game initialized with seed: {}", seed);

        let frame_loop = Rc::new(RefCell::new(FrameLoop::new(game)));

        // Listeners are registered exactly once
        setup_input_handlers(&window, frame_loop.clone())?;
        setup_auto_pause(&document, frame_loop.clone())?;

        request_animation_frame(frame_loop);

        log::info!("Ring Hop running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        frame_loop: Rc<RefCell<WebLoop>>,
    ) -> Result<(), GameError> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if frame_loop.borrow_mut().handle_key(&event.key()) {
                // Keep space from scrolling the page
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_auto_pause(
        document: &web_sys::Document,
        frame_loop: Rc<RefCell<WebLoop>>,
    ) -> Result<(), GameError> {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut fl = frame_loop.borrow_mut();
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                fl.pause();
            } else {
                fl.resume();
            }
        });
        document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(frame_loop: Rc<RefCell<WebLoop>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop not scheduled");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(frame_loop);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(frame_loop: Rc<RefCell<WebLoop>>) {
        let keep_going = match frame_loop.borrow_mut().tick() {
            Ok(keep_going) => keep_going,
            Err(e) => {
                log::warn!("Frame error: {}", e);
                true
            }
        };

        if keep_going {
            request_animation_frame(frame_loop);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ring Hop (native) starting...");
    log::info!("Browser build: run with `trunk serve`; running a headless demo instead");

    if let Err(e) = demo::run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autopilot session on the software rasterizer
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::cell::Cell;
    use std::rc::Rc;

    use ring_hop::consts::JUMP_KEY;
    use ring_hop::renderer::{LogScoreDisplay, SoftwareSurface};
    use ring_hop::sim::{FrameLoop, Game, LEAD_FRAMES, should_jump};
    use ring_hop::{GameConfig, GameError};

    /// Frames to simulate (a bit over ten turns)
    const DEMO_FRAMES: u32 = 361 * 10 + 30;

    pub fn run() -> Result<(), GameError> {
        let config = match std::env::var("RING_HOP_CONFIG") {
            Ok(json) => GameConfig::from_json(&json)?,
            Err(_) => GameConfig::default(),
        };
        log::info!("Effective config: {}", config.to_json()?);
        let seed = config.seed.unwrap_or(0);

        let surface = SoftwareSurface::new(400, 400);
        let mut game = Game::new(surface, LogScoreDisplay, &config, seed)?;

        let turns = Rc::new(Cell::new(0u32));
        {
            let turns = turns.clone();
            game.platform_mut()
                .subscribe_on_rotation(move || turns.set(turns.get() + 1));
        }

        let mut frame_loop = FrameLoop::new(game);
        let mut jumps = 0u32;
        for _ in 0..DEMO_FRAMES {
            let game = frame_loop.game();
            if should_jump(game.platform(), game.ball(), LEAD_FRAMES) {
                frame_loop.handle_key(JUMP_KEY);
                jumps += 1;
            }
            frame_loop.tick()?;
            if frame_loop.game().user_failed() {
                break;
            }
        }
        frame_loop.stop();

        let game = frame_loop.game();
        log::info!(
            "Demo finished: {} frames, {} turns, {} jumps, sections {}/{}, failed: {}",
            frame_loop.frames(),
            turns.get(),
            jumps,
            game.platform().number_of_sections(),
            game.platform().max_sections(),
            game.user_failed()
        );
        Ok(())
    }
}
