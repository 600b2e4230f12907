//! Brick Breaker entry point
//!
//! On the web this wires the canvas, keyboard and animation frames to the
//! game. Natively it runs a headless simulation (optionally on a level file
//! given as the first argument) and logs the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::Settings;
    use brick_breaker::platform::{FrameClock, Key, KeyEvent, handle_key_event, run_frame};
    use brick_breaker::renderer::CanvasSurface;
    use brick_breaker::sim::{Game, Level};

    /// Everything the frame callback needs
    struct App {
        game: Game,
        clock: FrameClock,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameScreen")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let settings = Settings::load();
        canvas.set_width(settings.game_width as u32);
        canvas.set_height(settings.game_height as u32);

        let app = Rc::new(RefCell::new(App {
            game: Game::start(settings, &Level::level_1()),
            clock: FrameClock::new(),
            surface: CanvasSurface::new(ctx, &document),
        }));

        setup_input_handlers(&document, app.clone());
        request_animation_frame(app);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        for (event_name, key_down) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_str(&event.key()) else {
                    return;
                };
                let event = if key_down { KeyEvent::Down(key) } else { KeyEvent::Up(key) };
                handle_key_event(&mut app.borrow_mut().game, event);
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let App { game, clock, surface } = &mut *a;
            run_frame(game, clock, time, surface);
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Frames simulated by the native headless run (10 s at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::Settings;
    use brick_breaker::platform::{FrameClock, run_frame};
    use brick_breaker::renderer::RecordingSurface;
    use brick_breaker::sim::{Game, Level};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    // Optional first argument: path to a JSON level grid
    let level = match std::env::args().nth(1) {
        Some(path) => Level::load(&path),
        None => Level::level_1(),
    };

    let mut game = Game::start(Settings::load(), &level);
    let mut clock = FrameClock::new();
    let mut surface = RecordingSurface::new();
    let frame_ms = 1000.0 / 60.0;

    for frame in 1..=HEADLESS_FRAMES {
        surface.clear();
        run_frame(&mut game, &mut clock, frame as f64 * frame_ms, &mut surface);
    }

    log::info!(
        "Headless run finished: {} ticks, {} bricks left, ball at ({:.0}, {:.0})",
        game.time_ticks,
        game.bricks.len(),
        game.ball.pos.x,
        game.ball.pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
