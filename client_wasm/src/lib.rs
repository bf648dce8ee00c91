//! Browser host for the Pong game
//!
//! Draws to `<canvas id="pong">` through a 2D context, moves the player
//! paddle with the mouse and drives ticks from `requestAnimationFrame`.

pub mod clock;
pub mod frame;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use clock::FrameClock;
pub use frame::run_frame;

#[cfg(target_arch = "wasm32")]
pub use app::start;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{Config, Game, GameMap, GameRng};
    use log::{error, info, LevelFilter};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

    use crate::canvas::CanvasSurface;
    use crate::clock::FrameClock;
    use crate::frame::run_frame;
    use crate::input::surface_y_from_event;
    use crate::logger;

    const CANVAS_ID: &str = "pong";

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Entry point, runs when the module is instantiated
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let canvas = find_canvas(&window)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let map = GameMap::with_size(canvas.width() as f32, canvas.height() as f32);
        let game = Game::with_parts(map, Config::new(), GameRng::new(random_seed()?));
        info!(
            "Pong started on {}x{} canvas",
            canvas.width(),
            canvas.height()
        );

        let game = Rc::new(RefCell::new(game));
        attach_pointer(&canvas, game.clone())?;
        start_frame_loop(&window, game, CanvasSurface::new(ctx))
    }

    fn find_canvas(window: &Window) -> Result<HtmlCanvasElement, JsValue> {
        window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", CANVAS_ID)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", CANVAS_ID)))
    }

    fn random_seed() -> Result<u64, JsValue> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| JsValue::from_str(&format!("Failed to seed rng: {}", e)))?;
        Ok(u64::from_le_bytes(bytes))
    }

    fn attach_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let target = canvas.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let y = surface_y_from_event(&event, &target);
            game.borrow_mut().set_pointer_y(y);
        });
        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget(); // Lives as long as the page
        Ok(())
    }

    fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
        let callback = callback.borrow();
        let closure = callback
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Frame callback not installed"))?;
        window.request_animation_frame(closure.as_ref().unchecked_ref())
    }

    fn start_frame_loop(
        window: &Window,
        game: Rc<RefCell<Game>>,
        mut surface: CanvasSurface,
    ) -> Result<(), JsValue> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let next = callback.clone();
        let loop_window = window.clone();
        let mut clock = FrameClock::default();

        *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            run_frame(&mut *game.borrow_mut(), &mut clock, now_ms, &mut surface);

            if let Err(e) = request_frame(&loop_window, &next) {
                error!("Frame loop stopped: {:?}", e);
            }
        }));

        request_frame(window, &callback)?;
        Ok(())
    }
}
