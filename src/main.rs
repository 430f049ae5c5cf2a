//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent,
        Window,
    };

    use grid_snake::input::{BUTTONS, Command, SwipeTracker, key_command};
    use grid_snake::platform::Ticker;
    use grid_snake::renderer::CanvasRenderer;
    use grid_snake::sim::GridGeometry;
    use grid_snake::{Game, Settings};

    /// Game plus the DOM it draws into
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        score: Option<Element>,
        message: Option<HtmlElement>,
        swipe: SwipeTracker,
    }

    impl App {
        /// Recompute the board for the current viewport
        fn fit_to_viewport(&mut self) {
            let geometry = viewport_geometry(self.game.settings());
            self.game.resize(geometry);
            self.renderer.resize(self.game.geometry());
        }

        /// Run one tick: update, render, refresh HUD
        fn tick(&mut self) {
            self.game.step();
            self.draw();
        }

        fn draw(&self) {
            self.renderer.paint(&self.game.scene());
            self.update_hud();
        }

        fn update_hud(&self) {
            if let Some(el) = &self.score {
                el.set_text_content(Some(&self.game.score_text()));
            }

            if let Some(el) = &self.message {
                let style = el.style();
                match self.game.overlay_html() {
                    Some(html) => {
                        if el.inner_html() != html {
                            el.set_inner_html(html);
                        }
                        let _ = style.set_property("display", "block");
                    }
                    None => {
                        let _ = style.set_property("display", "none");
                    }
                }
            }
        }

        fn handle(&mut self, command: Command) {
            if self.game.apply(command) {
                self.draw();
            }
        }
    }

    fn viewport_geometry(settings: &Settings) -> GridGeometry {
        let (width, height) = web_sys::window()
            .map(|w| {
                let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                (width, height)
            })
            .unwrap_or((0.0, 0.0));
        GridGeometry::from_viewport(width, height, settings)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Grid Snake starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or_else(|| JsValue::from_str("no #game canvas"))?
            .dyn_into()?;

        let settings = Settings::load();
        let geometry = viewport_geometry(&settings);
        let seed = js_sys::Date::now() as u64;
        let tick_ms = settings.tick_ms;

        let renderer = CanvasRenderer::new(canvas.clone())?;
        renderer.resize(&geometry);

        let score = document.get_element_by_id("score");
        if score.is_none() {
            log::warn!("No #score element, score display disabled");
        }
        let message = document
            .get_element_by_id("message")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if message.is_none() {
            log::warn!("No #message element, overlay disabled");
        }

        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings, geometry, seed),
            renderer,
            score,
            message,
            swipe: SwipeTracker::new(),
        }));
        app.borrow().draw();

        setup_resize(&window, app.clone())?;
        setup_keyboard(&window, app.clone())?;
        setup_touch(&canvas, app.clone())?;
        setup_buttons(&document, app.clone())?;
        setup_restart_targets(&canvas, &document, app.clone())?;

        let ticker = {
            let app = app.clone();
            Ticker::start(tick_ms, move || app.borrow_mut().tick())?
        };
        setup_teardown(&window, ticker)?;

        log::info!("Grid Snake running!");
        Ok(())
    }

    fn setup_resize(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            a.fit_to_viewport();
            a.draw();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let command = key_command(&event.key());
            if matches!(command, Command::Turn(_)) {
                // Keep arrow keys from scrolling the page
                event.prevent_default();
            }
            app.borrow_mut().handle(command);
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_touch(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Touch start: remember where the gesture began
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut()
                        .swipe
                        .begin(touch.client_x() as f64, touch.client_y() as f64);
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end: swipe turns, tap restarts a finished round
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let mut a = app.borrow_mut();
                let threshold = a.game.settings().swipe_threshold;
                let command =
                    a.swipe
                        .end(touch.client_x() as f64, touch.client_y() as f64, threshold);
                a.handle(command);
            });
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        for (id, direction) in BUTTONS {
            let Some(button) = document.get_element_by_id(id) else {
                log::warn!("No #{} button", id);
                continue;
            };

            // Touch start fires first on mobile; stop it from also producing a click
            {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    app.borrow_mut().handle(Command::Turn(direction));
                });
                button
                    .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }

            {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    app.borrow_mut().handle(Command::Turn(direction));
                });
                button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
        }
        Ok(())
    }

    fn setup_restart_targets(
        canvas: &HtmlCanvasElement,
        document: &Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Clicking the board only matters once the round is over
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().handle(Command::Any);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // The overlay is only visible on a finished round
        if let Some(message) = document.get_element_by_id("message") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                app.borrow_mut().handle(Command::Restart);
            });
            for event in ["mousedown", "touchstart"] {
                message.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            }
            closure.forget();
        }
        Ok(())
    }

    fn setup_teardown(window: &Window, ticker: Ticker) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            ticker.stop();
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use grid_snake::sim::{GridGeometry, TickOutcome};
    use grid_snake::{Game, Settings};

    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in the browser");

    let settings = Settings::load();
    let side = settings.target_columns as i32;
    let geometry = GridGeometry::new(side, side, 1, 0);
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut game = Game::new(settings, geometry, seed);
    game.apply(grid_snake::input::Command::ToggleDemo);

    const MAX_TICKS: u32 = 10_000;
    let mut ticks = 0;
    while ticks < MAX_TICKS && game.step() != TickOutcome::Idle {
        ticks += 1;
    }

    let state = game.state();
    println!("{}", render_ascii(state));
    println!("{} after {} ticks ({:?})", game.score_text(), ticks, state.phase);
}

#[cfg(not(target_arch = "wasm32"))]
fn render_ascii(state: &grid_snake::sim::GameState) -> String {
    use glam::IVec2;

    let mut out = String::new();
    for y in 0..state.rows {
        for x in 0..state.cols {
            let cell = IVec2::new(x, y);
            let ch = if state.head() == cell {
                '@'
            } else if state.occupies(cell) {
                'o'
            } else if state.fruit == Some(cell) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
