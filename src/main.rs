//! Slingshot entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, MouseEvent, TouchEvent};

    use slingshot::renderer::CanvasSurface;
    use slingshot::sim::PointerEvent;
    use slingshot::{GameConfig, HostEvent, ScoreSink, Session};

    /// Score labels in the page
    struct DomScoreSink {
        current: Option<Element>,
        highest: Option<Element>,
    }

    impl ScoreSink for DomScoreSink {
        fn set_current(&mut self, text: &str) {
            if let Some(el) = &self.current {
                el.set_text_content(Some(text));
            }
        }

        fn set_highest(&mut self, text: &str) {
            if let Some(el) = &self.highest {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: CanvasSurface,
        labels: DomScoreSink,
    }

    impl Game {
        fn frame(&mut self) {
            self.session.frame(&mut self.surface, &mut self.labels);
        }
    }

    /// Optional JSON overrides from `<script id="slingshot-config" type="application/json">`
    fn load_config(document: &web_sys::Document) -> GameConfig {
        let Some(text) = document
            .get_element_by_id("slingshot-config")
            .and_then(|el| el.text_content())
        else {
            return GameConfig::default();
        };

        match GameConfig::from_json(&text) {
            Ok(config) => {
                log::info!("Loaded config overrides");
                config.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring bad config: {}", e);
                GameConfig::default()
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Slingshot starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config = load_config(&document);
        let surface = CanvasSurface::new(&canvas, config.width as u32, config.height as u32)?;
        let labels = DomScoreSink {
            current: document.get_element_by_id("current-score"),
            highest: document.get_element_by_id("highest-score"),
        };

        let seed = js_sys::Date::now() as u64;
        let spawn_interval_ms = config.spawn_interval_ms;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, config),
            surface,
            labels,
        }));
        {
            let mut g = game.borrow_mut();
            let Game { session, labels, .. } = &mut *g;
            session.publish_scores(labels);
        }

        setup_input_handlers(&canvas, game.clone())?;
        setup_spawn_timer(&window, game.clone(), spawn_interval_ms)?;

        request_animation_frame(game);

        log::info!("Slingshot running!");
        Ok(())
    }

    /// Position relative to the canvas' top-left corner
    fn canvas_local(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            (f64::from(client_x) - rect.left()) as f32,
            (f64::from(client_y) - rect.top()) as f32,
        )
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse down - grab if over the ball
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_local(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut()
                    .session
                    .push(HostEvent::Pointer(PointerEvent::Down(pos)));
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - drag
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_local(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut()
                    .session
                    .push(HostEvent::Pointer(PointerEvent::Move(pos)));
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up - release
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut()
                    .session
                    .push(HostEvent::Pointer(PointerEvent::Up));
            });
            canvas.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start (first finger only)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = canvas_local(&canvas_clone, touch.client_x(), touch.client_y());
                    game.borrow_mut()
                        .session
                        .push(HostEvent::Pointer(PointerEvent::Down(pos)));
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = canvas_local(&canvas_clone, touch.client_x(), touch.client_y());
                    game.borrow_mut()
                        .session
                        .push(HostEvent::Pointer(PointerEvent::Move(pos)));
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut()
                    .session
                    .push(HostEvent::Pointer(PointerEvent::Up));
            });
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_spawn_timer(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
        interval_ms: u32,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().session.push(HostEvent::SpawnTimer);
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms.min(i32::MAX as u32) as i32,
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slingshot (native) starting...");
    log::info!("Native mode runs a headless scripted session - use `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 30);

    headless::run(seed, frames);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use slingshot::consts::FRAME_MS;
    use slingshot::renderer::DrawList;
    use slingshot::sim::{PointerEvent, SpawnTimer};
    use slingshot::{GameConfig, HostEvent, ScoreSink, Session};

    /// Score labels go to the log
    struct LogSink;

    impl ScoreSink for LogSink {
        fn set_current(&mut self, text: &str) {
            log::info!("{}", text);
        }

        fn set_highest(&mut self, text: &str) {
            log::info!("{}", text);
        }
    }

    /// Pull the ball down and left, release, and let the session run
    pub fn run(seed: u64, frames: u64) {
        let config = GameConfig::default();
        let mut timer = SpawnTimer::new(config.spawn_interval_ms);
        let origin = config.origin;
        let mut session = Session::new(seed, config);
        let mut surface = DrawList::new();
        let mut sink = LogSink;

        session.publish_scores(&mut sink);
        session.push(HostEvent::Pointer(PointerEvent::Down(origin)));
        session.push(HostEvent::Pointer(PointerEvent::Move(origin + Vec2::new(-70.0, 60.0))));
        session.push(HostEvent::Pointer(PointerEvent::Up));

        for _ in 0..frames {
            for _ in 0..timer.advance(FRAME_MS) {
                session.push(HostEvent::SpawnTimer);
            }
            session.frame(&mut surface, &mut sink);
        }

        let state = &session.state;
        log::info!(
            "Seed {}: finished {} frames, score {}, highest {}, {} targets left, {} draw calls in last frame",
            state.seed,
            state.time_ticks,
            state.score.current(),
            state.score.highest(),
            state.targets.len(),
            surface.commands.len()
        );
    }
}
