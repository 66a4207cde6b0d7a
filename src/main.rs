//! Unicorn Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlImageElement, MouseEvent, TouchEvent};

    use unicorn_dash::consts::{VIEW_HEIGHT, VIEW_WIDTH};
    use unicorn_dash::renderer::{RenderState, TextureSlot, build_frame};
    use unicorn_dash::{AssetError, AssetId, LoopDriver, LoopPhase, Settings};

    /// Game instance holding all state
    struct Game {
        driver: LoopDriver,
        render_state: Option<RenderState>,
        settings: Settings,
        /// Image elements stay referenced until the page goes away
        images: Vec<HtmlImageElement>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                driver: LoopDriver::new(seed),
                render_state: None,
                settings,
                images: Vec::with_capacity(AssetId::ALL.len()),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Oldest sample sits at the write cursor
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let frame = build_frame(self.driver.state(), self.driver.gate(), &self.settings);
            match render_state.render(&frame) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    self.driver.stop();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, score_changed: bool) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if score_changed {
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&self.driver.state().score.to_string()));
                }
            }

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&format!("{} FPS", self.fps)));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Unicorn Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store follows the displayed size; fall back to the logical
        // viewport when the canvas has no layout yet
        let dpr = window.device_pixel_ratio();
        let client_w = match canvas.client_width() {
            0 => VIEW_WIDTH as i32,
            w => w,
        };
        let client_h = match canvas.client_height() {
            0 => VIEW_HEIGHT as i32,
            h => h,
        };
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        log::info!("Quality preset: {}", settings.quality.as_str());
        if !settings.show_fps {
            if let Some(el) = document.get_element_by_id("fps") {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game created with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        // The loop starts from whichever load callback settles the last asset
        load_assets(game);

        log::info!("Waiting for {} sprite(s)...", AssetId::ALL.len());
    }

    fn load_assets(game: Rc<RefCell<Game>>) {
        for asset in AssetId::ALL {
            let image = HtmlImageElement::new().expect("Failed to create image element");

            // Listeners go on before src so a cached image can't fire early
            {
                let game = game.clone();
                let image_clone = image.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    let result = {
                        let mut g = game.borrow_mut();
                        if let Some(render_state) = g.render_state.as_mut() {
                            render_state.upload_image(TextureSlot::for_asset(asset), &image_clone);
                        }
                        g.driver.asset_loaded(asset)
                    };
                    on_asset_settled(game.clone(), result);
                });
                let _ = image
                    .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    let result = game.borrow_mut().driver.asset_failed(asset);
                    on_asset_settled(game.clone(), result);
                });
                let _ = image
                    .add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            image.set_src(asset.path());
            game.borrow_mut().images.push(image);
        }
    }

    fn on_asset_settled(game: Rc<RefCell<Game>>, result: Result<bool, AssetError>) {
        match result {
            Ok(true) => {
                game.borrow().update_hud(true);
                request_animation_frame(game);
                log::info!("Unicorn Dash running!");
            }
            Ok(false) => {}
            Err(e) => log::warn!("Ignoring asset signal: {}", e),
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().driver.request_jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().driver.request_jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().driver.request_jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
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
        let reschedule = {
            let mut g = game.borrow_mut();
            let outcome = g.driver.frame();
            if outcome.ticked {
                g.track_fps(time);
                g.render();
                g.update_hud(outcome.score_changed);
            }
            // Rendering may have stopped the driver
            outcome.reschedule && g.driver.phase() == LoopPhase::Running
        };

        if reschedule {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Unicorn Dash (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    let summary = unicorn_dash::headless::run(seed, frames);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
