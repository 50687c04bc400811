//! Gem Chase entry point
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

    use gem_chase::Settings;
    use gem_chase::renderer::RenderState;
    use gem_chase::sim::{GameState, TickInput, tick};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        settings: Settings,
        canvas_size: (f32, f32),
        // FPS tracking
        frames_since_mark: u32,
        mark_time: f64,
        fps: u32,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                render_state: None,
                input: TickInput::default(),
                settings,
                canvas_size: (1.0, 1.0),
                frames_since_mark: 0,
                mark_time: 0.0,
                fps: 0,
            }
        }

        fn set_canvas_size(&mut self, w: f32, h: f32) {
            self.canvas_size = (w, h);
        }

        /// Map a mouse position (pixels, y-down) into arena coordinates
        /// ([-1, 1] on both axes, y-up, origin at the center).
        fn pos_to_arena(&self, x: f32, y: f32) -> Vec2 {
            let (w, h) = self.canvas_size;
            let nx = (x + 0.5) / w;
            let ny = 1.0 - (y + 0.5) / h;
            Vec2::new(nx * 2.0 - 1.0, ny * 2.0 - 1.0)
        }

        /// One simulation tick per rendered frame. The loop is unthrottled
        /// on purpose: the per-tick steps are the speed knobs, not wall
        /// time.
        fn update(&mut self, time: f64) {
            tick(&mut self.state, &self.input);

            self.frames_since_mark += 1;
            if time - self.mark_time >= 1000.0 {
                self.fps = self.frames_since_mark;
                self.frames_since_mark = 0;
                self.mark_time = time;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update overlay elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                if !self.settings.show_score {
                    el.set_text_content(None);
                } else if self.state.won() {
                    el.set_text_content(Some("YOU WON"));
                    let _ = el.set_attribute("class", "hud-score won");
                } else {
                    el.set_text_content(Some(&format!("Score: {}", self.state.score)));
                }
            }

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("hud-fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gem Chase starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(Settings::load())));
        game.borrow_mut()
            .set_canvas_size(client_w as f32, client_h as f32);

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

        request_animation_frame(game);

        log::info!("Gem Chase running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move keeps the pointer snapshot current
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                g.set_canvas_size(w, h);
                let pointer = g.pos_to_arena(event.offset_x() as f32, event.offset_y() as f32);
                g.input.pointer = pointer;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Left button press/release toggles steering
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    game.borrow_mut().input.steer = true;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    game.borrow_mut().input.steer = false;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Arrow keys hold thrust
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.thrust_forward = true,
                    "ArrowDown" => g.input.thrust_backward = true,
                    "s" | "S" => {
                        g.settings.show_score = !g.settings.show_score;
                        g.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.thrust_forward = false,
                    "ArrowDown" => g.input.thrust_backward = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
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
    log::info!("Gem Chase (native) starting...");
    log::info!("The web build is the playable target - run with `trunk serve`");

    headless_smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation for a few thousand ticks so a native run still
/// exercises the core.
#[cfg(not(target_arch = "wasm32"))]
fn headless_smoke_run() {
    use gem_chase::sim::{GameState, TickInput, tick};
    use glam::Vec2;

    let mut state = GameState::new();
    let input = TickInput {
        steer: true,
        thrust_forward: true,
        pointer: Vec2::new(0.7, 0.7),
        ..Default::default()
    };
    for _ in 0..5000 {
        tick(&mut state, &input);
    }

    log::info!(
        "After {} ticks: position ({:.3}, {:.3}), heading {:.3} rad, score {}",
        state.time_ticks,
        state.craft.xy().x,
        state.craft.xy().y,
        state.craft.heading,
        state.score
    );
    println!("sim smoke run ok (score {})", state.score);
}
