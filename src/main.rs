//! Spot the Icon entry point
//!
//! Browser: runs the game loop on a canvas.
//! Native: plays rounds headlessly with a bot and logs the results.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use spot_the_icon::consts::*;
    use spot_the_icon::renderer::CanvasRenderer;
    use spot_the_icon::sim::{GameState, TickInput, tick};
    use spot_the_icon::{Catalog, GameSettings, ui};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        accumulator: f32,
        last_time: f64,
        /// Activations waiting for the next tick
        input: TickInput,
    }

    impl Game {
        /// Queue a click given in client CSS pixels
        ///
        /// The canvas box is read on every event since layout can change at
        /// any time.
        fn queue_activation(&mut self, canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) {
            let rect = canvas.get_bounding_client_rect();
            let point = ui::to_game_coords(
                Vec2::new(client_x, client_y),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                rect.width() as f32,
                self.state.settings().screen_width,
            );
            self.input.push(point);
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.take();
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&self) {
            let commands = ui::compose(&self.state.view(), self.state.settings().screen_width);
            if let Err(e) = self.renderer.render(&commands) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("{} starting...", GAME_TITLE);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        document.set_title(GAME_TITLE);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = GameSettings::default();
        let catalog = Catalog::default();

        // Back the canvas at device resolution, draw in game units
        let dpr = window.device_pixel_ratio();
        canvas.set_width((settings.screen_width as f64 * dpr) as u32);
        canvas.set_height((settings.screen_height as f64 * dpr) as u32);

        let renderer = CanvasRenderer::new(&canvas, &catalog, dpr)?;

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(catalog, settings, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            accumulator: 0.0,
            last_time: 0.0,
            input: TickInput::default(),
        }));

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("{} running!", GAME_TITLE);
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                game.borrow_mut().queue_activation(
                    &canvas_clone,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    game.borrow_mut().queue_activation(
                        &canvas_clone,
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                    );
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window went away, stopping");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use clap::Parser;
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use spot_the_icon::sim::{GameEvent, GamePhase, GameState, Outcome, TickInput, tick};
    use spot_the_icon::{Catalog, GameSettings};

    /// Play Spot the Icon headlessly with a bot
    #[derive(Debug, Parser)]
    #[command(name = "spot-the-icon", version, about)]
    pub struct Args {
        /// Seed for the game RNG (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Rounds to play
        #[arg(long, default_value_t = 10)]
        rounds: u32,

        /// JSON settings file
        #[arg(long)]
        settings: Option<PathBuf>,

        /// JSON catalog file (array of icon identifiers)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Probability the bot clicks the target rather than a decoy
        #[arg(long, default_value_t = 0.8)]
        accuracy: f64,

        /// Pace ticks at the configured tick rate instead of running flat out
        #[arg(long)]
        realtime: bool,
    }

    /// Bot watch time per round, in ticks
    const MIN_WATCH_TICKS: u32 = 30;
    const MAX_WATCH_TICKS: u32 = 180;

    fn load_settings(path: Option<&PathBuf>) -> Result<GameSettings> {
        let Some(path) = path else {
            return Ok(GameSettings::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        GameSettings::from_json(&json).with_context(|| format!("parsing settings {}", path.display()))
    }

    fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
        let Some(path) = path else {
            return Ok(Catalog::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Catalog::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))
    }

    /// Where the bot clicks: a visible spot on the target, or on a decoy
    ///
    /// Spots are chosen so overlapping icons cannot steal the click. A target
    /// buried under earlier icons falls back to its center.
    fn choose_click(state: &GameState, bot: &mut Pcg32, accuracy: f64) -> Option<Vec2> {
        let session = state.session.as_ref()?;
        let target = session.target_instance()?;
        let on_target = session.clear_point(&session.target).unwrap_or(target.center());
        if bot.random_bool(accuracy.clamp(0.0, 1.0)) {
            return Some(on_target);
        }
        let decoys: Vec<Vec2> = session
            .instances
            .iter()
            .filter(|icon| icon.name != session.target)
            .filter_map(|icon| session.clear_point(&icon.name))
            .collect();
        if decoys.is_empty() {
            return Some(on_target);
        }
        Some(decoys[bot.random_range(0..decoys.len())])
    }

    pub fn run(args: Args) -> Result<()> {
        let settings = load_settings(args.settings.as_ref())?;
        let catalog = load_catalog(args.catalog.as_ref())?;
        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let tick_duration = Duration::from_secs_f32(settings.tick_dt());
        let screen_center = Vec2::new(settings.screen_width, settings.screen_height) / 2.0;
        let mut state = GameState::new(catalog, settings, seed).context("starting game")?;
        let mut bot = Pcg32::seed_from_u64(seed ^ 0x5eed_b07);
        log::info!("Game initialized with seed: {}", seed);

        let step = |state: &mut GameState, input: TickInput| -> Vec<GameEvent> {
            let started = Instant::now();
            let events = tick(state, &input);
            for event in &events {
                match serde_json::to_string(event) {
                    Ok(json) => log::debug!("tick {}: {}", state.time_ticks, json),
                    Err(e) => log::warn!("Could not encode event {:?}: {}", event, e),
                }
            }
            if args.realtime {
                if let Some(rest) = tick_duration.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
            events
        };

        let (mut correct, mut incorrect) = (0u32, 0u32);
        for _ in 0..args.rounds {
            step(&mut state, TickInput::click(screen_center));
            debug_assert_eq!(state.phase, GamePhase::Play);

            let watch = bot.random_range(MIN_WATCH_TICKS..=MAX_WATCH_TICKS);
            for _ in 0..watch {
                step(&mut state, TickInput::default());
            }

            let click = choose_click(&state, &mut bot, args.accuracy)
                .context("no icon to click during play")?;
            for event in step(&mut state, TickInput::click(click)) {
                if let GameEvent::IconSelected { outcome, .. } = event {
                    match outcome {
                        Outcome::Correct => correct += 1,
                        _ => incorrect += 1,
                    }
                }
            }

            // Back to the title screen
            step(&mut state, TickInput::click(screen_center));
        }

        log::info!(
            "Played {} rounds over {} ticks: {} correct, {} incorrect",
            state.rounds_played,
            state.time_ticks,
            correct,
            incorrect
        );
        println!("{correct}/{} correct", correct + incorrect);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Spot the Icon (native) starting...");
    native::run(native::Args::parse())
}
