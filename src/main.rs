//! Pixie entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use glam::IVec2;
    use pixie::consts::*;
    use pixie::driver;
    use pixie::platform::{Direction, Host, Signal};
    use pixie::sim::{GameState, Rgb, tick};
    use pixie::tuning::Tuning;

    /// Keyboard state written by the listeners, polled by the host
    #[derive(Default)]
    struct InputState {
        /// right, left, up, down
        held: [bool; 4],
        quit: bool,
        advance: bool,
    }

    /// Canvas2D drawing surface plus listener-backed input polling
    struct CanvasHost {
        ctx: CanvasRenderingContext2d,
        screen: IVec2,
        input: Rc<RefCell<InputState>>,
    }

    fn dir_index(dir: Direction) -> usize {
        match dir {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    impl Host for CanvasHost {
        type DrawError = JsValue;

        fn screen_size(&self) -> IVec2 {
            self.screen
        }

        fn key_held(&self, dir: Direction) -> bool {
            self.input.borrow().held[dir_index(dir)]
        }

        fn signal_pressed(&mut self, signal: Signal) -> bool {
            let mut input = self.input.borrow_mut();
            match signal {
                Signal::Quit => std::mem::take(&mut input.quit),
                Signal::Advance => std::mem::take(&mut input.advance),
            }
        }

        fn draw_block(
            &mut self,
            x: i32,
            y: i32,
            w: i32,
            h: i32,
            color: Rgb,
        ) -> Result<(), JsValue> {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
            Ok(())
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb) -> Result<(), JsValue> {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill_text(text, x as f64, y as f64)
        }
    }

    /// Game instance driven by requestAnimationFrame
    struct Game {
        state: GameState,
        host: CanvasHost,
        accumulator: f32,
        last_time: f64,
        running: bool,
    }

    impl Game {
        /// One animation frame: fixed-timestep sim substeps, then one render
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            self.last_time = time;

            if self.host.signal_pressed(Signal::Quit) {
                // No process to exit in a browser tab; stop scheduling frames.
                log::info!("quit signal, stopping the frame loop");
                self.running = false;
                return;
            }

            self.accumulator += dt.min(0.1);
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = driver::sample_input(&mut self.host);
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            if let Err(e) = driver::render(&self.state, &mut self.host) {
                log::error!("render failed, stopping: {e:?}");
                self.running = false;
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("pixie starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title("pixie");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = canvas.client_width().max(1);
        let height = canvas.client_height().max(1);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("no 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        ctx.set_font("13px monospace");

        let input = Rc::new(RefCell::new(InputState::default()));
        setup_input_handlers(input.clone());

        let seed = js_sys::Date::now() as u64;
        let host = CanvasHost {
            ctx,
            screen: IVec2::new(width, height),
            input,
        };
        let state = GameState::new(seed, host.screen_size(), Tuning::load());
        log::info!("game initialized with seed {seed} on a {width}x{height} canvas");

        let game = Rc::new(RefCell::new(Game {
            state,
            host,
            accumulator: 0.0,
            last_time: 0.0,
            running: true,
        }));
        request_animation_frame(game);
    }

    fn setup_input_handlers(input: Rc<RefCell<InputState>>) {
        let window = web_sys::window().unwrap();

        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut input = input.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" => input.held[0] = true,
                    "ArrowLeft" => input.held[1] = true,
                    "ArrowUp" => input.held[2] = true,
                    "ArrowDown" => input.held[3] = true,
                    " " | "Enter" => input.advance = true,
                    "q" | "Q" | "Escape" => input.quit = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut input = input.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" => input.held[0] = false,
                    "ArrowLeft" => input.held[1] = false,
                    "ArrowUp" => input.held[2] = false,
                    "ArrowDown" => input.held[3] = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
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
        let running = {
            let mut g = game.borrow_mut();
            g.frame(time);
            g.running
        };
        if running {
            request_animation_frame(game);
        } else {
            log::info!("pixie stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pixie::driver::{self, FrameOutcome};
    use pixie::platform::{Direction, HeadlessHost, Host, Signal};
    use pixie::sim::GameState;
    use pixie::tuning::Tuning;

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("pixie (native) starting with seed {seed}");
    log::info!("no windowed host is wired up; running a headless demo");

    let mut host = HeadlessHost::new(640, 480);
    let mut state = GameState::new(seed, host.screen_size(), Tuning::load());

    // Sweep the pixie diagonally for a minute of simulated time, bouncing
    // between corners, then quit.
    host.set_held(Direction::Right, true);
    host.set_held(Direction::Down, true);
    for i in 0..3600u32 {
        if i % 240 == 0 && i > 0 {
            let rightward = host.key_held(Direction::Right);
            host.set_held(Direction::Right, !rightward);
            host.set_held(Direction::Left, rightward);
            let downward = host.key_held(Direction::Down);
            host.set_held(Direction::Down, !downward);
            host.set_held(Direction::Up, downward);
        }
        match driver::frame(&mut state, &mut host) {
            Ok(FrameOutcome::Continue) => host.draw_log.clear(),
            Ok(FrameOutcome::Quit) => break,
            Err(e) => match e {},
        }
    }

    host.press(Signal::Quit);
    let _ = driver::frame(&mut state, &mut host);

    println!(
        "demo over: level {}, {} dust collected, {} left after {} ticks",
        state.level, state.dust_collected, state.dust_remaining, state.ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
