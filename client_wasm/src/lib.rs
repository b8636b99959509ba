//! Browser client for AI Pong Arena
//!
//! Canvas 2D rendering driven by requestAnimationFrame, keyboard input fed
//! from the host page, and a background poller for opponent directives.
//! Note: everything here is only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into())
    };
}

macro_rules! console_warn {
    ($($t:tt)*) => {
        web_sys::console::warn_1(&format!($($t)*).into())
    };
}

mod network;
mod renderer;

use game_core::*;
use renderer::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Live match bound to one canvas
struct Client {
    state: Rc<RefCell<MatchState>>,
    driver: FrameDriver,
    keys: KeyState,
    rng: GameRng,
    config: Config,
    settings: MatchSettings,
    surface: CanvasSurface,
    directive: DirectiveCell,
    on_finish: Option<js_sys::Function>,
    stop: StopSignal,
    frame_handle: Option<i32>,
}

impl Client {
    fn new(
        canvas: &HtmlCanvasElement,
        settings: MatchSettings,
        on_finish: Option<js_sys::Function>,
    ) -> Result<Self, JsValue> {
        let config = Config::new();
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);
        let background = settings.table_theme.palette().background;
        if let Err(err) = canvas.style().set_property("background", background) {
            console_warn!("Failed to set canvas background: {:?}", err);
        }

        let mut rng = GameRng::new(random_seed()?);
        let state = MatchState::new(settings.max_score, &config, &mut rng);

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            driver: FrameDriver::new(),
            keys: KeyState::new(),
            rng,
            config,
            settings,
            surface: CanvasSurface::new(canvas)?,
            directive: DirectiveCell::default(),
            on_finish,
            stop: StopSignal::new(),
            frame_handle: None,
        })
    }

    /// Run one animation frame
    fn frame(&mut self, now: f64) -> FrameStatus {
        self.frame_handle = None;
        // Fresh snapshot of the current inputs every frame
        let frame = FrameConfig::new(&self.settings, self.keys.intent());
        let directive = self.directive.load();
        let status = self.driver.frame(
            now,
            &mut self.state.borrow_mut(),
            &frame,
            &directive,
            &self.config,
            &mut self.rng,
            &mut self.surface,
        );

        let events = self.driver.events();
        if events.any_score() {
            let state = self.state.borrow();
            console_log!(
                "Score: player {} - {} AI (rally reset)",
                state.player_score,
                state.opponent_score
            );
        }
        status
    }

    /// Tear down the poller; hands back the finish callback, if any
    fn finish(&mut self, result: MatchResult) -> Option<js_sys::Function> {
        console_log!(
            "Match finished: {:?} wins {}-{}",
            result.winner,
            result.player_score,
            result.opponent_score
        );
        self.stop.stop();
        self.on_finish.take()
    }

    fn shutdown(&mut self) {
        self.stop.stop();
        if let (Some(handle), Some(window)) = (self.frame_handle.take(), web_sys::window()) {
            if let Err(err) = window.cancel_animation_frame(handle) {
                console_warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Rc<RefCell<Client>>>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Result<R, JsValue> {
    CLIENT.with(|slot| match slot.borrow().as_ref() {
        Some(client) => Ok(f(&mut client.borrow_mut())),
        None => Err(JsValue::from_str("Match not started")),
    })
}

fn random_seed() -> Result<u64, JsValue> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf)
        .map_err(|e| JsValue::from_str(&format!("Failed to seed rng: {}", e)))?;
    Ok(u64::from_le_bytes(buf))
}

fn schedule_frame(client: Rc<RefCell<Client>>) {
    let Some(window) = web_sys::window() else {
        console_warn!("No window, frame loop halted");
        return;
    };
    let next = client.clone();
    let callback = Closure::once_into_js(move |now: f64| run_frame(next, now));
    match window.request_animation_frame(callback.unchecked_ref()) {
        Ok(handle) => client.borrow_mut().frame_handle = Some(handle),
        Err(err) => console_warn!("requestAnimationFrame failed: {:?}", err),
    }
}

fn notify_finished(callback: &js_sys::Function, result: &MatchResult) {
    match serde_wasm_bindgen::to_value(result) {
        Ok(value) => {
            if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                console_warn!("on_finish callback failed: {:?}", err);
            }
        }
        Err(err) => console_warn!("Failed to serialize match result: {}", err),
    }
}

fn run_frame(client: Rc<RefCell<Client>>, now: f64) {
    let status = {
        let mut c = client.borrow_mut();
        if c.stop.is_stopped() {
            return;
        }
        c.frame(now)
    };

    match status {
        FrameStatus::Continue => schedule_frame(client),
        FrameStatus::Finished(result) => {
            // Released before calling out, the callback may call back in
            let callback = client.borrow_mut().finish(result);
            if let Some(callback) = callback {
                notify_finished(&callback, &result);
            }
        }
        FrameStatus::Stopped => {}
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Start a match on `canvas`, replacing any match already running
///
/// `settings` is `{ maxScore, tableTheme, ballStyle, difficulty }`; missing
/// fields take their defaults. `on_finish` receives
/// `{ winner, playerScore, opponentScore }` once.
#[wasm_bindgen]
pub fn start_match(
    canvas: HtmlCanvasElement,
    settings: JsValue,
    on_finish: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    stop_match();

    let settings: MatchSettings = if settings.is_undefined() || settings.is_null() {
        MatchSettings::default()
    } else {
        serde_wasm_bindgen::from_value(settings)?
    };

    let client = Client::new(&canvas, settings, on_finish)?;
    network::spawn_poller(
        client.state.clone(),
        settings.difficulty,
        client.directive.clone(),
        client.stop.clone(),
    );

    let client = Rc::new(RefCell::new(client));
    CLIENT.with(|slot| *slot.borrow_mut() = Some(client.clone()));
    schedule_frame(client);

    console_log!(
        "Match started: first to {}, {:?}, {}",
        settings.max_score,
        settings.difficulty,
        settings.table_theme.name()
    );
    Ok(())
}

/// Tear down the current match: cancel the frame loop and the poller
#[wasm_bindgen]
pub fn stop_match() {
    if let Some(client) = CLIENT.with(|slot| slot.borrow_mut().take()) {
        client.borrow_mut().shutdown();
        console_log!("Match stopped");
    }
}

#[wasm_bindgen]
pub fn toggle_pause() -> Result<bool, JsValue> {
    with_client(|c| c.driver.toggle_pause())
}

#[wasm_bindgen]
pub fn is_paused() -> bool {
    with_client(|c| c.driver.is_paused()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<(), JsValue> {
    with_client(|c| {
        if c.keys.key_down(key) == KeyAction::TogglePause {
            c.driver.toggle_pause();
        }
    })
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<(), JsValue> {
    with_client(|c| c.keys.key_up(key))
}

/// Latest opponent commentary for the scoreboard
#[wasm_bindgen]
pub fn commentary() -> Result<String, JsValue> {
    with_client(|c| c.directive.load().commentary)
}

/// `[player, opponent]` scores
#[wasm_bindgen]
pub fn scores() -> Result<Vec<u8>, JsValue> {
    with_client(|c| {
        let state = c.state.borrow();
        vec![state.player_score, state.opponent_score]
    })
}
