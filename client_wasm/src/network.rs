//! Strategy service polling
//!
//! Runs as its own local task and only ever writes the directive cell.

use game_core::{
    classify_outcome, strategy_request, DirectiveCell, DirectiveError, MatchState, StopSignal,
    POLL_INTERVAL_MS, REQUEST_TIMEOUT_MS,
};
use proto::{Difficulty, StrategyRequest, StrategyResponse, AI_MOVE_PATH};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Headers, Request, RequestInit, Response, Window};

fn js_err(err: JsValue) -> DirectiveError {
    DirectiveError::Network(format!("{:?}", err))
}

/// Resolve after `ms` milliseconds
async fn sleep(ms: u32) -> Result<(), JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let scheduled = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
            });
        if let Err(err) = scheduled {
            if let Err(err) = reject.call1(&JsValue::NULL, &err) {
                console_warn!("Timer rejection failed: {:?}", err);
            }
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

async fn send(
    window: &Window,
    body: &str,
    signal: &AbortSignal,
) -> Result<StrategyResponse, DirectiveError> {
    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    init.set_signal(Some(signal));

    let request = Request::new_with_str_and_init(AI_MOVE_PATH, &init).map_err(js_err)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if !response.ok() {
        return Err(DirectiveError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| DirectiveError::Decode("response body is not text".to_string()))?;

    Ok(StrategyResponse::from_json(&text)?)
}

/// POST one feature snapshot, aborting after the request timeout
pub async fn fetch_strategy(req: &StrategyRequest) -> Result<StrategyResponse, DirectiveError> {
    let body = req.to_json()?;
    let window =
        web_sys::window().ok_or_else(|| DirectiveError::Network("no window".to_string()))?;
    let controller = AbortController::new().map_err(js_err)?;

    let timed_out = Rc::new(Cell::new(false));
    let on_timeout = {
        let controller = controller.clone();
        let timed_out = timed_out.clone();
        Closure::once(move || {
            timed_out.set(true);
            controller.abort();
        })
    };
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.as_ref().unchecked_ref(),
            REQUEST_TIMEOUT_MS as i32,
        )
        .map_err(js_err)?;

    let result = send(&window, &body, &controller.signal()).await;
    window.clear_timeout_with_handle(timer);
    drop(on_timeout);

    classify_outcome(result, timed_out.get())
}

/// Start the periodic directive refresh
///
/// Polls immediately, then every `POLL_INTERVAL_MS`, until `stop` fires.
/// A response that lands after the stop signal is dropped.
pub fn spawn_poller(
    state: Rc<RefCell<MatchState>>,
    difficulty: Difficulty,
    cell: DirectiveCell,
    stop: StopSignal,
) {
    wasm_bindgen_futures::spawn_local(async move {
        while !stop.is_stopped() {
            let request = strategy_request(&state.borrow(), difficulty);
            let outcome = fetch_strategy(&request).await;

            match cell.apply_poll_unless_stopped(&stop, outcome) {
                None => break,
                Some(Ok(())) => {
                    let directive = cell.load();
                    console_log!(
                        "AI directive: {:?} x{:.2} \"{}\"",
                        directive.strategy,
                        directive.reaction_boost,
                        directive.commentary
                    );
                }
                Some(Err(err)) => console_warn!("AI directive unavailable: {}", err),
            }

            if let Err(err) = sleep(POLL_INTERVAL_MS).await {
                console_warn!("AI poller timer failed: {:?}", err);
                break;
            }
        }
        console_log!("AI poller stopped");
    });
}
