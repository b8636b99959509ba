//! Opponent directive received from the strategy service
//!
//! The poll loop itself is platform specific; this module holds the parts
//! that are not: the request snapshot, the fallback policy and the
//! single-slot cell the frame driver reads from.

use crate::{MatchState, Params};
use proto::{Difficulty, Strategy, StrategyRequest, StrategyResponse};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Delay between two polls
pub const POLL_INTERVAL_MS: u32 = 4000;
/// A request still pending after this long is aborted
pub const REQUEST_TIMEOUT_MS: u32 = 2600;
/// Commentary shown when a poll fails
pub const FALLBACK_COMMENTARY: &str = "AI sync delayed. Playing steady.";
/// Commentary of the default directive
pub const OPENING_COMMENTARY: &str = "Match loaded.";

/// Why a poll produced no directive
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DirectiveError {
    #[error("strategy request timed out")]
    Timeout,
    #[error("strategy service answered with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed strategy response: {0}")]
    Decode(String),
    #[error("invalid strategy response: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for DirectiveError {
    fn from(err: serde_json::Error) -> Self {
        DirectiveError::Decode(err.to_string())
    }
}

/// Latest known opponent behaviour
#[derive(Debug, Clone, PartialEq)]
pub struct AiDirective {
    pub strategy: Strategy,
    pub reaction_boost: f32,
    pub commentary: String,
}

impl Default for AiDirective {
    fn default() -> Self {
        Self {
            strategy: Strategy::Balanced,
            reaction_boost: 1.0,
            commentary: OPENING_COMMENTARY.to_string(),
        }
    }
}

impl TryFrom<StrategyResponse> for AiDirective {
    type Error = DirectiveError;

    fn try_from(resp: StrategyResponse) -> Result<Self, Self::Error> {
        if !resp.reaction_boost.is_finite() || resp.reaction_boost <= 0.0 {
            return Err(DirectiveError::InvalidResponse(format!(
                "reaction_boost must be positive, got {}",
                resp.reaction_boost
            )));
        }
        Ok(Self {
            strategy: resp.strategy,
            reaction_boost: resp.reaction_boost,
            commentary: resp.commentary,
        })
    }
}

impl AiDirective {
    /// Reaction multiplier actually applied to the opponent paddle
    pub fn tuned_boost(&self, difficulty: Difficulty) -> f32 {
        (self.reaction_boost * difficulty.ai_multiplier())
            .clamp(Params::MIN_TUNED_BOOST, Params::MAX_TUNED_BOOST)
    }

    /// Directive after a failed poll: same behaviour, fallback commentary
    pub fn degraded(&self) -> Self {
        Self {
            commentary: FALLBACK_COMMENTARY.to_string(),
            ..self.clone()
        }
    }
}

/// Feature snapshot sent with each poll
pub fn strategy_request(state: &MatchState, difficulty: Difficulty) -> StrategyRequest {
    StrategyRequest {
        player_score: state.player_score,
        ai_score: state.opponent_score,
        rally_length: state.rally_length,
        player_hit_pattern: state.player_hit_pattern,
        ball_speed: state.ball.speed(),
        difficulty,
    }
}

/// Final outcome of a request, given whether its abort timer fired
///
/// Any failure after the timer fired is reported as a timeout, whatever the
/// transport said about the aborted request.
pub fn classify_outcome(
    result: Result<StrategyResponse, DirectiveError>,
    timed_out: bool,
) -> Result<StrategyResponse, DirectiveError> {
    match result {
        Err(_) if timed_out => Err(DirectiveError::Timeout),
        other => other,
    }
}

/// Single-slot, last-write-wins directive cell
///
/// Values are replaced whole; readers get a copy, never a reference.
#[derive(Debug, Clone, Default)]
pub struct DirectiveCell(Rc<RefCell<AiDirective>>);

impl DirectiveCell {
    pub fn new(directive: AiDirective) -> Self {
        Self(Rc::new(RefCell::new(directive)))
    }

    pub fn load(&self) -> AiDirective {
        self.0.borrow().clone()
    }

    pub fn store(&self, directive: AiDirective) {
        *self.0.borrow_mut() = directive;
    }

    /// Fold one poll outcome into the cell
    ///
    /// Returns the error, if any, so the caller can log it.
    pub fn apply_poll(
        &self,
        outcome: Result<StrategyResponse, DirectiveError>,
    ) -> Result<(), DirectiveError> {
        match outcome.and_then(AiDirective::try_from) {
            Ok(directive) => {
                self.store(directive);
                Ok(())
            }
            Err(err) => {
                let degraded = self.load().degraded();
                self.store(degraded);
                Err(err)
            }
        }
    }

    /// Like `apply_poll`, but an outcome landing after `stop` is dropped
    ///
    /// Returns `None` when the outcome was discarded.
    pub fn apply_poll_unless_stopped(
        &self,
        stop: &StopSignal,
        outcome: Result<StrategyResponse, DirectiveError>,
    ) -> Option<Result<(), DirectiveError>> {
        if stop.is_stopped() {
            return None;
        }
        Some(self.apply_poll(outcome))
    }
}

/// Cancellation flag shared between a periodic task and its owner
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}
