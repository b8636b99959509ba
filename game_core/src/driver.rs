//! Per-frame driver
//!
//! Called once per display refresh. Owns frame timing and the pause toggle;
//! the match itself is passed in by the caller.

use crate::{
    render, step_match, AiDirective, Config, Events, FrameConfig, GameRng, MatchResult, MatchState,
    Params, Surface,
};

/// Outcome of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule another frame
    Continue,
    /// The match ended on this frame; reported once
    Finished(MatchResult),
    /// The match ended on an earlier frame
    Stopped,
}

#[derive(Debug, Default)]
pub struct FrameDriver {
    last_ms: Option<f64>,
    paused: bool,
    finished: bool,
    events: Events,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip pause; returns the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Events raised by the most recent physics step
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Seconds since the previous frame, capped; zero on the first frame
    fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, Params::MAX_DT as f64) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Run one frame: physics (unless paused or finished), then render
    #[allow(clippy::too_many_arguments)]
    pub fn frame(
        &mut self,
        now_ms: f64,
        state: &mut MatchState,
        frame: &FrameConfig,
        directive: &AiDirective,
        config: &Config,
        rng: &mut GameRng,
        surface: &mut dyn Surface,
    ) -> FrameStatus {
        let dt = self.delta(now_ms);

        if !self.paused && state.running {
            step_match(
                state,
                frame.intent,
                directive,
                frame.difficulty,
                config,
                &mut self.events,
                rng,
                dt,
            );
        } else {
            self.events.clear();
        }

        render(state, frame, config, surface);

        if state.running {
            return FrameStatus::Continue;
        }
        if self.finished {
            return FrameStatus::Stopped;
        }
        self.finished = true;
        match state.result() {
            Some(result) => FrameStatus::Finished(result),
            None => FrameStatus::Stopped,
        }
    }
}
