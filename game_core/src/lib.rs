pub mod components;
pub mod config;
pub mod directive;
pub mod driver;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod settings;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use directive::*;
pub use driver::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use settings::*;
pub use state::*;

use proto::Difficulty;
use systems::*;

/// Advance one match by `dt` seconds
///
/// No-op once the match has finished.
#[allow(clippy::too_many_arguments)]
pub fn step_match(
    state: &mut MatchState,
    intent: PaddleIntent,
    directive: &AiDirective,
    difficulty: Difficulty,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
    dt: f32,
) {
    // Clear events at start of step
    events.clear();

    if !state.running {
        return;
    }

    // Clamp dt to bound integration error on hitches
    let dt = dt.clamp(0.0, Params::MAX_DT);

    // 1. Player paddle from held keys
    move_player_paddle(state, intent, config, dt);

    // 2. Opponent paddle tracks the ball
    move_opponent_paddle(
        state,
        directive.strategy,
        directive.tuned_boost(difficulty),
        config,
        dt,
    );

    // 3. Ball: integrate, then walls before paddles
    move_ball(state, dt);
    bounce_walls(state, config, events);
    check_paddle_hits(state, config, events);
    clamp_ball_speed(state, config);

    // 4. Scoring (ball exited the table), then the win check
    check_scoring(state, config, events, rng);
    check_winner(state, events);
}
