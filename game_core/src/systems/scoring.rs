use crate::{Config, Events, GameRng, MatchState, Side};

/// Check if ball left the table (scoring)
///
/// The scorer gets a point and the ball is served toward the side that conceded.
pub fn check_scoring(
    state: &mut MatchState,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let scorer = if state.ball.pos.x < 0.0 {
        events.opponent_scored = true;
        Side::Opponent
    } else if state.ball.pos.x > config.canvas_width {
        events.player_scored = true;
        Side::Player
    } else {
        return;
    };

    state.award_point(scorer);
    state.ball.serve(scorer.other(), config, rng);
    state.rally_length = 0;
}

/// Stop the match once a side reaches the score target
pub fn check_winner(state: &mut MatchState, events: &mut Events) {
    if !state.running {
        return;
    }
    if let Some(winner) = state.has_winner() {
        state.finish(winner);
        events.match_finished = true;
    }
}
