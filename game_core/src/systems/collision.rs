use crate::{Config, Events, MatchState, Params, Side};
use proto::HitPattern;

/// Reflect the ball off the top and bottom walls
pub fn bounce_walls(state: &mut MatchState, config: &Config, events: &mut Events) {
    let ball = &mut state.ball;
    if ball.pos.y <= 0.0 || ball.pos.y >= config.canvas_height {
        // Clamp position to prevent sticking
        ball.pos.y = ball.pos.y.clamp(0.0, config.canvas_height);
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Whether the ball point lies inside a paddle's hit box
pub fn paddle_contains(state: &MatchState, side: Side, config: &Config) -> bool {
    let left = config.paddle_x(side);
    let top = match side {
        Side::Player => state.player_paddle_y,
        Side::Opponent => state.opponent_paddle_y,
    };
    let pos = state.ball.pos;

    pos.x >= left
        && pos.x <= left + config.paddle_width
        && pos.y >= top
        && pos.y <= top + config.paddle_height
}

/// Classify the player's return by where it struck the paddle
pub fn classify_hit(offset: f32) -> HitPattern {
    if offset > Params::HIT_PATTERN_THRESHOLD {
        HitPattern::Downward
    } else if offset < -Params::HIT_PATTERN_THRESHOLD {
        HitPattern::Upward
    } else {
        HitPattern::Flat
    }
}

/// Return the ball off either paddle
///
/// A paddle only registers while the ball travels toward it, so a ball still
/// inside the box on the next step is not returned twice.
pub fn check_paddle_hits(state: &mut MatchState, config: &Config, events: &mut Events) {
    let half_height = config.paddle_height / 2.0;

    for side in [Side::Player, Side::Opponent] {
        let approaching = match side {
            Side::Player => state.ball.vel.x < 0.0,
            Side::Opponent => state.ball.vel.x > 0.0,
        };
        if !approaching || !paddle_contains(state, side, config) {
            continue;
        }

        let (paddle_y, spin) = match side {
            Side::Player => (state.player_paddle_y, config.player_spin),
            Side::Opponent => (state.opponent_paddle_y, config.opponent_spin),
        };
        // Relative strike position from -1 (top) to 1 (bottom)
        let offset = (state.ball.pos.y - (paddle_y + half_height)) / half_height;

        state.ball.vel.x *= -config.ball_speed_increase;
        state.ball.vel.y += offset * spin;
        state.rally_length += 1;
        if side == Side::Player {
            state.player_hit_pattern = classify_hit(offset);
        }
        events.ball_hit_paddle = true;
    }
}

/// Keep each velocity component within the speed limit
pub fn clamp_ball_speed(state: &mut MatchState, config: &Config) {
    let max = config.ball_speed_max;
    state.ball.vel.x = state.ball.vel.x.clamp(-max, max);
    state.ball.vel.y = state.ball.vel.y.clamp(-max, max);
}
