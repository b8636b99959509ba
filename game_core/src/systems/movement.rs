use crate::{Config, MatchState, PaddleIntent};
use proto::Strategy;

/// Move the player paddle from held-key intent
pub fn move_player_paddle(state: &mut MatchState, intent: PaddleIntent, config: &Config, dt: f32) {
    let delta = intent.dir as f32 * config.player_speed * dt;
    state.player_paddle_y = config.clamp_paddle_y(state.player_paddle_y + delta);
}

/// Track the ball with the opponent paddle
///
/// The paddle centre chases `ball.y`; the step never overshoots the target.
pub fn move_opponent_paddle(
    state: &mut MatchState,
    strategy: Strategy,
    reaction_boost: f32,
    config: &Config,
    dt: f32,
) {
    let center = state.opponent_paddle_y + config.paddle_height / 2.0;
    let target = state.ball.pos.y;
    let diff = target - center;
    let direction = if diff > 0.0 { 1.0 } else { -1.0 };

    let step = config.ai_base_speed * strategy.speed_bias() * reaction_boost * dt;
    let delta = direction * diff.abs().min(step);
    state.opponent_paddle_y = config.clamp_paddle_y(state.opponent_paddle_y + delta);
}

/// Integrate ball position
pub fn move_ball(state: &mut MatchState, dt: f32) {
    state.ball.pos += state.ball.vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use glam::Vec2;

    fn setup() -> (MatchState, Config) {
        let config = Config::new();
        let state = MatchState::new(7, &config, &mut GameRng::new(3));
        (state, config)
    }

    #[test]
    fn test_player_paddle_moves_down() {
        let (mut state, config) = setup();
        let start = state.player_paddle_y;
        move_player_paddle(&mut state, PaddleIntent { dir: 1 }, &config, 0.01);
        assert!((state.player_paddle_y - (start + 3.6)).abs() < 1e-4);
    }

    #[test]
    fn test_player_paddle_clamped_at_top() {
        let (mut state, config) = setup();
        state.player_paddle_y = 2.0;
        move_player_paddle(&mut state, PaddleIntent { dir: -1 }, &config, 0.032);
        assert_eq!(state.player_paddle_y, 0.0);
    }

    #[test]
    fn test_player_paddle_clamped_at_bottom() {
        let (mut state, config) = setup();
        state.player_paddle_y = config.max_paddle_y() - 1.0;
        move_player_paddle(&mut state, PaddleIntent { dir: 1 }, &config, 0.032);
        assert_eq!(state.player_paddle_y, config.max_paddle_y());
    }

    #[test]
    fn test_opponent_does_not_overshoot() {
        let (mut state, config) = setup();
        // Paddle centre at 260, ball 2 units below
        state.opponent_paddle_y = 214.0;
        state.ball.pos = Vec2::new(600.0, 262.0);

        move_opponent_paddle(&mut state, Strategy::Aggressive, 1.6, &config, 0.032);

        let center = state.opponent_paddle_y + config.paddle_height / 2.0;
        assert!((center - 262.0).abs() < 1e-4, "centre should land on target");
    }

    #[test]
    fn test_opponent_step_scales_with_strategy() {
        let (mut state, config) = setup();
        state.ball.pos = Vec2::new(600.0, 0.0);

        state.opponent_paddle_y = 300.0;
        move_opponent_paddle(&mut state, Strategy::Balanced, 1.0, &config, 0.01);
        let balanced = 300.0 - state.opponent_paddle_y;

        state.opponent_paddle_y = 300.0;
        move_opponent_paddle(&mut state, Strategy::Defensive, 1.0, &config, 0.01);
        let defensive = 300.0 - state.opponent_paddle_y;

        state.opponent_paddle_y = 300.0;
        move_opponent_paddle(&mut state, Strategy::Aggressive, 1.0, &config, 0.01);
        let aggressive = 300.0 - state.opponent_paddle_y;

        assert!((balanced - 3.0).abs() < 1e-4);
        assert!((defensive - 2.7).abs() < 1e-4);
        assert!((aggressive - 3.36).abs() < 1e-4);
    }

    #[test]
    fn test_opponent_paddle_stays_in_range() {
        let (mut state, config) = setup();
        state.ball.pos = Vec2::new(600.0, config.canvas_height);
        for _ in 0..200 {
            move_opponent_paddle(&mut state, Strategy::Aggressive, 1.6, &config, 0.032);
            assert!(state.opponent_paddle_y >= 0.0);
            assert!(state.opponent_paddle_y <= config.max_paddle_y());
        }
        assert_eq!(state.opponent_paddle_y, config.max_paddle_y());
    }

    #[test]
    fn test_move_ball() {
        let (mut state, _config) = setup();
        state.ball.pos = Vec2::new(100.0, 100.0);
        state.ball.vel = Vec2::new(400.0, -50.0);
        move_ball(&mut state, 0.01);
        assert!((state.ball.pos.x - 104.0).abs() < 1e-4);
        assert!((state.ball.pos.y - 99.5).abs() < 1e-4);
    }
}
