//! Mutable snapshot of one match

use crate::{Ball, Config, GameRng, Side};
use glam::Vec2;
use proto::HitPattern;
use serde::Serialize;

/// Full state of one Pong match
///
/// Owned by the frame driver and passed by reference into every step.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub running: bool,
    pub winner: Option<Side>,
    pub score_target: u8,
    pub player_score: u8,
    pub opponent_score: u8,
    pub rally_length: u32,
    pub player_hit_pattern: HitPattern,
    pub player_paddle_y: f32,
    pub opponent_paddle_y: f32,
    pub ball: Ball,
}

impl MatchState {
    /// Fresh match with centred paddles and an opening serve in a random direction
    pub fn new(score_target: u8, config: &Config, rng: &mut GameRng) -> Self {
        use rand::Rng;
        let receiver = if rng.0.gen_bool(0.5) {
            Side::Opponent
        } else {
            Side::Player
        };
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(receiver, config, rng);

        Self {
            running: true,
            winner: None,
            score_target: score_target.max(1),
            player_score: 0,
            opponent_score: 0,
            rally_length: 0,
            player_hit_pattern: HitPattern::Mixed,
            player_paddle_y: config.centered_paddle_y(),
            opponent_paddle_y: config.centered_paddle_y(),
            ball,
        }
    }

    /// Award a point; scores only ever grow by one
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player_score = self.player_score.saturating_add(1),
            Side::Opponent => self.opponent_score = self.opponent_score.saturating_add(1),
        }
    }

    /// Side that reached the target, player checked first
    pub fn has_winner(&self) -> Option<Side> {
        if self.player_score >= self.score_target {
            Some(Side::Player)
        } else if self.opponent_score >= self.score_target {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Stop the match; `running` and `winner` always change together
    pub fn finish(&mut self, winner: Side) {
        self.running = false;
        self.winner = Some(winner);
    }

    /// Final result, available once the match has stopped
    pub fn result(&self) -> Option<MatchResult> {
        self.winner.map(|winner| MatchResult {
            winner,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
        })
    }
}

/// Payload of the match-finished event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub winner: Side,
    pub player_score: u8,
    pub opponent_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_defaults() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let state = MatchState::new(7, &config, &mut rng);

        assert!(state.running);
        assert_eq!(state.winner, None);
        assert_eq!(state.score_target, 7);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.opponent_score, 0);
        assert_eq!(state.rally_length, 0);
        assert_eq!(state.player_hit_pattern, HitPattern::Mixed);
        assert_eq!(state.player_paddle_y, 214.0);
        assert_eq!(state.opponent_paddle_y, 214.0);
        assert_eq!(state.ball.pos, Vec2::new(440.0, 260.0));
        assert_eq!(state.ball.vel.x.abs(), config.ball_speed_base);
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_zero_target_is_raised_to_one() {
        let config = Config::new();
        let state = MatchState::new(0, &config, &mut GameRng::default());
        assert_eq!(state.score_target, 1);
    }

    #[test]
    fn test_has_winner() {
        let config = Config::new();
        let mut state = MatchState::new(3, &config, &mut GameRng::default());
        for _ in 0..2 {
            state.award_point(Side::Opponent);
        }
        assert_eq!(state.has_winner(), None, "No winner below threshold");
        state.award_point(Side::Opponent);
        assert_eq!(state.has_winner(), Some(Side::Opponent));
    }

    #[test]
    fn test_finish_sets_result() {
        let config = Config::new();
        let mut state = MatchState::new(1, &config, &mut GameRng::default());
        state.award_point(Side::Player);
        state.finish(Side::Player);

        assert!(!state.running);
        assert_eq!(
            state.result(),
            Some(MatchResult {
                winner: Side::Player,
                player_score: 1,
                opponent_score: 0,
            })
        );
    }
}
