use crate::{Config, GameRng};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,   // left
    Opponent, // right
}

impl Side {
    /// Horizontal direction a ball travels when heading toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// The pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Place the ball at the centre and launch it toward `receiver`
    pub fn serve(&mut self, receiver: Side, config: &Config, rng: &mut GameRng) {
        self.pos = config.center();
        let spread = config.serve_spread;
        self.vel = Vec2::new(
            config.ball_speed_base * receiver.direction(),
            config.ball_speed_base * rng.0.gen_range(-spread..=spread),
        );
    }

    /// Speed magnitude
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Held-key movement for the player paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both keys held cancel out
    pub fn from_keys(up: bool, down: bool) -> Self {
        Self {
            dir: i8::from(down) - i8::from(up),
        }
    }
}
