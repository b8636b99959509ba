use crate::{Params, Side};
use glam::Vec2;

/// Table geometry and physics tuning
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub player_speed: f32,
    pub ai_base_speed: f32,
    pub ball_size: f32,
    pub ball_speed_base: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub serve_spread: f32,
    pub player_spin: f32,
    pub opponent_spin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            player_speed: Params::PLAYER_SPEED,
            ai_base_speed: Params::AI_BASE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            serve_spread: Params::SERVE_SPREAD,
            player_spin: Params::PLAYER_SPIN,
            opponent_spin: Params::OPPONENT_SPIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of a paddle's hit box
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.canvas_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Largest valid paddle Y (paddle Y is its top edge)
    pub fn max_paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_height
    }

    /// Clamp paddle Y to table bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle Y that centres a paddle vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.canvas_height / 2.0 - self.paddle_height / 2.0
    }

    /// Centre of the table, where every serve starts
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}
