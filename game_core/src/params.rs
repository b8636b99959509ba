/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (logical units)
    pub const CANVAS_WIDTH: f32 = 880.0;
    pub const CANVAS_HEIGHT: f32 = 520.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 92.0;
    pub const PADDLE_MARGIN: f32 = 22.0;
    pub const PLAYER_SPEED: f32 = 360.0; // units per second
    pub const AI_BASE_SPEED: f32 = 300.0;

    // Ball
    pub const BALL_SIZE: f32 = 14.0; // render only, collision treats the ball as a point
    pub const BALL_SPEED_BASE: f32 = 400.0;
    pub const BALL_SPEED_MAX: f32 = 620.0; // per component
    pub const BALL_SPEED_INCREASE: f32 = 1.03; // Multiply vx on paddle hit
    pub const SERVE_SPREAD: f32 = 0.25; // vy in [-spread, spread] * base speed

    // Returns
    pub const PLAYER_SPIN: f32 = 120.0;
    pub const OPPONENT_SPIN: f32 = 110.0;
    pub const HIT_PATTERN_THRESHOLD: f32 = 0.2;

    // Opponent reaction bounds after difficulty tuning
    pub const MIN_TUNED_BOOST: f32 = 0.4;
    pub const MAX_TUNED_BOOST: f32 = 1.6;

    // Score
    pub const DEFAULT_SCORE_TARGET: u8 = 7;
    pub const MAX_SCORE_TARGET: u8 = 21;

    // Physics
    pub const MAX_DT: f32 = 0.032; // Cap to bound integration error on frame hitches
}
