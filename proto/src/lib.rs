//! Wire protocol for the strategy service
//!
//! Uses serde_json; the service speaks JSON over `POST /ai-move`

use serde::{Deserialize, Serialize};
use serde_json::{from_str, to_string};

/// Path of the strategy endpoint
pub const AI_MOVE_PATH: &str = "/ai-move";

// ============================================================================
// Shared vocabulary
// ============================================================================

/// Opponent play style chosen by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Balanced,
    Aggressive,
    Defensive,
}

impl Strategy {
    /// Speed bias applied to the opponent paddle
    pub fn speed_bias(self) -> f32 {
        match self {
            Strategy::Aggressive => 1.12,
            Strategy::Defensive => 0.9,
            Strategy::Balanced => 1.0,
        }
    }
}

/// Vertical character of the player's latest return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitPattern {
    #[default]
    Mixed,
    Downward,
    Upward,
    Flat,
}

/// Difficulty selected in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Opponent speed multiplier for this difficulty
    pub fn ai_multiplier(self) -> f32 {
        match self {
            Difficulty::Easy => 0.55,
            Difficulty::Medium => 0.8,
            Difficulty::Hard => 1.0,
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Feature snapshot posted to the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub player_score: u8,
    pub ai_score: u8,
    pub rally_length: u32,
    pub player_hit_pattern: HitPattern,
    pub ball_speed: f32,
    pub difficulty: Difficulty,
}

/// Directive returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResponse {
    pub strategy: Strategy,
    pub reaction_boost: f32,
    pub commentary: String,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl StrategyRequest {
    /// Serialize request body to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        to_string(self)
    }
}

impl StrategyResponse {
    /// Deserialize response body from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        from_str(text)
    }
}
