//! Match settings chosen in the menu, plus table palettes and ball styles

use crate::{PaddleIntent, Params};
use proto::Difficulty;
use serde::{Deserialize, Deserializer};

/// Colours of one table theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub table: &'static str,
    pub line: &'static str,
    pub text: &'static str,
}

/// Named table palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableTheme {
    #[default]
    SoftForest,
    OceanCalm,
    GreyMinimal,
    WarmSand,
}

impl TableTheme {
    pub const ALL: [TableTheme; 4] = [
        TableTheme::SoftForest,
        TableTheme::OceanCalm,
        TableTheme::GreyMinimal,
        TableTheme::WarmSand,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableTheme::SoftForest => "Soft Forest",
            TableTheme::OceanCalm => "Ocean Calm",
            TableTheme::GreyMinimal => "Grey Minimal",
            TableTheme::WarmSand => "Warm Sand",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.name() == name)
    }

    pub fn palette(self) -> Palette {
        match self {
            TableTheme::SoftForest => Palette {
                background: "#0F1B16",
                table: "#193126",
                line: "#3E5A4B",
                text: "#D3E7DA",
            },
            TableTheme::OceanCalm => Palette {
                background: "#0E1A24",
                table: "#182B3A",
                line: "#34556C",
                text: "#CEE4F2",
            },
            TableTheme::GreyMinimal => Palette {
                background: "#12151A",
                table: "#202631",
                line: "#434E60",
                text: "#DCE3EE",
            },
            TableTheme::WarmSand => Palette {
                background: "#221A12",
                table: "#3A2D21",
                line: "#6A5441",
                text: "#F2DFC8",
            },
        }
    }
}

/// Cosmetic ball styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallStyle {
    #[default]
    Circle,
    SoftGlow,
    MinimalSquare,
    Dot,
}

impl BallStyle {
    pub const ALL: [BallStyle; 4] = [
        BallStyle::Circle,
        BallStyle::SoftGlow,
        BallStyle::MinimalSquare,
        BallStyle::Dot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BallStyle::Circle => "Circle",
            BallStyle::SoftGlow => "Soft glow circle",
            BallStyle::MinimalSquare => "Minimal square",
            BallStyle::Dot => "Dot style",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }
}

/// Settings consumed at match creation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchSettings {
    #[serde(deserialize_with = "score_target")]
    pub max_score: u8,
    #[serde(deserialize_with = "table_theme")]
    pub table_theme: TableTheme,
    #[serde(deserialize_with = "ball_style")]
    pub ball_style: BallStyle,
    #[serde(deserialize_with = "difficulty")]
    pub difficulty: Difficulty,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            max_score: Params::DEFAULT_SCORE_TARGET,
            table_theme: TableTheme::default(),
            ball_style: BallStyle::default(),
            difficulty: Difficulty::default(),
        }
    }
}

fn score_target<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(d)?;
    let clamped = raw.clamp(1, i64::from(Params::MAX_SCORE_TARGET));
    Ok(clamped as u8)
}

fn table_theme<'de, D: Deserializer<'de>>(d: D) -> Result<TableTheme, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(TableTheme::from_name(&raw).unwrap_or_default())
}

fn ball_style<'de, D: Deserializer<'de>>(d: D) -> Result<BallStyle, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(BallStyle::from_name(&raw).unwrap_or_default())
}

fn difficulty<'de, D: Deserializer<'de>>(d: D) -> Result<Difficulty, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(match raw.to_ascii_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    })
}

/// Immutable per-frame configuration, rebuilt from current inputs every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    pub intent: PaddleIntent,
    pub difficulty: Difficulty,
    pub theme: TableTheme,
    pub ball_style: BallStyle,
}

impl FrameConfig {
    pub fn new(settings: &MatchSettings, intent: PaddleIntent) -> Self {
        Self {
            intent,
            difficulty: settings.difficulty,
            theme: settings.table_theme,
            ball_style: settings.ball_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_from_empty_object() {
        let settings: MatchSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, MatchSettings::default());
        assert_eq!(settings.max_score, 7);
        assert_eq!(settings.table_theme, TableTheme::SoftForest);
        assert_eq!(settings.ball_style, BallStyle::Circle);
        assert_eq!(settings.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_settings_full_object() {
        let json = r#"{
            "maxScore": 11,
            "tableTheme": "Warm Sand",
            "ballStyle": "Soft glow circle",
            "difficulty": "hard"
        }"#;
        let settings: MatchSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.max_score, 11);
        assert_eq!(settings.table_theme, TableTheme::WarmSand);
        assert_eq!(settings.ball_style, BallStyle::SoftGlow);
        assert_eq!(settings.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_settings_clamp_max_score() {
        let high: MatchSettings = serde_json::from_str(r#"{"maxScore": 99}"#).unwrap();
        assert_eq!(high.max_score, 21);
        let low: MatchSettings = serde_json::from_str(r#"{"maxScore": -3}"#).unwrap();
        assert_eq!(low.max_score, 1);
    }

    #[test]
    fn test_settings_unknown_names_fall_back() {
        let json = r#"{"tableTheme": "Neon", "ballStyle": "Star", "difficulty": "insane"}"#;
        let settings: MatchSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.table_theme, TableTheme::SoftForest);
        assert_eq!(settings.ball_style, BallStyle::Circle);
        assert_eq!(settings.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_theme_names_round_trip() {
        for theme in TableTheme::ALL {
            assert_eq!(TableTheme::from_name(theme.name()), Some(theme));
        }
        for style in BallStyle::ALL {
            assert_eq!(BallStyle::from_name(style.name()), Some(style));
        }
    }

    #[test]
    fn test_ocean_palette() {
        let palette = TableTheme::OceanCalm.palette();
        assert_eq!(palette.table, "#182B3A");
        assert_eq!(palette.text, "#CEE4F2");
    }
}
