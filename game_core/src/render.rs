//! Render step
//!
//! Draws a `MatchState` onto any 2D `Surface`. Drawing never mutates the match.

use crate::{BallStyle, Config, FrameConfig, MatchState, Side};

/// Minimal 2D drawing surface
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn dashed_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        dash: [f32; 2],
        width: f32,
        color: &str,
    );
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    /// Radial gradient from `color` at `inner` to transparent at `outer`
    fn fill_glow(&mut self, x: f32, y: f32, inner: f32, outer: f32, color: &str);
}

const DIVIDER_DASH: [f32; 2] = [8.0, 10.0];
const DIVIDER_WIDTH: f32 = 3.0;

const DOT_RADIUS: f32 = 4.0;
const SQUARE_SIZE: f32 = 12.0;
const GLOW_INNER: f32 = 1.0;
const GLOW_OUTER: f32 = 11.0;

/// Paint one frame
pub fn render(
    state: &MatchState,
    frame: &FrameConfig,
    config: &Config,
    surface: &mut dyn Surface,
) {
    let palette = frame.theme.palette();
    let (w, h) = (config.canvas_width, config.canvas_height);

    surface.clear(w, h);
    surface.fill_rect(0.0, 0.0, w, h, palette.table);
    surface.dashed_line(
        (w / 2.0, 0.0),
        (w / 2.0, h),
        DIVIDER_DASH,
        DIVIDER_WIDTH,
        palette.line,
    );

    for (side, y) in [
        (Side::Player, state.player_paddle_y),
        (Side::Opponent, state.opponent_paddle_y),
    ] {
        surface.fill_rect(
            config.paddle_x(side),
            y,
            config.paddle_width,
            config.paddle_height,
            palette.text,
        );
    }

    let (x, y) = (state.ball.pos.x, state.ball.pos.y);
    match frame.ball_style {
        BallStyle::Circle => surface.fill_circle(x, y, config.ball_size / 2.0, palette.text),
        BallStyle::Dot => surface.fill_circle(x, y, DOT_RADIUS, palette.text),
        BallStyle::MinimalSquare => {
            let half = SQUARE_SIZE / 2.0;
            surface.fill_rect(x - half, y - half, SQUARE_SIZE, SQUARE_SIZE, palette.text)
        }
        BallStyle::SoftGlow => surface.fill_glow(x, y, GLOW_INNER, GLOW_OUTER, palette.text),
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: String },
    DashedLine {
        from: (f32, f32),
        to: (f32, f32),
        dash: [f32; 2],
        width: f32,
        color: String,
    },
    Circle { x: f32, y: f32, radius: f32, color: String },
    Glow { x: f32, y: f32, inner: f32, outer: f32, color: String },
}

/// Headless surface that records every call, for snapshot comparisons
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last `clear`, i.e. the visible frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|cmd| matches!(cmd, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn dashed_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        dash: [f32; 2],
        width: f32,
        color: &str,
    ) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash,
            width,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_glow(&mut self, x: f32, y: f32, inner: f32, outer: f32, color: &str) {
        self.commands.push(DrawCommand::Glow {
            x,
            y,
            inner,
            outer,
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameRng, MatchSettings, PaddleIntent, TableTheme};
    use glam::Vec2;

    fn setup(style: BallStyle) -> (MatchState, FrameConfig, Config) {
        let config = Config::new();
        let mut state = MatchState::new(7, &config, &mut GameRng::new(8));
        state.ball.pos = Vec2::new(120.0, 80.0);
        let settings = MatchSettings {
            ball_style: style,
            table_theme: TableTheme::GreyMinimal,
            ..MatchSettings::default()
        };
        (state, FrameConfig::new(&settings, PaddleIntent::new()), config)
    }

    #[test]
    fn test_render_is_idempotent() {
        let (state, frame, config) = setup(BallStyle::Circle);
        let before = state.clone();

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        render(&state, &frame, &config, &mut first);
        render(&state, &frame, &config, &mut second);

        assert_eq!(first.commands, second.commands);
        assert_eq!(state, before, "Drawing must not mutate the match");
    }

    #[test]
    fn test_render_layout() {
        let (state, frame, config) = setup(BallStyle::Circle);
        let mut surface = RecordingSurface::new();
        render(&state, &frame, &config, &mut surface);

        let cmds = &surface.commands;
        assert_eq!(cmds.len(), 6);
        assert_eq!(cmds[0], DrawCommand::Clear { width: 880.0, height: 520.0 });
        assert_eq!(
            cmds[1],
            DrawCommand::Rect { x: 0.0, y: 0.0, w: 880.0, h: 520.0, color: "#202631".into() }
        );
        assert_eq!(
            cmds[2],
            DrawCommand::DashedLine {
                from: (440.0, 0.0),
                to: (440.0, 520.0),
                dash: [8.0, 10.0],
                width: 3.0,
                color: "#434E60".into(),
            }
        );
        assert_eq!(
            cmds[3],
            DrawCommand::Rect { x: 22.0, y: 214.0, w: 14.0, h: 92.0, color: "#DCE3EE".into() }
        );
        assert_eq!(
            cmds[4],
            DrawCommand::Rect { x: 844.0, y: 214.0, w: 14.0, h: 92.0, color: "#DCE3EE".into() }
        );
        assert_eq!(
            cmds[5],
            DrawCommand::Circle { x: 120.0, y: 80.0, radius: 7.0, color: "#DCE3EE".into() }
        );
    }

    #[test]
    fn test_ball_styles() {
        let cases = [
            (
                BallStyle::Dot,
                DrawCommand::Circle { x: 120.0, y: 80.0, radius: 4.0, color: "#DCE3EE".into() },
            ),
            (
                BallStyle::MinimalSquare,
                DrawCommand::Rect { x: 114.0, y: 74.0, w: 12.0, h: 12.0, color: "#DCE3EE".into() },
            ),
            (
                BallStyle::SoftGlow,
                DrawCommand::Glow {
                    x: 120.0,
                    y: 80.0,
                    inner: 1.0,
                    outer: 11.0,
                    color: "#DCE3EE".into(),
                },
            ),
        ];
        for (style, expected) in cases {
            let (state, frame, config) = setup(style);
            let mut surface = RecordingSurface::new();
            render(&state, &frame, &config, &mut surface);
            assert_eq!(surface.commands.last(), Some(&expected), "{:?}", style);
        }
    }

    #[test]
    fn test_circle_follows_ball_size() {
        let (state, frame, mut config) = setup(BallStyle::Circle);
        config.ball_size = 20.0;
        let mut surface = RecordingSurface::new();
        render(&state, &frame, &config, &mut surface);

        assert!(matches!(
            surface.commands.last(),
            Some(DrawCommand::Circle { radius, .. }) if *radius == 10.0
        ));
    }

    #[test]
    fn test_last_frame() {
        let (state, frame, config) = setup(BallStyle::Circle);
        let mut surface = RecordingSurface::new();
        render(&state, &frame, &config, &mut surface);
        render(&state, &frame, &config, &mut surface);
        assert_eq!(surface.commands.len(), 12);
        assert_eq!(surface.last_frame().len(), 6);
        assert_eq!(surface.last_frame(), &surface.commands[..6]);
    }
}
