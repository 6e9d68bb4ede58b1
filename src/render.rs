//! Draw commands
//!
//! Flattens the game state into an ordered list of primitives. An external
//! surface implementing [`DrawSurface`] turns them into pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::sim::{Brick, BrickKind, GamePhase, GameState, Rect};

/// RGBA, 0.0 - 1.0
pub type Color = [f32; 4];

pub const BACKGROUND: Color = [0.04, 0.04, 0.08, 1.0];
pub const BALL_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
pub const PADDLE_COLOR: Color = [0.0, 0.58, 0.87, 1.0];
/// Paddle tint while the autopilot drives it
pub const PADDLE_AI_COLOR: Color = [0.95, 0.55, 0.15, 1.0];
pub const HUD_COLOR: Color = [0.85, 0.85, 0.9, 1.0];
pub const OVERLAY_COLOR: Color = [0.0, 0.0, 0.0, 0.6];

/// Row-based colors for normal bricks (top to bottom)
const ROW_COLORS: [Color; 4] = [
    [0.9, 0.2, 0.2, 1.0],
    [0.95, 0.6, 0.1, 1.0],
    [0.95, 0.9, 0.2, 1.0],
    [0.2, 0.8, 0.3, 1.0],
];
const REINFORCED_COLOR: Color = [0.55, 0.6, 0.7, 1.0];
const BONUS_COLOR: Color = [1.0, 0.84, 0.0, 1.0];

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: Color },
    FillRect { rect: Rect, color: Color },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text anchored at its top-left corner
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Consumer of draw commands, called once per frame
pub trait DrawSurface {
    fn draw(&mut self, commands: &[DrawCommand]);
}

/// Keeps the last frame's commands
impl DrawSurface for Vec<DrawCommand> {
    fn draw(&mut self, commands: &[DrawCommand]) {
        self.clear();
        self.extend_from_slice(commands);
    }
}

/// Fill color for a live brick
pub fn brick_color(brick: &Brick) -> Color {
    match brick.kind {
        BrickKind::Normal => ROW_COLORS[brick.row % ROW_COLORS.len()],
        BrickKind::Reinforced => REINFORCED_COLOR,
        BrickKind::Bonus => BONUS_COLOR,
    }
}

/// Build the frame back to front: background, bricks, paddle, ball, HUD,
/// then a pause/game-over overlay when suspended
pub fn build_draw_list(state: &GameState, config: &GameConfig) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.bricks.bricks.len() + 8);

    commands.push(DrawCommand::Clear { color: BACKGROUND });

    // Destroyed bricks are not drawn
    commands.extend(
        state
            .bricks
            .bricks
            .iter()
            .filter(|b| b.is_alive())
            .map(|b| DrawCommand::FillRect {
                rect: b.rect,
                color: brick_color(b),
            }),
    );

    commands.push(DrawCommand::FillRect {
        rect: state.paddle.rect(),
        color: if state.ai_controlled {
            PADDLE_AI_COLOR
        } else {
            PADDLE_COLOR
        },
    });

    commands.push(DrawCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: BALL_COLOR,
    });

    // HUD
    let hud_size = 16.0;
    commands.push(text(format!("Score: {}", state.score), 8.0, 6.0, hud_size));
    commands.push(text(
        format!("Level: {}", state.level),
        config.field_width / 2.0 - 32.0,
        6.0,
        hud_size,
    ));
    commands.push(text(
        format!("Lives: {}", state.lives),
        config.field_width - 72.0,
        6.0,
        hud_size,
    ));
    if state.ai_controlled {
        commands.push(text("AI".to_string(), 8.0, config.field_height - 20.0, 12.0));
    }

    let banner = match state.phase {
        GamePhase::Playing => None,
        GamePhase::Paused => Some("PAUSED"),
        GamePhase::GameOver => Some("GAME OVER"),
    };
    if let Some(banner) = banner {
        let field = Rect::new(0.0, 0.0, config.field_width, config.field_height);
        commands.push(DrawCommand::FillRect {
            rect: field,
            color: OVERLAY_COLOR,
        });
        let size = 32.0;
        // Rough centering: monospace glyphs about 0.6em wide
        let width = banner.len() as f32 * size * 0.6;
        let center = field.center();
        commands.push(text(
            banner.to_string(),
            center.x - width / 2.0,
            center.y - size / 2.0,
            size,
        ));
    }

    commands
}

fn text(text: String, x: f32, y: f32, size: f32) -> DrawCommand {
    DrawCommand::Text {
        text,
        pos: Vec2::new(x, y),
        size,
        color: HUD_COLOR,
    }
}
