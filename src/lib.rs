//! Brickfall - A brick-breaker arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, AI, game state)
//! - `game`: Frame clock driving one tick per rendered frame
//! - `render`: Draw commands for an external rendering surface
//! - `audio`: Sound triggers for an external audio collaborator
//! - `config`: Data-driven tuning

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod render;
pub mod sim;

pub use audio::{SoundEffect, SoundSink};
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{FrameResult, Game};
pub use highscores::HighScores;
pub use render::{DrawCommand, DrawSurface};

/// Game configuration constants
pub mod consts {
    /// Logical play field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis speed on serve (pixels per tick)
    pub const BALL_SPEED: f32 = 4.0;
    /// Speed cap; must stay below the thinnest collider to avoid tunneling
    pub const BALL_MAX_SPEED: f32 = 9.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between paddle bottom and field bottom
    pub const PADDLE_BOTTOM_GAP: f32 = 10.0;
    /// Horizontal speed at the paddle edge (hit offset of +-1)
    pub const MAX_DEFLECTION: f32 = 5.0;

    /// Brick layout
    pub const BRICK_ROWS: usize = 4;
    pub const BRICK_COLS: usize = 7;
    pub const BRICK_WIDTH: f32 = 56.0;
    pub const BRICK_HEIGHT: f32 = 18.0;
    pub const BRICK_PADDING: f32 = 8.0;
    pub const BRICK_TOP_OFFSET: f32 = 30.0;

    /// Scoring
    pub const NORMAL_BRICK_POINTS: u64 = 10;
    pub const BONUS_BRICK_POINTS: u64 = 50;

    pub const STARTING_LIVES: u8 = 3;
    pub const DEFAULT_SEED: u64 = 0x5EED_B41C;
}
