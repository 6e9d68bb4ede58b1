//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; there is no ambient
//! global state, so any number of games can run side by side.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::{Circle, Rect};
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Suspended by the player, resumable
    Paused,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Something that happened during a tick. Drives sound triggers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left, right or top wall
    WallBounce,
    /// Ball rebounded off the paddle at the given hit offset in [-1, 1]
    PaddleHit { offset: f32 },
    /// Reinforced brick took a hit and downgraded to normal
    BrickCracked { row: usize, col: usize },
    /// Brick destroyed
    BrickDestroyed {
        row: usize,
        col: usize,
        kind: BrickKind,
        points: u64,
    },
    /// Ball fell past the paddle
    LifeLost { lives_left: u8 },
    /// Every brick destroyed; `level` is the new level number
    LevelCleared { level: u32 },
    /// Last life lost
    GameOver { score: u64 },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one tick along the current velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Scale velocity down to `max_speed` if it exceeds it, keeping direction
    pub fn clamp_speed(&mut self, max_speed: f32) {
        self.vel = self.vel.clamp_length_max(max_speed);
    }

    /// Place the ball above the paddle center, heading up at a random diagonal
    pub fn serve(&mut self, paddle: &Paddle, speed: f32, rng: &mut Pcg32) {
        let dir_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = Vec2::new(paddle.center_x(), paddle.y - self.radius - 1.0);
        self.vel = Vec2::new(dir_x * speed, -speed);
    }
}

/// The player's paddle. `x` is the left edge, `y` the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Keyboard movement per tick
    pub speed: f32,
}

impl Paddle {
    /// Centered paddle for the given config
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.field_width - config.paddle_width) / 2.0,
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Keep the paddle inside `[0, field_width - width]`
    pub fn clamp_to_field(&mut self, field_width: f32) {
        let max_x = (field_width - self.width).max(0.0);
        // NaN from a bad pointer reading collapses to the left wall
        self.x = if self.x.is_nan() { 0.0 } else { self.x.clamp(0.0, max_x) };
    }

    /// Move so the paddle center sits at `center_x`, then clamp
    pub fn set_center(&mut self, center_x: f32, field_width: f32) {
        self.x = center_x - self.width / 2.0;
        self.clamp_to_field(field_width);
    }

    /// Keyboard step: -1 left, +1 right, 0 stay
    pub fn nudge(&mut self, direction: f32, field_width: f32) {
        self.x += direction * self.speed;
        self.clamp_to_field(field_width);
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Normal,
    /// Takes two hits: the first downgrades it to Normal
    Reinforced,
    /// Worth extra points
    Bonus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Alive,
    Destroyed,
}

/// Result of striking a live brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickHit {
    /// Reinforced brick survived and is now Normal
    Cracked,
    /// Brick destroyed; carries the kind it had when hit
    Destroyed(BrickKind),
}

/// A brick cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
    pub kind: BrickKind,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }

    /// Apply one ball hit. Destroyed bricks are inert and return None.
    pub fn hit(&mut self) -> Option<BrickHit> {
        if !self.is_alive() {
            return None;
        }
        match self.kind {
            BrickKind::Reinforced => {
                self.kind = BrickKind::Normal;
                Some(BrickHit::Cracked)
            }
            kind => {
                self.status = BrickStatus::Destroyed;
                Some(BrickHit::Destroyed(kind))
            }
        }
    }
}

/// The row/column brick layout for the current level, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: usize,
    pub cols: usize,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Build a fresh grid for `level` with every cell alive
    pub fn generate(config: &GameConfig, level: u32, rng: &mut Pcg32) -> Self {
        let left = config.brick_left_offset();
        let mut bricks = Vec::with_capacity(config.brick_rows * config.brick_cols);

        for row in 0..config.brick_rows {
            for col in 0..config.brick_cols {
                let x = left + col as f32 * (config.brick_width + config.brick_padding);
                let y = config.brick_top_offset
                    + row as f32 * (config.brick_height + config.brick_padding);
                let roll = rng.random_range(0..100u32);
                bricks.push(Brick {
                    row,
                    col,
                    rect: Rect::new(x, y, config.brick_width, config.brick_height),
                    kind: determine_brick_kind(level, roll),
                    status: BrickStatus::Alive,
                });
            }
        }

        Self {
            rows: config.brick_rows,
            cols: config.brick_cols,
            bricks,
        }
    }

    /// Index of the first live brick overlapping `circle`, in row-major order
    pub fn first_overlap(&self, circle: &Circle) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.is_alive() && circle.intersects_rect(&b.rect))
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.is_alive())
    }
}

/// Brick type from a 0..100 roll. Reinforced bricks get more common each level.
fn determine_brick_kind(level: u32, roll: u32) -> BrickKind {
    const BONUS_CHANCE: u32 = 8;
    let reinforced_chance = level.saturating_mul(10).min(50);

    if roll < BONUS_CHANCE {
        BrickKind::Bonus
    } else if roll < BONUS_CHANCE + reinforced_chance {
        BrickKind::Reinforced
    } else {
        BrickKind::Normal
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u8,
    pub score: u64,
    /// Ticks simulated this run
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Paddle driven by the AI instead of player input
    pub ai_controlled: bool,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run at level 1
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let paddle = Paddle::new(config);
        let bricks = BrickGrid::generate(config, 1, &mut rng);
        let mut ball = Ball::new(config.ball_radius);
        ball.serve(&paddle, config.ball_speed, &mut rng);

        Self {
            seed: config.seed,
            rng,
            level: 1,
            lives: config.starting_lives,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ai_controlled: false,
            ball,
            paddle,
            bricks,
            events: Vec::new(),
        }
    }

    /// Reinitialize everything except the AI toggle
    pub fn restart(&mut self, config: &GameConfig) {
        let ai_controlled = self.ai_controlled;
        *self = Self::new(config);
        self.ai_controlled = ai_controlled;
    }

    /// Recenter the paddle and serve a new ball
    pub fn reset_ball(&mut self, config: &GameConfig) {
        self.paddle = Paddle::new(config);
        self.ball.radius = config.ball_radius;
        self.ball.serve(&self.paddle, config.ball_speed, &mut self.rng);
    }

    /// Replace the brick grid wholesale for the current level
    pub fn regenerate_bricks(&mut self, config: &GameConfig) {
        self.bricks = BrickGrid::generate(config, self.level, &mut self.rng);
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
