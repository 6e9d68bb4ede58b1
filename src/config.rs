//! Game tuning
//!
//! Every constant the simulation reads at runtime. Defaults mirror
//! [`crate::consts`]; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed on serve
    pub ball_speed: f32,
    /// Speed magnitude cap
    pub max_ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Keyboard movement per tick
    pub paddle_speed: f32,
    pub paddle_bottom_gap: f32,
    /// Horizontal ball speed for an edge hit
    pub max_deflection: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_top_offset: f32,

    // === Rules ===
    pub starting_lives: u8,
    pub normal_brick_points: u64,
    pub bonus_brick_points: u64,

    /// Seed for ball serve direction and brick layout
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            max_ball_speed: BALL_MAX_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            max_deflection: MAX_DEFLECTION,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_top_offset: BRICK_TOP_OFFSET,

            starting_lives: STARTING_LIVES,
            normal_brick_points: NORMAL_BRICK_POINTS,
            bonus_brick_points: BONUS_BRICK_POINTS,

            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Top edge of the paddle (fixed for the whole run)
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_bottom_gap - self.paddle_height
    }

    /// Total width of one brick row including padding
    pub fn brick_grid_width(&self) -> f32 {
        let cols = self.brick_cols as f32;
        cols * self.brick_width + (cols - 1.0).max(0.0) * self.brick_padding
    }

    /// Bottom edge of the lowest brick row
    pub fn brick_grid_bottom(&self) -> f32 {
        let rows = self.brick_rows as f32;
        self.brick_top_offset + rows * self.brick_height + (rows - 1.0).max(0.0) * self.brick_padding
    }

    /// Left offset that centers the brick grid horizontally
    pub fn brick_left_offset(&self) -> f32 {
        (self.field_width - self.brick_grid_width()) / 2.0
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("max_ball_speed", self.max_ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("paddle_bottom_gap", self.paddle_bottom_gap),
            ("max_deflection", self.max_deflection),
            ("brick_padding", self.brick_padding),
            ("brick_top_offset", self.brick_top_offset),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must not be negative, got {value}")));
            }
        }

        if self.paddle_width >= self.field_width {
            return Err(invalid("paddle_width", "must be narrower than the field"));
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(invalid("brick_rows", "grid needs at least one brick"));
        }
        if self.brick_grid_width() > self.field_width {
            return Err(invalid("brick_cols", "brick row is wider than the field"));
        }
        if self.brick_grid_bottom() + 2.0 * self.ball_radius >= self.paddle_y() {
            return Err(invalid("brick_rows", "bricks leave no room above the paddle"));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "must be at least 1"));
        }

        // A ball moving less than its diameter per tick cannot skip a collider
        if self.max_ball_speed >= 2.0 * self.ball_radius {
            return Err(invalid(
                "max_ball_speed",
                "must stay below the ball diameter to avoid tunneling",
            ));
        }
        let serve_speed = std::f32::consts::SQRT_2 * self.ball_speed;
        if serve_speed > self.max_ball_speed {
            return Err(invalid("ball_speed", "serve speed exceeds max_ball_speed"));
        }
        if self.max_deflection.hypot(self.ball_speed) > self.max_ball_speed {
            return Err(invalid("max_deflection", "edge rebound exceeds max_ball_speed"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_y(), 300.0);
        // 7 bricks of 56 plus 6 gaps of 8, centered in 480
        assert_eq!(config.brick_grid_width(), 440.0);
        assert_eq!(config.brick_left_offset(), 20.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_lives": 5, "seed": 7 }"#)
            .expect("partial config should parse");
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_rejects_zero_lives() {
        let err = GameConfig::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "starting_lives",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_tunneling_speed() {
        let err = GameConfig::from_json(r#"{ "max_ball_speed": 40.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_ball_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = GameConfig::from_json(r#"{ "brick_cols": 20 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "brick_cols", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
