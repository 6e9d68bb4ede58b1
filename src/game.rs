//! Frame clock
//!
//! [`Game`] owns one run and advances it exactly one tick per call. The
//! external driver calls [`Game::advance`] once per rendered frame; the step
//! size is fixed, so calling it faster speeds the game up.

use serde::{Deserialize, Serialize};

use crate::audio::{SoundEffect, SoundSink};
use crate::config::GameConfig;
use crate::highscores::{HighScoreEntry, HighScores};
use crate::render::{DrawCommand, DrawSurface, build_draw_list};
use crate::sim::{Ball, Brick, GamePhase, GameState, Paddle, TickInput, tick};

/// Renderable copy of the entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
}

/// Everything an external driver needs after one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    pub snapshot: Snapshot,
    pub draw: Vec<DrawCommand>,
    /// Sound triggers raised this tick, in order
    pub sounds: Vec<SoundEffect>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    /// Run has ended; only a restart continues
    pub terminal: bool,
}

/// One single-player run plus the session leaderboard
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    high_scores: HighScores,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            high_scores: HighScores::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Run one tick and describe the resulting frame
    pub fn advance(&mut self, input: &TickInput) -> FrameResult {
        let was_over = self.state.is_terminal();
        tick(&mut self.state, input, &self.config);

        if !was_over && self.state.is_terminal() {
            let entry = HighScoreEntry {
                score: self.state.score,
                level: self.state.level,
                ticks: self.state.time_ticks,
            };
            match self.high_scores.record(entry) {
                Some(rank) => {
                    log::info!("Run ranked #{} this session ({} points)", rank, self.state.score)
                }
                None => log::debug!("Run did not make the session board"),
            }
        }

        self.frame()
    }

    /// [`advance`](Self::advance), then hand the frame to the render and audio
    /// collaborators
    pub fn advance_into<D, S>(
        &mut self,
        input: &TickInput,
        surface: &mut D,
        sink: &mut S,
    ) -> FrameResult
    where
        D: DrawSurface + ?Sized,
        S: SoundSink + ?Sized,
    {
        let frame = self.advance(input);
        surface.draw(&frame.draw);
        for &effect in &frame.sounds {
            sink.play(effect);
        }
        frame
    }

    /// Switch between autopilot and player input. Read at the start of the
    /// next tick.
    pub fn set_ai_controlled(&mut self, enabled: bool) {
        if self.state.ai_controlled != enabled {
            log::debug!("AI control {}", if enabled { "on" } else { "off" });
        }
        self.state.ai_controlled = enabled;
    }

    pub fn is_ai_controlled(&self) -> bool {
        self.state.ai_controlled
    }

    /// Start a fresh run from the configured constants
    pub fn restart(&mut self) {
        log::info!("Restarting run (seed {})", self.state.seed);
        self.state.restart(&self.config);
    }

    /// Describe the current state without ticking
    pub fn frame(&self) -> FrameResult {
        let state = &self.state;
        FrameResult {
            snapshot: Snapshot {
                ball: state.ball,
                paddle: state.paddle,
                bricks: state.bricks.bricks.clone(),
            },
            draw: build_draw_list(state, &self.config),
            sounds: state.events.iter().map(SoundEffect::from_event).collect(),
            score: state.score,
            lives: state.lives,
            level: state.level,
            phase: state.phase,
            terminal: state.is_terminal(),
        }
    }
}
