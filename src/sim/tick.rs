//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one logical step. The step size is
//! fixed; callers drive it once per rendered frame.

use super::ai;
use super::collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::GameConfig;

/// Latest-known player input, sampled at the start of a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left key held
    pub move_left: bool,
    /// Right key held
    pub move_right: bool,
    /// Pointer x in field coordinates; wins over the keys when present
    pub pointer_x: Option<f32>,
    /// Pause toggle pressed since the last tick
    pub pause_toggled: bool,
    /// AI toggle pressed since the last tick
    pub ai_toggled: bool,
    /// Restart requested since the last tick
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    state.events.clear();

    if input.restart {
        log::info!("Restarting run (seed {})", state.seed);
        state.restart(config);
        return;
    }

    if input.ai_toggled {
        state.ai_controlled = !state.ai_controlled;
        log::debug!("AI control {}", if state.ai_controlled { "on" } else { "off" });
    }

    if input.pause_toggled {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::debug!("Paused at tick {}", state.time_ticks);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::debug!("Resumed at tick {}", state.time_ticks);
            }
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // 1. Paddle: AI and manual input share the same slot
    if state.ai_controlled {
        ai::drive_paddle(&mut state.paddle, &state.ball, config.field_width);
    } else {
        apply_manual_input(state, input, config);
    }

    // 2. Integrate
    let prev_pos = state.ball.pos;
    state.ball.clamp_speed(config.max_ball_speed);
    state.ball.integrate();

    // 3. Collide against the post-integration position
    let report = collision::resolve(
        &mut state.ball,
        prev_pos,
        &state.paddle,
        &mut state.bricks,
        config,
    );
    state.score += report.score_delta;
    state.events.extend(report.events);

    // 4. State machine
    if report.missed {
        lose_life(state, config);
    } else if state.bricks.all_destroyed() {
        advance_level(state, config);
    }
}

fn apply_manual_input(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    if let Some(pointer_x) = input.pointer_x {
        state.paddle.set_center(pointer_x, config.field_width);
        return;
    }

    let mut direction = 0.0;
    if input.move_left {
        direction -= 1.0;
    }
    if input.move_right {
        direction += 1.0;
    }
    state.paddle.nudge(direction, config.field_width);
}

fn lose_life(state: &mut GameState, config: &GameConfig) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: score {} at level {} after {} ticks",
            state.score,
            state.level,
            state.time_ticks
        );
    } else {
        log::debug!("Ball lost, {} lives left", state.lives);
        state.reset_ball(config);
    }
}

fn advance_level(state: &mut GameState, config: &GameConfig) {
    state.level += 1;
    state.regenerate_bricks(config);
    state.reset_ball(config);
    state.events.push(GameEvent::LevelCleared { level: state.level });
    log::info!("Level cleared, now on level {} (score {})", state.level, state.score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, BrickKind, BrickStatus};
    use glam::Vec2;

    fn setup() -> (GameConfig, GameState) {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        (config, state)
    }

    #[test]
    fn test_tick_pause() {
        let (config, mut state) = setup();

        let pause = TickInput {
            pause_toggled: true,
            ..Default::default()
        };
        tick(&mut state, &pause, &config);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.time_ticks, 0);

        // Paused: nothing moves
        let ball_before = state.ball;
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.ball, ball_before);
        assert_eq!(state.time_ticks, 0);

        // Unpause resumes within the same tick
        tick(&mut state, &pause, &config);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_manual_keys_move_paddle() {
        let (config, mut state) = setup();
        let start = state.paddle.x;

        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &right, &config);
        assert_eq!(state.paddle.x, start + config.paddle_speed);

        let both = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &both, &config);
        assert_eq!(state.paddle.x, start + config.paddle_speed);
    }

    #[test]
    fn test_pointer_wins_over_keys() {
        let (config, mut state) = setup();
        let input = TickInput {
            move_left: true,
            pointer_x: Some(100.0),
            ..Default::default()
        };
        tick(&mut state, &input, &config);
        assert_eq!(state.paddle.center_x(), 100.0);

        let input = TickInput {
            pointer_x: Some(-250.0),
            ..Default::default()
        };
        tick(&mut state, &input, &config);
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_ai_toggle_overrides_input() {
        let (config, mut state) = setup();
        state.ball = Ball {
            pos: Vec2::new(100.0, 150.0),
            vel: Vec2::new(1.0, 4.0),
            radius: config.ball_radius,
        };

        let input = TickInput {
            ai_toggled: true,
            pointer_x: Some(400.0),
            ..Default::default()
        };
        tick(&mut state, &input, &config);
        assert!(state.ai_controlled);
        // Projection from the pre-move ball: 100 + 1 * 150 / 4
        assert_eq!(state.paddle.center_x(), 137.5);
    }

    #[test]
    fn test_miss_costs_a_life_and_reserves() {
        let (config, mut state) = setup();
        state.ball = Ball {
            pos: Vec2::new(20.0, 308.0),
            vel: Vec2::new(0.0, 4.0),
            radius: config.ball_radius,
        };
        tick(&mut state, &TickInput::default(), &config);

        assert_eq!(state.lives, config.starting_lives - 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.ball.pos.x, state.paddle.center_x());
        assert!(state.events.contains(&GameEvent::LifeLost {
            lives_left: config.starting_lives - 1
        }));
    }

    #[test]
    fn test_last_life_ends_game_and_freezes() {
        let (config, mut state) = setup();
        state.lives = 1;
        state.ball = Ball {
            pos: Vec2::new(20.0, 308.0),
            vel: Vec2::new(0.0, 4.0),
            radius: config.ball_radius,
        };
        tick(&mut state, &TickInput::default(), &config);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver { score: 0 }));

        let ball = state.ball;
        let paddle = state.paddle;
        let bricks = state.bricks.clone();
        let input = TickInput {
            move_right: true,
            pause_toggled: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input, &config);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball, ball);
        assert_eq!(state.paddle, paddle);
        assert_eq!(state.bricks, bricks);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_game_over_leaves_ball_in_field() {
        let (config, mut state) = setup();
        state.lives = 1;
        state.ball = Ball {
            pos: Vec2::new(20.0, 310.0),
            vel: Vec2::new(0.0, 4.0),
            radius: config.ball_radius,
        };
        tick(&mut state, &TickInput::default(), &config);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.pos.y + state.ball.radius, config.field_height);

        // Frozen at the boundary, not below it
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.ball.pos.y + state.ball.radius, config.field_height);
    }

    #[test]
    fn test_reinforced_side_contact_needs_two_hits() {
        let (config, mut state) = setup();
        state.bricks.bricks[0].kind = BrickKind::Reinforced;

        // Brick (0, 0) spans x 20..76, y 30..48; come in from its left side
        state.ball = Ball {
            pos: Vec2::new(10.0, 40.0),
            vel: Vec2::new(4.0, -1.0),
            radius: config.ball_radius,
        };
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(
            state.events,
            vec![GameEvent::BrickCracked { row: 0, col: 0 }]
        );
        assert_eq!(state.ball.pos, Vec2::new(10.0, 40.0));
        assert_eq!(state.ball.vel, Vec2::new(-4.0, 1.0));

        // Heads back toward the left wall instead of grinding into the brick
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
        let brick = &state.bricks.bricks[0];
        assert_eq!(brick.status, BrickStatus::Alive);
        assert_eq!(brick.kind, BrickKind::Normal);
    }

    #[test]
    fn test_clearing_last_brick_advances_level() {
        let (config, mut state) = setup();
        for b in &mut state.bricks.bricks {
            b.status = BrickStatus::Destroyed;
        }
        let last = &mut state.bricks.bricks[0];
        last.status = BrickStatus::Alive;
        last.kind = BrickKind::Normal;

        state.ball = Ball {
            pos: Vec2::new(48.0, 60.0),
            vel: Vec2::new(0.0, -6.0),
            radius: config.ball_radius,
        };
        tick(&mut state, &TickInput::default(), &config);

        assert_eq!(state.level, 2);
        assert_eq!(state.score, config.normal_brick_points);
        assert_eq!(state.bricks.alive_count(), state.bricks.bricks.len());
        assert!(state.events.contains(&GameEvent::LevelCleared { level: 2 }));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_restart_consumes_tick() {
        let (config, mut state) = setup();
        state.lives = 0;
        state.score = 90;
        state.level = 4;
        state.phase = GamePhase::GameOver;

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, &config);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, config.starting_lives);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.bricks.alive_count(), state.bricks.bricks.len());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let (config, mut state1) = setup();
        let mut state2 = GameState::new(&config);
        state1.ai_controlled = true;
        state2.ai_controlled = true;

        for _ in 0..2_000 {
            tick(&mut state1, &TickInput::default(), &config);
            tick(&mut state2, &TickInput::default(), &config);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddle, state2.paddle);
        assert_eq!(state1.bricks, state2.bricks);
        assert_eq!(state1.score, state2.score);
    }
}
