//! Collision detection and response
//!
//! Runs against the post-integration ball position, in fixed order:
//! walls, then the paddle plane (or a miss), then bricks. At most one brick
//! is resolved per tick.

use glam::Vec2;

use super::geom::Rect;
use super::state::{Ball, BrickGrid, BrickHit, BrickKind, GameEvent, Paddle};
use crate::config::GameConfig;

/// What the resolver did to the ball this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Points earned this tick
    pub score_delta: u64,
    /// Ball fell past the paddle
    pub missed: bool,
    /// Events for sound triggers, in resolution order
    pub events: Vec<GameEvent>,
}

/// Resolve all collisions for one tick. `prev_pos` is the ball center before
/// integration.
pub fn resolve(
    ball: &mut Ball,
    prev_pos: Vec2,
    paddle: &Paddle,
    bricks: &mut BrickGrid,
    config: &GameConfig,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    if resolve_walls(ball, config.field_width) {
        report.events.push(GameEvent::WallBounce);
    }

    if let Some(offset) = resolve_paddle(ball, prev_pos, paddle, config.max_deflection) {
        ball.clamp_speed(config.max_ball_speed);
        report.events.push(GameEvent::PaddleHit { offset });
    } else if ball_missed(ball, config.field_height) {
        ball.pos.y = config.field_height - ball.radius;
        report.missed = true;
        return report;
    }

    if let Some(idx) = bricks.first_overlap(&ball.circle()) {
        let brick = &mut bricks.bricks[idx];
        bounce_off_brick(ball, prev_pos, &brick.rect);

        let (row, col) = (brick.row, brick.col);
        match brick.hit() {
            Some(BrickHit::Cracked) => {
                report.events.push(GameEvent::BrickCracked { row, col });
            }
            Some(BrickHit::Destroyed(kind)) => {
                let points = match kind {
                    BrickKind::Bonus => config.bonus_brick_points,
                    BrickKind::Normal | BrickKind::Reinforced => config.normal_brick_points,
                };
                report.score_delta += points;
                report.events.push(GameEvent::BrickDestroyed {
                    row,
                    col,
                    kind,
                    points,
                });
            }
            None => {}
        }
    }

    report
}

/// Reflect off the left, right and top walls. Returns true on any bounce.
///
/// Reflection only flips a component's sign, so speed is preserved. The ball
/// is pushed back inside the field so it cannot bounce twice off one wall.
pub fn resolve_walls(ball: &mut Ball, field_width: f32) -> bool {
    let mut bounced = false;
    let r = ball.radius;

    if ball.pos.x - r < 0.0 {
        ball.pos.x = r;
        ball.vel.x = ball.vel.x.abs();
        bounced = true;
    } else if ball.pos.x + r > field_width {
        ball.pos.x = field_width - r;
        ball.vel.x = -ball.vel.x.abs();
        bounced = true;
    }

    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
        bounced = true;
    }

    bounced
}

/// Restore the pre-integration position and turn the ball away from `rect`.
///
/// `prev_pos` never overlaps a live brick. Vertical travel points away from
/// the face the ball came from (a plain reflection on a side hit), and
/// horizontal travel turns only when the ball came in from the left or right,
/// so the same brick cannot be touched again next tick.
pub fn bounce_off_brick(ball: &mut Ball, prev_pos: Vec2, rect: &Rect) {
    ball.pos = prev_pos;

    if prev_pos.y < rect.top() {
        ball.vel.y = -ball.vel.y.abs();
    } else if prev_pos.y > rect.bottom() {
        ball.vel.y = ball.vel.y.abs();
    } else {
        ball.vel.y = -ball.vel.y;
    }

    if prev_pos.x < rect.left() {
        ball.vel.x = -ball.vel.x.abs();
    } else if prev_pos.x > rect.right() {
        ball.vel.x = ball.vel.x.abs();
    }
}

/// Normalized distance of `x` from the paddle center, in [-1, 1]
pub fn hit_offset(paddle: &Paddle, x: f32) -> f32 {
    let half = paddle.width / 2.0;
    ((x - paddle.center_x()) / half).clamp(-1.0, 1.0)
}

/// Rebound off the paddle if the ball crossed its top edge this tick while
/// horizontally over it. Returns the hit offset on contact.
///
/// The rebound always points up. Horizontal speed is replaced by
/// `offset * max_deflection`, which is how the player steers.
pub fn resolve_paddle(
    ball: &mut Ball,
    prev_pos: Vec2,
    paddle: &Paddle,
    max_deflection: f32,
) -> Option<f32> {
    if ball.vel.y <= 0.0 {
        return None;
    }

    let r = ball.radius;
    let was_above = prev_pos.y + r <= paddle.y;
    let now_below = ball.pos.y + r > paddle.y;
    if !(was_above && now_below) {
        return None;
    }

    // Horizontal position where the ball bottom meets the paddle plane
    let travel = ball.pos.y - prev_pos.y;
    let t = if travel.abs() > f32::EPSILON {
        ((paddle.y - r - prev_pos.y) / travel).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let contact_x = prev_pos.x + (ball.pos.x - prev_pos.x) * t;

    let overlaps = contact_x + r >= paddle.x && contact_x - r <= paddle.x + paddle.width;
    if !overlaps {
        return None;
    }

    let offset = hit_offset(paddle, contact_x);
    ball.vel = Vec2::new(offset * max_deflection, -ball.vel.y.abs());
    ball.pos = Vec2::new(contact_x, paddle.y - r);

    Some(offset)
}

/// Ball has dropped to the bottom boundary
pub fn ball_missed(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y + ball.radius >= field_height
}
