//! Autopilot for the paddle
//!
//! Projects the ball along a straight line to the paddle plane and parks the
//! paddle center there. Wall bounces along the way are ignored, so the
//! autopilot misjudges long diagonal shots. That weakness is part of the
//! game's difficulty and is kept on purpose.

use super::state::{Ball, Paddle};

/// Straight-line projection of the ball's x at `plane_y`.
///
/// None when the ball has no vertical motion, since the line never reaches
/// the plane.
pub fn predict_x_at(ball: &Ball, plane_y: f32) -> Option<f32> {
    if ball.vel.y.abs() <= f32::EPSILON {
        return None;
    }
    let x = ball.pos.x + ball.vel.x * (plane_y - ball.pos.y) / ball.vel.y;
    x.is_finite().then_some(x)
}

/// Center the paddle on the projected intercept. Returns false when the
/// projection was skipped and the paddle left where it was.
pub fn drive_paddle(paddle: &mut Paddle, ball: &Ball, field_width: f32) -> bool {
    match predict_x_at(ball, paddle.y) {
        Some(target_x) => {
            paddle.set_center(target_x, field_width);
            true
        }
        None => false,
    }
}
