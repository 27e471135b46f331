//! Collision detection and response
//!
//! Rectangular playfield physics: wall bounces, paddle bounces with
//! impact-offset deflection, and goal detection. All checks use
//! closed-interval overlap, so touching counts as colliding; combined with
//! the speed budget in `consts` this rules out tunneling without continuous
//! collision detection.

use crate::consts::*;
use crate::sim::state::{Ball, Paddle, Side};

/// Distance the ball is pushed clear of a paddle after a bounce, so the
/// boxes are strictly separated on the next check
const PADDLE_NUDGE: f32 = 1.0;

/// Closed-interval overlap of the ball box and a paddle box
pub fn paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() >= paddle.left()
        && ball.left() <= paddle.right()
        && ball.bottom() >= paddle.top()
        && ball.top() <= paddle.bottom()
}

/// Reflect the ball off the top/bottom playfield bounds.
///
/// Energy conserving: `dy` flips sign, magnitude unchanged; the position is
/// clamped back onto the bound. Returns whether a wall was hit.
pub fn resolve_walls(ball: &mut Ball) -> bool {
    if ball.top() <= 0.0 {
        ball.pos.y = BALL_HALF_SIZE;
        ball.vel.y = ball.vel.y.abs();
        return true;
    }
    if ball.bottom() >= SCREEN_HEIGHT {
        ball.pos.y = SCREEN_HEIGHT - BALL_HALF_SIZE;
        ball.vel.y = -ball.vel.y.abs();
        return true;
    }
    false
}

/// Reflect the ball off a paddle if their boxes overlap.
///
/// `dx` flips toward midfield, `dy` is rescaled from where on the paddle the
/// contact happened, and the ball is nudged clear of the paddle box so the
/// same contact cannot resolve twice. Returns whether a bounce happened.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !paddle_overlap(ball, paddle) {
        return false;
    }
    match side {
        Side::Left => {
            ball.pos.x = paddle.right() + BALL_HALF_SIZE + PADDLE_NUDGE;
            ball.vel.x = ball.vel.x.abs();
        }
        Side::Right => {
            ball.pos.x = paddle.left() - BALL_HALF_SIZE - PADDLE_NUDGE;
            ball.vel.x = -ball.vel.x.abs();
        }
    }
    ball.vel.y = bounce_dy(ball.pos.y, paddle);
    true
}

/// Vertical speed imparted by a paddle hit: the contact point relative to
/// the paddle center scales the outgoing `dy`, quantized to a whole pixel
/// per tick so velocity components stay integral.
fn bounce_dy(contact_y: f32, paddle: &Paddle) -> f32 {
    let offset = (contact_y - paddle.center_y()) / (PADDLE_HEIGHT / 2.0);
    (offset.clamp(-1.0, 1.0) * BALL_MAX_SPEED_Y).round()
}

/// Whether the ball has fully left the playfield, and who scored
pub fn check_goal(ball: &Ball) -> Option<Side> {
    if ball.right() < 0.0 {
        Some(Side::Right)
    } else if ball.left() > SCREEN_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}
