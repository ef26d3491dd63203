use crate::{Ball, Events, Paddle, Playfield, Rally};

/// Resolve one tick of collisions and scoring, then advance the ball.
///
/// The check order is load-bearing and must not be rearranged: right
/// paddle, left paddle, right wall, bottom wall, left wall, top wall,
/// movement last. Flag updates therefore take effect on the very tick
/// they are detected. Geometrically both paddle checks can never fire on
/// the same tick, but they still both run, unconditionally.
pub fn resolve_collisions(
    ball: &mut Ball,
    left: &mut Paddle,
    right: &mut Paddle,
    field: &Playfield,
    rally: &mut Rally,
    events: &mut Events,
) {
    // 1. Right-paddle contact: ball centre inside the paddle's vertical
    // span and past the paddle's near face (minus the ball radius).
    if ball.pos.y >= right.top() && ball.pos.y <= right.bottom() {
        if ball.pos.x >= right.left() - ball.radius_f() {
            ball.flip_x = true;
            events.ball_hit_paddle = true;
            rally.record_hit();
        }
    }

    // 2. Left-paddle contact, mirrored.
    if ball.pos.y >= left.top() && ball.pos.y <= left.bottom() {
        if ball.pos.x <= left.right() + ball.radius_f() {
            ball.flip_x = false;
            events.ball_hit_paddle = true;
            rally.record_hit();
        }
    }

    // 3. Right wall: the left player scores, ball recentres. Velocity and
    // flip flags are left alone (see Ball::reset).
    if ball.pos.x >= field.width_f() - ball.radius_f() {
        left.score += 1;
        events.left_scored = true;
        ball.reset(field.center());
    }

    // 4. Bottom wall: reverse the y axis.
    if ball.pos.y >= field.height_f() - ball.radius_f() {
        ball.flip_y = true;
        events.ball_hit_wall = true;
    }

    // 5. Left wall: the right player scores.
    if ball.pos.x <= ball.radius_f() {
        right.score += 1;
        events.right_scored = true;
        ball.reset(field.center());
    }

    // 6. Top wall: y axis forward again.
    if ball.pos.y <= ball.radius_f() {
        ball.flip_y = false;
        events.ball_hit_wall = true;
    }

    // 7. Movement, after all flag updates.
    ball.advance();
}
