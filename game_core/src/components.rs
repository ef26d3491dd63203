use glam::Vec2;

/// Ball component - the pong ball
///
/// Velocity is a per-axis step magnitude plus a flip flag per axis; a set
/// flag means that axis currently runs in reverse (left / up).
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: u32,
    pub dx: u32,
    pub dy: u32,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: u32, dx: u32, dy: u32) -> Self {
        Self {
            pos,
            radius,
            dx,
            dy,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Advance one tick along both axes in whatever direction the flip
    /// flags say. Bounds are the collision pass's job, not ours.
    pub fn advance(&mut self) {
        if self.flip_x {
            self.pos.x -= self.dx as f32;
        } else {
            self.pos.x += self.dx as f32;
        }
        if self.flip_y {
            self.pos.y -= self.dy as f32;
        } else {
            self.pos.y += self.dy as f32;
        }
    }

    /// Teleport to the given point after a point is scored.
    ///
    /// Only the position resets; velocity and flip flags keep their last
    /// values, so the next serve continues in whatever direction play left
    /// off. Inherited behavior, kept on purpose.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
    }

    pub fn radius_f(&self) -> f32 {
        self.radius as f32
    }
}

/// Paddle component - one per side
///
/// `pos` is the top-left corner. The score lives here rather than in a
/// shared resource: a paddle's score is bumped when the *opponent* misses.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: u32,
    pub height: u32,
    pub dy: u32,
    pub score: u32,
}

impl Paddle {
    /// Build a paddle from its centre point, like the original sets them
    /// up at the vertical middle of the field.
    pub fn from_center(center: Vec2, width: u32, height: u32, dy: u32) -> Self {
        Self {
            pos: Vec2::new(
                center.x - width as f32 / 2.0,
                center.y - height as f32 / 2.0,
            ),
            width,
            height,
            dy,
            score: 0,
        }
    }

    /// Move one step toward the top of the field, clamped at 0.
    pub fn move_up(&mut self) {
        self.pos.y = (self.pos.y - self.dy as f32).max(0.0);
    }

    /// Move one step toward the bottom, clamped so the paddle stays fully
    /// inside the field.
    pub fn move_down(&mut self, field_height: f32) {
        self.pos.y = (self.pos.y + self.dy as f32).min(field_height - self.height as f32);
    }

    /// Speed-escalation hook. Overwrites this paddle's step and writes the
    /// new velocity into the ball. Mutates both `self` and `ball`; the
    /// policy applies it to each paddle in turn so both sides always move
    /// at the same tier.
    pub fn apply_speed_tier(&mut self, ball: &mut Ball, ball_dx: u32, ball_dy: u32, paddle_dy: u32) {
        ball.dx = ball_dx;
        ball.dy = ball_dy;
        self.dy = paddle_dy;
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height as f32
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_advance_forward() {
        let mut ball = Ball::new(Vec2::new(10.0, 10.0), 6, 2, 3);
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(12.0, 13.0));
    }

    #[test]
    fn test_ball_advance_reversed() {
        let mut ball = Ball::new(Vec2::new(10.0, 10.0), 6, 2, 3);
        ball.flip_x = true;
        ball.flip_y = true;
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(8.0, 7.0));
    }

    #[test]
    fn test_ball_reset_keeps_velocity_and_flags() {
        let mut ball = Ball::new(Vec2::new(790.0, 40.0), 6, 4, 4);
        ball.flip_y = true;
        ball.reset(Vec2::new(400.0, 300.0));
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0), "Position recentres");
        assert_eq!(ball.dx, 4, "Velocity survives a reset");
        assert!(ball.flip_y, "Flip flags survive a reset");
    }

    #[test]
    fn test_paddle_from_center() {
        let paddle = Paddle::from_center(Vec2::new(10.0, 300.0), 10, 70, 1);
        assert_eq!(paddle.pos, Vec2::new(5.0, 265.0));
        assert_eq!(paddle.score, 0);
    }

    #[test]
    fn test_paddle_move_up_pins_at_top() {
        let mut paddle = Paddle::from_center(Vec2::new(10.0, 40.0), 10, 70, 3);
        for _ in 0..10 {
            paddle.move_up();
            assert!(paddle.pos.y >= 0.0, "Paddle must never go negative");
        }
        assert_eq!(paddle.pos.y, 0.0, "Repeated move_up pins at the top edge");
    }

    #[test]
    fn test_paddle_move_down_pins_at_bottom() {
        let mut paddle = Paddle::from_center(Vec2::new(10.0, 560.0), 10, 70, 3);
        for _ in 0..20 {
            paddle.move_down(600.0);
        }
        assert_eq!(
            paddle.pos.y, 530.0,
            "Repeated move_down pins at field_height - paddle_height"
        );
    }

    #[test]
    fn test_apply_speed_tier_writes_ball_and_paddle() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), 6, 1, 1);
        let mut paddle = Paddle::from_center(Vec2::new(10.0, 300.0), 10, 70, 1);
        paddle.apply_speed_tier(&mut ball, 3, 3, 3);
        assert_eq!((ball.dx, ball.dy), (3, 3));
        assert_eq!(paddle.dy, 3);
    }
}
