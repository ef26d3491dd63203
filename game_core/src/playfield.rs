use glam::Vec2;

/// Playfield bounds, fixed for the whole session.
///
/// Pixel space: origin at the top-left, y grows downward. Owns no mutable
/// state; everything else clamps and bounces against these dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: u32,
    pub height: u32,
}

impl Playfield {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f(&self) -> f32 {
        self.height as f32
    }

    /// Centre point, used for ball spawn and reset.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Largest top-left y a paddle of the given height may have.
    pub fn max_paddle_y(&self, paddle_height: u32) -> f32 {
        self.height_f() - paddle_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let field = Playfield::new(800, 600);
        assert_eq!(field.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_max_paddle_y() {
        let field = Playfield::new(800, 600);
        assert_eq!(field.max_paddle_y(70), 530.0);
    }
}
