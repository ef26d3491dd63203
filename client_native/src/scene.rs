//! Frame descriptors.
//!
//! Each drawable is a small concrete descriptor recomputed every frame
//! from the game state; drawing pushes rect/circle instances into a
//! [`FrameBatch`] that the renderer uploads in one go. Everything is
//! drawn in white on black, like the original.

use game_core::{Ball, GameState, Paddle};

use crate::renderer::resources::InstanceData;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// Score text placement: digit blocks centred at width/2 -+ 100, y 50.
const SCORE_OFFSET_X: f32 = 100.0;
const SCORE_CENTER_Y: f32 = 50.0;
const SCORE_HEIGHT: f32 = 75.0;

// Centre line: 70 dashes of 4x4 px with a 5 px gap, 2 px left of centre.
const DASH_COUNT: u32 = 70;
const DASH_SIZE: f32 = 4.0;
const DASH_GAP: f32 = 5.0;

/// Accumulated instances for one frame.
#[derive(Debug, Default)]
pub struct FrameBatch {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.circles.clear();
    }

    /// Axis-aligned rect by top-left corner and size.
    pub fn push_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.rects.push(InstanceData {
            transform: [x, y, w, h],
            tint: WHITE,
        });
    }

    /// Circle by centre and radius.
    pub fn push_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.circles.push(InstanceData {
            transform: [cx, cy, radius, radius],
            tint: WHITE,
        });
    }
}

/// Anything that knows how to put itself into a frame. Each implementor is
/// a concrete, sealed shape descriptor; there is no hierarchy.
pub trait Drawable {
    fn draw(&self, frame: &mut FrameBatch);
}

/// A paddle, drawn as its rectangle.
pub struct PaddleSprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PaddleSprite {
    pub fn for_paddle(paddle: &Paddle) -> Self {
        Self {
            x: paddle.pos.x,
            y: paddle.pos.y,
            width: paddle.width as f32,
            height: paddle.height as f32,
        }
    }
}

impl Drawable for PaddleSprite {
    fn draw(&self, frame: &mut FrameBatch) {
        frame.push_rect(self.x, self.y, self.width, self.height);
    }
}

/// The ball, drawn as a filled circle.
pub struct BallSprite {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl BallSprite {
    pub fn for_ball(ball: &Ball) -> Self {
        Self {
            cx: ball.pos.x,
            cy: ball.pos.y,
            radius: ball.radius_f(),
        }
    }
}

impl Drawable for BallSprite {
    fn draw(&self, frame: &mut FrameBatch) {
        frame.push_circle(self.cx, self.cy, self.radius);
    }
}

/// Middle dotted line: a fixed column of dashes from the top of the field.
pub struct DottedLine {
    pub x: f32,
    pub dash_width: f32,
    pub dash_height: f32,
    pub gap: f32,
    pub count: u32,
}

impl DottedLine {
    pub fn center_line(field_width: f32) -> Self {
        Self {
            x: field_width / 2.0 - 2.0,
            dash_width: DASH_SIZE,
            dash_height: DASH_SIZE,
            gap: DASH_GAP,
            count: DASH_COUNT,
        }
    }
}

impl Drawable for DottedLine {
    fn draw(&self, frame: &mut FrameBatch) {
        let mut y = 0.0;
        for _ in 0..self.count {
            frame.push_rect(self.x, y, self.dash_width, self.dash_height);
            y += self.dash_height + self.gap;
        }
    }
}

// Seven-segment layout, one bit per segment:
//
//      aaa
//     f   b
//      ggg
//     e   c
//      ddd
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

const DIGIT_SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,                 // 2
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,                 // 3
    SEG_F | SEG_G | SEG_B | SEG_C,                         // 4
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,                 // 5
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_D | SEG_C,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,         // 9
];

/// A player's score rendered as seven-segment digits, centred on a point.
pub struct ScoreText {
    pub center_x: f32,
    pub center_y: f32,
    pub height: f32,
    pub value: u32,
}

impl ScoreText {
    pub fn new(center_x: f32, center_y: f32, value: u32) -> Self {
        Self {
            center_x,
            center_y,
            height: SCORE_HEIGHT,
            value,
        }
    }

    fn digits(&self) -> Vec<u32> {
        let mut digits = Vec::new();
        let mut value = self.value;
        loop {
            digits.push(value % 10);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        digits.reverse();
        digits
    }
}

impl Drawable for ScoreText {
    fn draw(&self, frame: &mut FrameBatch) {
        let h = self.height;
        let w = h * 0.6;
        let t = h * 0.14; // segment thickness
        let spacing = w * 0.3;

        let digits = self.digits();
        let total_width = digits.len() as f32 * w + (digits.len() - 1) as f32 * spacing;
        let mut x = self.center_x - total_width / 2.0;
        let y = self.center_y - h / 2.0;

        for digit in digits {
            let mask = DIGIT_SEGMENTS[digit as usize];
            if mask & SEG_A != 0 {
                frame.push_rect(x, y, w, t);
            }
            if mask & SEG_B != 0 {
                frame.push_rect(x + w - t, y, t, h / 2.0);
            }
            if mask & SEG_C != 0 {
                frame.push_rect(x + w - t, y + h / 2.0, t, h / 2.0);
            }
            if mask & SEG_D != 0 {
                frame.push_rect(x, y + h - t, w, t);
            }
            if mask & SEG_E != 0 {
                frame.push_rect(x, y + h / 2.0, t, h / 2.0);
            }
            if mask & SEG_F != 0 {
                frame.push_rect(x, y, t, h / 2.0);
            }
            if mask & SEG_G != 0 {
                frame.push_rect(x, y + h / 2.0 - t / 2.0, w, t);
            }
            x += w + spacing;
        }
    }
}

/// Rebuild the whole frame from the game state, in the original's draw
/// order: score texts, centre line, ball, paddles.
pub fn build_frame(state: &GameState, frame: &mut FrameBatch) {
    frame.clear();

    let mid_x = state.field.width_f() / 2.0;
    let drawables: [&dyn Drawable; 6] = [
        &ScoreText::new(mid_x - SCORE_OFFSET_X, SCORE_CENTER_Y, state.left.score),
        &ScoreText::new(mid_x + SCORE_OFFSET_X, SCORE_CENTER_Y, state.right.score),
        &DottedLine::center_line(state.field.width_f()),
        &BallSprite::for_ball(&state.ball),
        &PaddleSprite::for_paddle(&state.left),
        &PaddleSprite::for_paddle(&state.right),
    ];
    for drawable in drawables {
        drawable.draw(frame);
    }
}
