/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels, y grows downward)
    pub const FIELD_WIDTH: u32 = 800;
    pub const FIELD_HEIGHT: u32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: u32 = 10;
    pub const PADDLE_HEIGHT: u32 = 70;
    pub const PADDLE_STEP: u32 = 1; // pixels per tick
    pub const PADDLE_MARGIN: u32 = 10; // centre-line inset from the side walls

    // Ball
    pub const BALL_RADIUS: u32 = 6;
    pub const BALL_STEP: u32 = 1; // pixels per tick, per axis

    // Loop
    pub const TICK_RATE: u32 = 100; // ticks per second
    pub const START_DELAY_MS: u64 = 2000; // pause after the first frame
}
