/// Snapshot of the four logical keys the game cares about, polled once per
/// tick by the host shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub right_up: bool,
    pub right_down: bool,
    pub left_up: bool,
    pub left_down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Count of paddle-ball contacts across the whole game.
///
/// The speed policy consumes it once, on exact equality with its threshold.
/// Nothing ever resets it, so that bump fires at most once per game; the
/// original behaves the same way and the quirk is kept as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rally {
    pub hits: u32,
}

impl Rally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }
}
