pub mod components;
pub mod config;
pub mod params;
pub mod playfield;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use playfield::*;
pub use resources::*;

use glam::Vec2;
use systems::*;

/// The whole simulation for one session: playfield, ball, both paddles,
/// rally counter. Owned exclusively by the game loop; nothing here is
/// shared or touched off-thread.
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Playfield,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub rally: Rally,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        let field = Playfield::new(config.field_width, config.field_height);
        let mid_y = field.height_f() / 2.0;
        Self {
            ball: Ball::new(field.center(), config.ball_radius, config.ball_step, config.ball_step),
            left: Paddle::from_center(
                Vec2::new(config.paddle_margin as f32, mid_y),
                config.paddle_width,
                config.paddle_height,
                config.paddle_step,
            ),
            right: Paddle::from_center(
                Vec2::new(field.width_f() - config.paddle_margin as f32, mid_y),
                config.paddle_width,
                config.paddle_height,
                config.paddle_step,
            ),
            rally: Rally::new(),
            field,
        }
    }

    /// Input phase: held keys invoke paddle movement.
    pub fn apply_inputs(&mut self, keys: &KeyState) {
        apply_inputs(keys, &mut self.left, &mut self.right, &self.field);
    }

    /// Physics phase: collisions and scoring, then the speed policy.
    ///
    /// Kept separate from the input phase so a host can render the frame
    /// in between, which is the order the game loop runs in.
    pub fn advance(&mut self, events: &mut Events) {
        resolve_collisions(
            &mut self.ball,
            &mut self.left,
            &mut self.right,
            &self.field,
            &mut self.rally,
            events,
        );
        apply_speed_policy(&mut self.ball, &mut self.left, &mut self.right, &self.rally);
    }
}

/// Run one full deterministic tick: input, collisions/scoring, speed
/// policy. `events` is cleared first and reports what happened this tick.
pub fn step(state: &mut GameState, keys: &KeyState, events: &mut Events) {
    events.clear();
    state.apply_inputs(keys);
    state.advance(events);
}
