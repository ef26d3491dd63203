use crate::{KeyState, Paddle, Playfield};

/// Apply the held keys to both paddles for one tick.
///
/// Order matches the original's polling: right paddle (arrows) before left
/// paddle (W/S), up before down. Opposite keys held together cancel out
/// only when the paddle sits clear of both edges; the clamps in the move
/// operations handle the rest.
pub fn apply_inputs(keys: &KeyState, left: &mut Paddle, right: &mut Paddle, field: &Playfield) {
    if keys.right_up {
        right.move_up();
    }
    if keys.right_down {
        right.move_down(field.height_f());
    }
    if keys.left_up {
        left.move_up();
    }
    if keys.left_down {
        left.move_down(field.height_f());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Paddle, Paddle, Playfield) {
        let left = Paddle::from_center(Vec2::new(10.0, 300.0), 10, 70, 2);
        let right = Paddle::from_center(Vec2::new(790.0, 300.0), 10, 70, 2);
        (left, right, Playfield::new(800, 600))
    }

    #[test]
    fn test_idle_keys_move_nothing() {
        let (mut left, mut right, field) = setup();
        apply_inputs(&KeyState::new(), &mut left, &mut right, &field);
        assert_eq!(left.pos.y, 265.0);
        assert_eq!(right.pos.y, 265.0);
    }

    #[test]
    fn test_each_side_moves_independently() {
        let (mut left, mut right, field) = setup();
        let keys = KeyState {
            right_up: true,
            left_down: true,
            ..KeyState::new()
        };
        apply_inputs(&keys, &mut left, &mut right, &field);
        assert_eq!(right.pos.y, 263.0, "Right paddle steps up");
        assert_eq!(left.pos.y, 267.0, "Left paddle steps down");
    }

    #[test]
    fn test_held_key_respects_clamp() {
        let (mut left, mut right, field) = setup();
        let keys = KeyState {
            left_up: true,
            ..KeyState::new()
        };
        for _ in 0..200 {
            apply_inputs(&keys, &mut left, &mut right, &field);
        }
        assert_eq!(left.pos.y, 0.0, "Paddle pinned at the top, never negative");
    }
}
