//! Keyboard input handling
//!
//! Exactly four logical keys matter: arrows drive the right paddle, W/S
//! the left one. Everything else is ignored.

use game_core::KeyState;
use winit::keyboard::KeyCode;

/// Tracks which of the four game keys are currently held. Fed from window
/// events, polled once per tick as a [`KeyState`] snapshot.
#[derive(Debug, Default)]
pub struct Keyboard {
    keys: KeyState,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held state from a key press or release.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::ArrowUp => self.keys.right_up = pressed,
            KeyCode::ArrowDown => self.keys.right_down = pressed,
            KeyCode::KeyW => self.keys.left_up = pressed,
            KeyCode::KeyS => self.keys.left_down = pressed,
            _ => {}
        }
    }

    /// Current key state, read once at the top of each tick.
    pub fn snapshot(&self) -> KeyState {
        self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_drive_right_paddle() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::ArrowUp, true);
        assert!(keyboard.snapshot().right_up);
        keyboard.handle_key(KeyCode::ArrowUp, false);
        keyboard.handle_key(KeyCode::ArrowDown, true);
        let keys = keyboard.snapshot();
        assert!(!keys.right_up);
        assert!(keys.right_down);
    }

    #[test]
    fn test_ws_keys_drive_left_paddle() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyW, true);
        keyboard.handle_key(KeyCode::KeyS, true);
        let keys = keyboard.snapshot();
        assert!(keys.left_up);
        assert!(keys.left_down);
        assert!(!keys.right_up);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::Space, true);
        keyboard.handle_key(KeyCode::KeyA, true);
        let keys = keyboard.snapshot();
        assert!(!keys.left_up && !keys.left_down && !keys.right_up && !keys.right_down);
    }
}
