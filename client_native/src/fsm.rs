//! Game Loop State Machine
//!
//! Starting covers the first frame and the fixed pause after it; Running is
//! the steady tick loop; Stopped is terminal and only reachable through a
//! host quit signal, which the loop observes at tick boundaries.

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Starting,
    Running,
    Stopped,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    FirstFrameDrawn,
    Quit,
}

/// Loop Finite State Machine
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Starting,
        }
    }

    /// Get current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Attempt a transition; returns whether it was valid.
    pub fn transition(&mut self, action: LoopAction) -> bool {
        if let Some(next) = self.get_next_state(action) {
            self.state = next;
            true
        } else {
            false
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Starting, LoopAction::FirstFrameDrawn) => Some(LoopState::Running),
            // Quit wins from any live state; Stopped is terminal.
            (LoopState::Starting, LoopAction::Quit) => Some(LoopState::Stopped),
            (LoopState::Running, LoopAction::Quit) => Some(LoopState::Stopped),
            _ => None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state == LoopState::Stopped
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = LoopFsm::new();
        assert_eq!(fsm.state(), LoopState::Starting);
    }

    #[test]
    fn test_first_frame_starts_running() {
        let mut fsm = LoopFsm::new();
        assert!(fsm.transition(LoopAction::FirstFrameDrawn));
        assert_eq!(fsm.state(), LoopState::Running);
    }

    #[test]
    fn test_running_never_returns_to_starting() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::FirstFrameDrawn);
        assert!(!fsm.transition(LoopAction::FirstFrameDrawn));
        assert_eq!(fsm.state(), LoopState::Running);
    }

    #[test]
    fn test_quit_from_any_live_state() {
        let mut fsm = LoopFsm::new();
        assert!(fsm.transition(LoopAction::Quit));
        assert!(fsm.is_stopped());

        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::FirstFrameDrawn);
        assert!(fsm.transition(LoopAction::Quit));
        assert!(fsm.is_stopped());
    }

    #[test]
    fn test_stopped_is_terminal() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::Quit);
        assert!(!fsm.transition(LoopAction::FirstFrameDrawn));
        assert!(!fsm.transition(LoopAction::Quit));
        assert_eq!(fsm.state(), LoopState::Stopped);
    }
}
