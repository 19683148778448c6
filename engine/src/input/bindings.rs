//! Keyboard Bindings
//!
//! Defines the movement key bindings as a data structure so hosts can remap
//! them, and translates winit key events into [`InputState`] edits. The
//! defaults mirror the classic layout: WASD plus the arrow keys for
//! movement, Space for jump.

use winit::keyboard::KeyCode;

use super::state::InputState;

/// Controller action a key maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAction {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

/// Movement key bindings (WASD + arrows + jump).
///
/// Each direction has a primary and an alternate key; both behave
/// identically.
#[derive(Debug, Clone)]
pub struct MovementBindings {
    pub forward: KeyCode,
    pub forward_alt: KeyCode,
    pub backward: KeyCode,
    pub backward_alt: KeyCode,
    pub left: KeyCode,
    pub left_alt: KeyCode,
    pub right: KeyCode,
    pub right_alt: KeyCode,
    pub jump: KeyCode,
}

impl Default for MovementBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            forward_alt: KeyCode::ArrowUp,
            backward: KeyCode::KeyS,
            backward_alt: KeyCode::ArrowDown,
            left: KeyCode::KeyA,
            left_alt: KeyCode::ArrowLeft,
            right: KeyCode::KeyD,
            right_alt: KeyCode::ArrowRight,
            jump: KeyCode::Space,
        }
    }
}

impl MovementBindings {
    /// Create the default WASD + arrows + Space bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a key code into the action it is bound to, if any.
    pub fn classify(&self, key: KeyCode) -> Option<WalkAction> {
        if key == self.forward || key == self.forward_alt {
            Some(WalkAction::Forward)
        } else if key == self.backward || key == self.backward_alt {
            Some(WalkAction::Backward)
        } else if key == self.left || key == self.left_alt {
            Some(WalkAction::Left)
        } else if key == self.right || key == self.right_alt {
            Some(WalkAction::Right)
        } else if key == self.jump {
            Some(WalkAction::Jump)
        } else {
            None
        }
    }

    /// Apply a key press/release event to an input state.
    ///
    /// Returns `true` if the key was bound and was handled.
    pub fn apply_key(&self, input: &mut InputState, key: KeyCode, pressed: bool) -> bool {
        match self.classify(key) {
            Some(WalkAction::Forward) => input.set_forward(pressed),
            Some(WalkAction::Backward) => input.set_backward(pressed),
            Some(WalkAction::Left) => input.set_left(pressed),
            Some(WalkAction::Right) => input.set_right(pressed),
            Some(WalkAction::Jump) => input.set_jump(pressed),
            None => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = MovementBindings::new();
        assert_eq!(bindings.classify(KeyCode::KeyW), Some(WalkAction::Forward));
        assert_eq!(bindings.classify(KeyCode::KeyS), Some(WalkAction::Backward));
        assert_eq!(bindings.classify(KeyCode::KeyA), Some(WalkAction::Left));
        assert_eq!(bindings.classify(KeyCode::KeyD), Some(WalkAction::Right));
        assert_eq!(bindings.classify(KeyCode::Space), Some(WalkAction::Jump));
    }

    #[test]
    fn test_arrow_alternates() {
        let bindings = MovementBindings::new();
        assert_eq!(
            bindings.classify(KeyCode::ArrowUp),
            Some(WalkAction::Forward)
        );
        assert_eq!(
            bindings.classify(KeyCode::ArrowDown),
            Some(WalkAction::Backward)
        );
        assert_eq!(bindings.classify(KeyCode::ArrowLeft), Some(WalkAction::Left));
        assert_eq!(
            bindings.classify(KeyCode::ArrowRight),
            Some(WalkAction::Right)
        );
    }

    #[test]
    fn test_unbound_key() {
        let bindings = MovementBindings::new();
        assert_eq!(bindings.classify(KeyCode::KeyQ), None);

        let mut input = InputState::new();
        assert!(!bindings.apply_key(&mut input, KeyCode::KeyQ, true));
        assert!(!input.is_any_movement_pressed());
    }

    #[test]
    fn test_apply_key_updates_state() {
        let bindings = MovementBindings::new();
        let mut input = InputState::new();

        assert!(bindings.apply_key(&mut input, KeyCode::KeyW, true));
        assert!(input.forward());

        assert!(bindings.apply_key(&mut input, KeyCode::ArrowUp, false));
        assert!(!input.forward());

        assert!(bindings.apply_key(&mut input, KeyCode::Space, true));
        assert!(input.jump_triggered());
    }

    #[test]
    fn test_remapped_binding() {
        let bindings = MovementBindings {
            jump: KeyCode::KeyJ,
            ..MovementBindings::new()
        };
        assert_eq!(bindings.classify(KeyCode::KeyJ), Some(WalkAction::Jump));
        assert_eq!(bindings.classify(KeyCode::Space), None);
    }
}
