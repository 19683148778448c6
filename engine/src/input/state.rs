//! Per-Tick Input State
//!
//! Tracks everything the walk controller consumes in one tick:
//! - Four directional key flags (held state, persists across frames)
//! - Jump with a press-edge debounce (triggers once per press)
//! - Accumulated mouse delta for camera rotation
//!
//! Input state is an explicit value handed to the controller, not a set of
//! flags captured by event closures. Call [`end_frame`](InputState::end_frame)
//! after each tick to clear per-frame state; held keys persist until released.

/// Explicit input state for one simulation tick.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    // Directional keys (held state)
    key_forward: bool,
    key_backward: bool,
    key_left: bool,
    key_right: bool,

    // Jump key with press-edge debounce
    key_jump: bool,
    jump_triggered: bool,

    // Mouse delta accumulated since the last end_frame
    mouse_delta_x: f32,
    mouse_delta_y: f32,
}

impl InputState {
    /// Create a new input state with all inputs released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forward key held state.
    pub fn set_forward(&mut self, pressed: bool) {
        self.key_forward = pressed;
    }

    /// Set the backward key held state.
    pub fn set_backward(&mut self, pressed: bool) {
        self.key_backward = pressed;
    }

    /// Set the left strafe key held state.
    pub fn set_left(&mut self, pressed: bool) {
        self.key_left = pressed;
    }

    /// Set the right strafe key held state.
    pub fn set_right(&mut self, pressed: bool) {
        self.key_right = pressed;
    }

    /// Set the jump key state.
    ///
    /// The jump trigger fires on the press edge only: pressing sets it once,
    /// holding does not re-trigger, and it must be released before another
    /// press can trigger again.
    pub fn set_jump(&mut self, pressed: bool) {
        if pressed && !self.key_jump {
            self.jump_triggered = true;
        }
        self.key_jump = pressed;
    }

    /// Accumulate a mouse movement delta.
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta_x += dx;
        self.mouse_delta_y += dy;
    }

    /// Forward key held?
    #[inline]
    pub fn forward(&self) -> bool {
        self.key_forward
    }

    /// Backward key held?
    #[inline]
    pub fn backward(&self) -> bool {
        self.key_backward
    }

    /// Left strafe key held?
    #[inline]
    pub fn left(&self) -> bool {
        self.key_left
    }

    /// Right strafe key held?
    #[inline]
    pub fn right(&self) -> bool {
        self.key_right
    }

    /// Did the jump key go down since the last `end_frame`?
    #[inline]
    pub fn jump_triggered(&self) -> bool {
        self.jump_triggered
    }

    /// Accumulated mouse delta since the last `end_frame` as (dx, dy).
    #[inline]
    pub fn mouse_delta(&self) -> (f32, f32) {
        (self.mouse_delta_x, self.mouse_delta_y)
    }

    /// Any directional key held?
    pub fn is_any_movement_pressed(&self) -> bool {
        self.key_forward || self.key_backward || self.key_left || self.key_right
    }

    /// Clear per-frame state: mouse delta and the jump trigger.
    ///
    /// Held key states persist, they are cleared by their release events.
    pub fn end_frame(&mut self) {
        self.mouse_delta_x = 0.0;
        self.mouse_delta_y = 0.0;
        self.jump_triggered = false;
    }

    /// Clear everything, held keys included. Use on focus loss.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
