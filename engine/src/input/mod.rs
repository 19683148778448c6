//! Input Module
//!
//! Explicit per-tick input state plus keyboard bindings. The host owns the
//! window and event loop; it translates key events through
//! [`MovementBindings`] into an [`InputState`] value and passes that into the
//! controller each tick.

pub mod bindings;
pub mod state;

pub use bindings::{MovementBindings, WalkAction};
pub use state::InputState;
