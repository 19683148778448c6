//! Player Module
//!
//! The walk controller: owns orientation, velocity, position and grounded
//! state, and runs the full input → integrate → resolve → commit tick.

pub mod controller;

pub use controller::WalkController;
