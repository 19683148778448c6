//! Camera Module
//!
//! Provides the yaw/pitch orientation model driven by mouse deltas.

pub mod orientation;

pub use orientation::{OrientationController, forward_from_angles};
