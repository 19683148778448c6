//! Voxel Walker Engine
//!
//! A first-person avatar movement controller for voxel heightfield worlds.
//! Turns keyboard/mouse input into an orientation and velocity, integrates
//! that velocity against gravity and friction, and resolves collisions
//! against a sparse voxel heightfield using four sampled footprint corners.
//!
//! # Modules
//!
//! - [`camera`] - Yaw/pitch mouse-look orientation
//! - [`input`] - Explicit per-tick input state and key bindings
//! - [`physics`] - Velocity integration, footprint sampling, collision resolution
//! - [`world`] - Voxel grid transform and heightfield collaborator
//! - [`player`] - The walk controller tying everything together
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_walker_engine::{InputState, WalkController};
//! use voxel_walker_engine::world::FlatField;
//! use glam::Vec3;
//!
//! let field = FlatField::new(0.0);
//! let mut controller = WalkController::new();
//! controller.set_position(Vec3::new(0.0, 20.0, 0.0));
//! controller.enable();
//!
//! let mut input = InputState::new();
//! input.set_forward(true);
//!
//! // Each frame:
//! controller.update(delta_ms, &input, &field);
//! input.end_frame();
//! ```
//!
//! The host owns the window, event loop and rendering; it forwards key and
//! mouse events into an [`InputState`] (via [`input::MovementBindings`] for
//! keyboard translation) and reads the controller's position and orientation
//! back out for its camera attachment.

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

pub use camera::OrientationController;
pub use input::{InputState, MovementBindings, WalkAction};
pub use physics::footprint::{Footprint, FootprintSample};
pub use physics::integrator::{GroundedState, VelocityIntegrator, WalkConfig};
pub use physics::resolver::{Resolution, ResolveOutcome, resolve};
pub use player::WalkController;
pub use world::grid::{VoxelColumn, VoxelGrid};
pub use world::heightfield::{ColumnField, FlatField, HeightField};
