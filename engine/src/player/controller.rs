//! Walk Controller
//!
//! Ties the pieces together into one tick: mouse deltas turn the view,
//! the integrator advances the local-frame velocity, the velocity is rotated
//! into the world frame by yaw, the resolver checks it against the
//! heightfield, and the resolved velocity is committed to the position and
//! stored back in the local frame for the next tick.
//!
//! # Usage
//!
//! ```rust,ignore
//! use voxel_walker_engine::{InputState, WalkController};
//! use voxel_walker_engine::world::ColumnField;
//!
//! let field = ColumnField::new(0.0);
//! let mut controller = WalkController::new();
//! controller.enable();
//!
//! let mut input = InputState::new();
//! // ... host forwards key/mouse events into `input` ...
//!
//! // Each frame:
//! controller.update(delta_ms, &input, &field);
//! input.end_frame();
//!
//! // Host reads position/yaw/pitch back for its camera attachment:
//! let eye = controller.position();
//! let look = controller.forward_direction();
//! ```
//!
//! The controller is single-threaded and owns all of its mutable state; a
//! host with several avatars gives each its own `WalkController`.

use glam::{Quat, Vec3};

use crate::camera::orientation::OrientationController;
use crate::input::state::InputState;
use crate::physics::footprint::{Footprint, highest_floor, sample_footprint};
use crate::physics::integrator::{GroundedState, VelocityIntegrator, WalkConfig};
use crate::physics::resolver::{MAX_RESOLVE_PASSES, ResolveOutcome, resolve};
use crate::world::grid::VoxelGrid;
use crate::world::heightfield::HeightField;

/// First-person avatar movement controller over a voxel heightfield.
#[derive(Debug, Clone)]
pub struct WalkController {
    orientation: OrientationController,
    integrator: VelocityIntegrator,
    position: Vec3,
    footprint: Footprint,
    grid: VoxelGrid,
    grounded: GroundedState,
    enabled: bool,
}

impl Default for WalkController {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkController {
    /// Create a disabled controller at the origin with default tuning.
    pub fn new() -> Self {
        Self::with_config(WalkConfig::default(), Footprint::default(), VoxelGrid::default())
    }

    /// Create a disabled controller with custom tuning, footprint and grid.
    pub fn with_config(config: WalkConfig, footprint: Footprint, grid: VoxelGrid) -> Self {
        Self {
            orientation: OrientationController::new(),
            integrator: VelocityIntegrator::with_config(config),
            position: Vec3::ZERO,
            footprint,
            grid,
            grounded: GroundedState::airborne(),
            enabled: false,
        }
    }

    /// Start processing input and ticks.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop processing input and ticks; state is frozen until re-enabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Is the controller processing ticks?
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// World-space position of the yaw pivot.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Place the avatar (spawn/teleport). Does not touch velocity.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// The orientation pivot the host attaches its camera to.
    #[inline]
    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    /// Mutable orientation access, for hosts that set a spawn facing.
    pub fn orientation_mut(&mut self) -> &mut OrientationController {
        &mut self.orientation
    }

    /// Current look direction.
    #[inline]
    pub fn forward_direction(&self) -> Vec3 {
        self.orientation.forward_direction()
    }

    /// Local-frame velocity as stored between ticks.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.integrator.velocity()
    }

    /// Is the avatar resting on a floor (and thus able to jump)?
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded.can_jump()
    }

    /// The avatar's footprint rectangle.
    #[inline]
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Current walk tuning.
    #[inline]
    pub fn config(&self) -> &WalkConfig {
        self.integrator.config()
    }

    /// Advance the simulation by one frame.
    ///
    /// Does nothing while disabled. The input value is read-only here; the
    /// host calls `input.end_frame()` after the tick to clear the mouse
    /// delta and jump trigger.
    pub fn update(&mut self, delta: f32, input: &InputState, field: &impl HeightField) {
        if !self.enabled {
            return;
        }

        let (dx, dy) = input.mouse_delta();
        self.orientation.apply_mouse_delta(dx, dy);

        self.integrator.tick(delta, input, &mut self.grounded);

        // Velocity is stored yaw-relative; collision happens in world space
        let yaw_frame = Quat::from_rotation_y(self.orientation.yaw);
        let world_velocity = yaw_frame * self.integrator.velocity();

        let current = sample_footprint(self.position, self.footprint, Vec3::ZERO, &self.grid);
        let current_floor = highest_floor(&current, field);

        let resolution = resolve(
            world_velocity,
            self.position,
            self.footprint,
            &current,
            current_floor,
            field,
            &self.grid,
        );

        if resolution.outcome == ResolveOutcome::Aborted {
            log::warn!(
                "collision resolution still resetting after {MAX_RESOLVE_PASSES} passes; \
                 committing partially resolved velocity for this tick"
            );
        }

        let resolved = resolution.velocity;
        self.integrator.set_velocity(yaw_frame.inverse() * resolved);

        self.position.x += resolved.x;
        self.position.z += resolved.z;
        match resolution.snapped_floor {
            Some(floor) => {
                // Landing: snap straight onto the floor, not through v.y
                self.position.y = floor;
                self.grounded.land();
            }
            None => self.position.y += resolved.y,
        }
    }
}
