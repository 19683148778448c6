//! Velocity Integration
//!
//! Advances the avatar's local-frame velocity by one tick: exponential
//! walk friction on the horizontal axes, unconditional gravity on the
//! vertical axis, per-key input acceleration, and the one-shot jump impulse.
//!
//! # Physics Model
//!
//! - The velocity vector lives in the avatar's yaw-relative frame:
//!   x = lateral, y = vertical, z = forward/back
//! - Friction is exponential decay: velocity asymptotically approaches zero
//!   but never reaches it in finite time
//! - Gravity is applied every tick, grounded or not; the resolver's landing
//!   branch cancels it when the avatar is resting on a floor
//! - Each directional key contributes its full speed independently, so
//!   diagonal movement is intentionally faster than straight movement
//! - Jump fires once per press edge, gated on the grounded state

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::state::InputState;

/// Whether the avatar is resting on a floor and may jump.
///
/// Set by the resolver's landing branch, cleared exactly once per jump
/// impulse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundedState {
    can_jump: bool,
}

impl GroundedState {
    /// Start airborne (the spawn position may be above the floor).
    pub fn airborne() -> Self {
        Self { can_jump: false }
    }

    /// Start resting on a floor.
    pub fn grounded() -> Self {
        Self { can_jump: true }
    }

    /// May the avatar jump this tick?
    #[inline]
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    /// Mark the avatar as resting on a floor (landing branch fired).
    pub fn land(&mut self) {
        self.can_jump = true;
    }

    /// Consume the grounded state on a jump impulse.
    pub fn clear(&mut self) {
        self.can_jump = false;
    }
}

/// Walk physics tuning.
///
/// All values are plain numbers in the controller's tick units; the defaults
/// are the tuned values the controller was built around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Input acceleration per scaled tick.
    pub walk_speed: f32,
    /// Cap on the per-tick input acceleration.
    pub max_walk_speed: f32,
    /// Horizontal friction factor per scaled tick.
    pub walk_deceleration: f32,
    /// Cap on the per-tick friction factor.
    pub max_deceleration: f32,
    /// One-shot vertical impulse added on jump.
    pub jump_height: f32,
    /// Vertical acceleration subtracted every tick.
    pub gravity: f32,
    /// Factor applied to the raw frame delta before any physics math.
    pub delta_scale: f32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        let walk_speed = 0.8;
        let walk_deceleration = 0.08;
        Self {
            walk_speed,
            max_walk_speed: walk_speed * 5.0,
            walk_deceleration,
            max_deceleration: walk_deceleration * 5.0,
            jump_height: 15.0,
            gravity: 0.25,
            delta_scale: 0.1,
        }
    }
}

/// On-disk shape of a tuning file: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WalkConfigFile {
    walk_speed: Option<f32>,
    max_walk_speed: Option<f32>,
    walk_deceleration: Option<f32>,
    max_deceleration: Option<f32>,
    jump_height: Option<f32>,
    gravity: Option<f32>,
    delta_scale: Option<f32>,
}

impl WalkConfig {
    /// Parse a tuning file. Missing fields keep their defaults, except the
    /// two caps: when absent they follow their base value at the usual 5x
    /// ratio, so overriding `walk_speed` alone rescales `max_walk_speed`
    /// with it. An explicit cap in the file always wins.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        let file: WalkConfigFile = serde_json::from_str(source)?;
        let defaults = Self::default();
        let walk_speed = file.walk_speed.unwrap_or(defaults.walk_speed);
        let walk_deceleration = file.walk_deceleration.unwrap_or(defaults.walk_deceleration);
        Ok(Self {
            walk_speed,
            max_walk_speed: file.max_walk_speed.unwrap_or(walk_speed * 5.0),
            walk_deceleration,
            max_deceleration: file.max_deceleration.unwrap_or(walk_deceleration * 5.0),
            jump_height: file.jump_height.unwrap_or(defaults.jump_height),
            gravity: file.gravity.unwrap_or(defaults.gravity),
            delta_scale: file.delta_scale.unwrap_or(defaults.delta_scale),
        })
    }
}

/// Local-frame velocity state and its per-tick integration.
#[derive(Debug, Clone)]
pub struct VelocityIntegrator {
    velocity: Vec3,
    config: WalkConfig,
}

impl Default for VelocityIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityIntegrator {
    /// Create an integrator at rest with default tuning.
    pub fn new() -> Self {
        Self::with_config(WalkConfig::default())
    }

    /// Create an integrator at rest with custom tuning.
    pub fn with_config(config: WalkConfig) -> Self {
        Self {
            velocity: Vec3::ZERO,
            config,
        }
    }

    /// Current local-frame velocity.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Replace the stored velocity (the controller writes back the resolved
    /// velocity, un-rotated to the local frame, after collision resolution).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Current tuning.
    #[inline]
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Replace the tuning.
    pub fn set_config(&mut self, config: WalkConfig) {
        self.config = config;
    }

    /// Integrate one tick of friction, gravity, input and jump.
    ///
    /// `delta` is the raw frame delta; it is scaled by
    /// [`WalkConfig::delta_scale`] before use. Opposing keys cancel, and
    /// simultaneous forward + strafe input is not re-normalized.
    pub fn tick(&mut self, delta: f32, input: &InputState, grounded: &mut GroundedState) {
        let delta = delta * self.config.delta_scale;

        let deceleration = (self.config.walk_deceleration * delta).min(self.config.max_deceleration);
        self.velocity.x += -self.velocity.x * deceleration;
        self.velocity.z += -self.velocity.z * deceleration;

        self.velocity.y -= self.config.gravity * delta;

        let speed = (self.config.walk_speed * delta).min(self.config.max_walk_speed);
        if input.forward() {
            self.velocity.z -= speed;
        }
        if input.backward() {
            self.velocity.z += speed;
        }
        if input.left() {
            self.velocity.x -= speed;
        }
        if input.right() {
            self.velocity.x += speed;
        }

        if input.jump_triggered() && grounded.can_jump() {
            self.velocity.y += self.config.jump_height;
            grounded.clear();
        }
    }
}
