//! Mouse-Look Orientation
//!
//! Maintains the avatar's yaw and pitch from raw mouse deltas. Mouse movement
//! rotates the view directly with no smoothing, in the usual FPS convention:
//! moving the mouse right looks right, moving it down looks down.
//!
//! Key characteristics:
//! - Yaw is unbounded and wraps implicitly
//! - Pitch is clamped to ±90 degrees (straight up / straight down)
//! - Configurable sensitivity (default: 0.002 rad per mouse unit)
//! - The forward direction is a pure function of the two angles

use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Pitch clamp bound in radians: straight up / straight down.
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Default mouse sensitivity in radians per mouse unit.
pub const DEFAULT_SENSITIVITY: f32 = 0.002;

/// Compute the forward direction for a given yaw and pitch.
///
/// Rotates the rest direction (0, 0, -1) first by `pitch` about the local X
/// axis, then by `yaw` about the world Y axis. The camera itself carries no
/// independent rotation, so this fully determines the look direction.
#[inline]
pub fn forward_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch) * Vec3::NEG_Z
}

/// Yaw/pitch orientation state for the avatar's view.
///
/// Mutated only by [`apply_mouse_delta`](OrientationController::apply_mouse_delta);
/// everything else is read access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationController {
    /// Horizontal look angle in radians. Unbounded, wraps implicitly.
    pub yaw: f32,
    /// Vertical look angle in radians, clamped to [-PITCH_LIMIT, PITCH_LIMIT].
    pub pitch: f32,
    /// Mouse sensitivity in radians per mouse unit.
    pub sensitivity: f32,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl OrientationController {
    /// Create a new orientation controller looking toward -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orientation controller with custom sensitivity.
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    /// Apply a raw mouse delta to the two angles.
    ///
    /// Positive `dx` (mouse right) turns the view right; positive `dy`
    /// (mouse down) looks down. Pitch is clamped after the update so it can
    /// never leave the ±90 degree range, no matter the delta sequence.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Current forward (look) direction as a unit vector.
    #[inline]
    pub fn forward_direction(&self) -> Vec3 {
        forward_from_angles(self.yaw, self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let orientation = OrientationController::new();
        assert_eq!(orientation.yaw, 0.0);
        assert_eq!(orientation.pitch, 0.0);
        assert_eq!(orientation.sensitivity, DEFAULT_SENSITIVITY);
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut orientation = OrientationController::new();
        orientation.apply_mouse_delta(100.0, 0.0);

        // yaw -= dx * sensitivity, so yaw decreases
        assert!((orientation.yaw - (-0.2)).abs() < 0.001);
        assert_eq!(orientation.pitch, 0.0);

        // Looking right of -Z means a positive X component
        assert!(orientation.forward_direction().x > 0.0);
    }

    #[test]
    fn test_mouse_down_looks_down() {
        let mut orientation = OrientationController::new();
        orientation.apply_mouse_delta(0.0, 100.0);

        assert!((orientation.pitch - (-0.2)).abs() < 0.001);
        assert_eq!(orientation.yaw, 0.0);
        assert!(orientation.forward_direction().y < 0.0);
    }

    #[test]
    fn test_pitch_clamped_up() {
        let mut orientation = OrientationController::new();
        orientation.apply_mouse_delta(0.0, -100000.0);
        assert!((orientation.pitch - PITCH_LIMIT).abs() < 0.001);
    }

    #[test]
    fn test_pitch_clamped_down() {
        let mut orientation = OrientationController::new();
        orientation.apply_mouse_delta(0.0, 100000.0);
        assert!((orientation.pitch - (-PITCH_LIMIT)).abs() < 0.001);
    }

    #[test]
    fn test_pitch_bounded_under_any_sequence() {
        let mut orientation = OrientationController::new();
        let deltas = [
            (12.0, 4000.0),
            (-300.0, -9000.0),
            (0.0, 123456.0),
            (55.0, -0.5),
            (0.0, -777777.0),
        ];
        for (dx, dy) in deltas {
            orientation.apply_mouse_delta(dx, dy);
            assert!(orientation.pitch >= -PITCH_LIMIT);
            assert!(orientation.pitch <= PITCH_LIMIT);
        }
    }

    #[test]
    fn test_yaw_unbounded() {
        let mut orientation = OrientationController::new();
        orientation.apply_mouse_delta(-100000.0, 0.0);
        assert!(orientation.yaw > std::f32::consts::TAU);
    }

    #[test]
    fn test_forward_at_rest_is_neg_z() {
        let forward = OrientationController::new().forward_direction();
        assert!(forward.x.abs() < 0.001);
        assert!(forward.y.abs() < 0.001);
        assert!((forward.z - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_forward_quarter_turn() {
        // yaw = +90 degrees rotates -Z onto -X
        let forward = forward_from_angles(FRAC_PI_2, 0.0);
        assert!((forward.x - (-1.0)).abs() < 0.001);
        assert!(forward.y.abs() < 0.001);
        assert!(forward.z.abs() < 0.001);
    }

    #[test]
    fn test_forward_straight_up() {
        let forward = forward_from_angles(0.0, PITCH_LIMIT);
        assert!((forward.y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_forward_is_unit_length() {
        let mut orientation = OrientationController::new();
        orientation.apply_mouse_delta(123.0, 45.0);
        let forward = orientation.forward_direction();
        assert!((forward.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pure_function_matches_state() {
        let mut orientation = OrientationController::new();
        orientation.apply_mouse_delta(50.0, -30.0);
        let from_state = orientation.forward_direction();
        let from_angles = forward_from_angles(orientation.yaw, orientation.pitch);
        assert!((from_state - from_angles).length() < 1e-6);
    }
}
