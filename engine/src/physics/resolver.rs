//! Collision Resolution
//!
//! The core of the controller: given a candidate world-frame velocity, it
//! predicts where the footprint corners end up, compares the predicted floor
//! against the current one, zeroes the horizontal axes that would push the
//! avatar into a step or wall it cannot clear, and snaps to the floor on
//! landing.
//!
//! This is an approximation, not occupancy testing. The step/wall test only
//! sees per-column surface heights, and the per-axis scan zeroes an axis
//! whenever ANY of the four paired corners changes voxel column along it,
//! even if that corner is not the one intersecting (visible on diagonal step
//! edges). That imprecision is part of the controller's behavior, kept as-is.
//!
//! After zeroing an axis the prediction is re-run once. A second reset on the
//! re-run aborts resolution for this tick: the partially-zeroed velocity is
//! returned without a landing test, the caller logs it, and the next tick
//! starts fresh. The two-pass bound is the only defensive mechanism in the
//! controller and must hold no matter what the heightfield answers.

use glam::Vec3;

use crate::physics::footprint::{
    FOOTPRINT_CORNERS, Footprint, FootprintSample, highest_floor, sample_footprint,
};
use crate::world::grid::VoxelGrid;
use crate::world::heightfield::HeightField;

/// Hard bound on prediction passes per tick.
pub const MAX_RESOLVE_PASSES: u32 = 2;

/// How a resolution pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// No step/wall intersection; the horizontal velocity passed through
    /// untouched (the landing branch may still have fired).
    Clear,
    /// One or both horizontal axes were zeroed and the re-prediction went
    /// through.
    Deflected,
    /// The re-prediction wanted to zero an axis again; resolution stopped
    /// early with the partially-zeroed velocity and no landing test.
    Aborted,
}

/// The resolver's verdict for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// The resolved world-frame velocity to commit.
    pub velocity: Vec3,
    /// Floor height to snap `position.y` to, if the landing branch fired.
    /// When set, `velocity.y` has been zeroed and the position snap replaces
    /// vertical integration for this tick.
    pub snapped_floor: Option<f32>,
    pub outcome: ResolveOutcome,
}

impl Resolution {
    /// Did the landing branch fire?
    #[inline]
    pub fn landed(&self) -> bool {
        self.snapped_floor.is_some()
    }
}

/// Resolve a candidate world-frame velocity against the heightfield.
///
/// `current` and `current_floor` are this tick's footprint samples and
/// highest floor at the unmoved position; the caller computes them once and
/// the resolver reuses them across both passes, pairing corners by index.
///
/// The algorithm per pass:
/// 1. Predict the footprint under the candidate velocity and take its
///    highest floor.
/// 2. Step/wall test: the predicted floor is higher than the current one and
///    the avatar's predicted height does not clear it. If so, zero every
///    horizontal axis on which any paired corner changed voxel column.
/// 3. If an axis was zeroed, re-run the prediction (once). A reset on the
///    second pass aborts.
/// 4. Landing test with the surviving velocity: if the predicted height is
///    below the predicted floor, zero the vertical velocity and report the
///    floor to snap to.
pub fn resolve(
    mut velocity: Vec3,
    position: Vec3,
    footprint: Footprint,
    current: &[FootprintSample; FOOTPRINT_CORNERS],
    current_floor: f32,
    field: &impl HeightField,
    grid: &VoxelGrid,
) -> Resolution {
    let mut outcome = ResolveOutcome::Clear;
    let mut pass = 0;

    loop {
        let predicted_y = position.y + velocity.y;
        let predicted = sample_footprint(position, footprint, velocity, grid);
        let predicted_floor = highest_floor(&predicted, field);

        if predicted_floor > current_floor && predicted_y < predicted_floor {
            let mut reset = false;
            for (before, after) in current.iter().zip(predicted.iter()) {
                if before.column.x != after.column.x {
                    velocity.x = 0.0;
                    reset = true;
                }
                if before.column.z != after.column.z {
                    velocity.z = 0.0;
                    reset = true;
                }
            }

            if reset {
                pass += 1;
                if pass >= MAX_RESOLVE_PASSES {
                    // Still resetting after a re-run: give up on this tick and
                    // hand back whatever velocity survived, landing untested.
                    return Resolution {
                        velocity,
                        snapped_floor: None,
                        outcome: ResolveOutcome::Aborted,
                    };
                }
                outcome = ResolveOutcome::Deflected;
                continue;
            }
        }

        if predicted_y < predicted_floor {
            velocity.y = 0.0;
            return Resolution {
                velocity,
                snapped_floor: Some(predicted_floor),
                outcome,
            };
        }

        return Resolution {
            velocity,
            snapped_floor: None,
            outcome,
        };
    }
}
