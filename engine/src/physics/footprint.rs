//! Footprint Sampling
//!
//! Derives the four ground-contact sample points from the avatar's bounding
//! rectangle. Each corner carries both its world-space point and the voxel
//! column it falls into; the resolver compares columns between the current
//! footprint and the footprint predicted under a candidate velocity, so the
//! corner iteration order must be identical for both samplings.

use glam::Vec3;

use crate::world::grid::{VoxelColumn, VoxelGrid};
use crate::world::heightfield::HeightField;

/// Number of ground-contact corners per footprint.
pub const FOOTPRINT_CORNERS: usize = 4;

/// The avatar's bounding rectangle in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f32,
    pub depth: f32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            width: 1.0,
            depth: 1.0,
        }
    }
}

impl Footprint {
    pub fn new(width: f32, depth: f32) -> Self {
        Self { width, depth }
    }
}

/// One footprint corner: world-space point plus its voxel column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintSample {
    pub world: Vec3,
    pub column: VoxelColumn,
}

/// Sample the four footprint corners at `position`, displaced by `offset`.
///
/// Corners are generated in a fixed order over `corner_x` then `corner_z`,
/// each at `position + (width * (corner_x + 0.5), 0, depth * (corner_z + 0.5))
/// + offset`. Pass `Vec3::ZERO` for the current footprint, or the candidate
/// velocity to predict where the corners end up.
pub fn sample_footprint(
    position: Vec3,
    footprint: Footprint,
    offset: Vec3,
    grid: &VoxelGrid,
) -> [FootprintSample; FOOTPRINT_CORNERS] {
    let mut samples = [FootprintSample {
        world: Vec3::ZERO,
        column: VoxelColumn::new(0, 0),
    }; FOOTPRINT_CORNERS];

    let mut index = 0;
    for corner_x in 0..2 {
        for corner_z in 0..2 {
            let world = position
                + Vec3::new(
                    footprint.width * (corner_x as f32 + 0.5),
                    0.0,
                    footprint.depth * (corner_z as f32 + 0.5),
                )
                + offset;
            samples[index] = FootprintSample {
                world,
                column: grid.world_to_column(world),
            };
            index += 1;
        }
    }

    samples
}

/// Highest floor under a set of footprint samples.
///
/// Maximum of the heightfield's surface height over the sampled columns;
/// 0.0 for an empty slice (the fixed four-corner arrays never are).
pub fn highest_floor(samples: &[FootprintSample], field: &impl HeightField) -> f32 {
    samples
        .iter()
        .map(|sample| field.surface_height(sample.column.x, sample.column.z))
        .reduce(f32::max)
        .unwrap_or(0.0)
}
