//! Voxel Grid Configuration
//!
//! Maps world-space points onto voxel columns. The controller only ever
//! needs the horizontal (x, z) column a point falls into; vertical occupancy
//! is the heightfield's business.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A voxel column coordinate in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelColumn {
    pub x: i64,
    pub z: i64,
}

impl VoxelColumn {
    pub fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }
}

/// World-to-voxel transform configuration.
///
/// 1 voxel = `voxel_size` world units on each horizontal axis; columns are
/// found by floor division, so negative coordinates land in negative columns
/// rather than rounding toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoxelGrid {
    /// Edge length of one voxel in world units.
    pub voxel_size: f32,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self { voxel_size: 1.0 }
    }
}

impl VoxelGrid {
    /// Create a grid with the given voxel size.
    pub fn new(voxel_size: f32) -> Self {
        Self { voxel_size }
    }

    /// The voxel column a world-space point falls into.
    #[inline]
    pub fn world_to_column(&self, point: Vec3) -> VoxelColumn {
        VoxelColumn {
            x: (point.x / self.voxel_size).floor() as i64,
            z: (point.z / self.voxel_size).floor() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_grid() {
        let grid = VoxelGrid::default();
        assert_eq!(
            grid.world_to_column(Vec3::new(0.5, 3.0, 1.9)),
            VoxelColumn::new(0, 1)
        );
        assert_eq!(
            grid.world_to_column(Vec3::new(2.0, 0.0, -0.1)),
            VoxelColumn::new(2, -1)
        );
    }

    #[test]
    fn test_negative_coordinates_floor() {
        let grid = VoxelGrid::default();
        // Floor division: -0.5 is column -1, not 0
        assert_eq!(
            grid.world_to_column(Vec3::new(-0.5, 0.0, -1.5)),
            VoxelColumn::new(-1, -2)
        );
    }

    #[test]
    fn test_larger_voxels() {
        let grid = VoxelGrid::new(2.0);
        assert_eq!(
            grid.world_to_column(Vec3::new(3.9, 0.0, -0.1)),
            VoxelColumn::new(1, -1)
        );
    }

    #[test]
    fn test_y_ignored() {
        let grid = VoxelGrid::default();
        let low = grid.world_to_column(Vec3::new(1.5, -100.0, 1.5));
        let high = grid.world_to_column(Vec3::new(1.5, 100.0, 1.5));
        assert_eq!(low, high);
    }

    #[test]
    fn test_from_json() {
        let grid: VoxelGrid = serde_json::from_str(r#"{ "voxel_size": 0.5 }"#).unwrap();
        assert_eq!(grid.voxel_size, 0.5);

        // Missing fields fall back to defaults
        let grid: VoxelGrid = serde_json::from_str("{}").unwrap();
        assert_eq!(grid.voxel_size, 1.0);
    }
}
