//! World Module
//!
//! Voxel-space configuration and the heightfield collaborator the controller
//! queries for floor heights.

pub mod grid;
pub mod heightfield;

pub use grid::{VoxelColumn, VoxelGrid};
pub use heightfield::{ColumnField, FlatField, HeightField};
