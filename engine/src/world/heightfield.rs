//! Heightfield Collaborator
//!
//! The controller never inspects voxel occupancy directly. Its one question
//! about the world is "what is the topmost solid surface at column (x, z)?",
//! asked at most eight times per tick (four current corners, four predicted).
//! Implementations must be cheap, read-only, and total: every column answers
//! with a finite height (a large negative value works as "no floor").

use std::collections::HashMap;

/// Surface-height query over voxel columns.
pub trait HeightField {
    /// Topmost solid surface height at column (x, z), in world units.
    fn surface_height(&self, x: i64, z: i64) -> f32;
}

impl<T: HeightField + ?Sized> HeightField for &T {
    fn surface_height(&self, x: i64, z: i64) -> f32 {
        (**self).surface_height(x, z)
    }
}

/// A world with one flat floor everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatField {
    pub height: f32,
}

impl FlatField {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl HeightField for FlatField {
    fn surface_height(&self, _x: i64, _z: i64) -> f32 {
        self.height
    }
}

/// A sparse heightfield: a base height plus per-column overrides.
///
/// Handy for demos and tests that need a step or wall at a known column.
#[derive(Debug, Clone, Default)]
pub struct ColumnField {
    base: f32,
    columns: HashMap<(i64, i64), f32>,
}

impl ColumnField {
    /// Create a field where every column starts at `base` height.
    pub fn new(base: f32) -> Self {
        Self {
            base,
            columns: HashMap::new(),
        }
    }

    /// Override the surface height of one column.
    pub fn set(&mut self, x: i64, z: i64, height: f32) {
        self.columns.insert((x, z), height);
    }

    /// Remove a column override, restoring the base height.
    pub fn clear(&mut self, x: i64, z: i64) {
        self.columns.remove(&(x, z));
    }
}

impl HeightField for ColumnField {
    fn surface_height(&self, x: i64, z: i64) -> f32 {
        self.columns.get(&(x, z)).copied().unwrap_or(self.base)
    }
}
