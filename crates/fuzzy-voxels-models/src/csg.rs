//! Constructive solid geometry on fuzzy voxel models.
//!
//! Two grids are combined cell by cell after translating the second one by a
//! whole number of cells. Cells outside a grid count as empty (density 0).

use fuzzy_voxels_core::{UVec3, VoxelGrid};

/// Per-cell combination rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsgOp {
    /// Fuzzy union, `max(a, b)`.
    Union,
    /// Fuzzy intersection, `min(a, b)`.
    Intersection,
    /// `a` minus `b`, never below zero.
    Subtract,
    /// `b` minus `a`, never below zero.
    SubtractReverse,
}

impl CsgOp {
    /// Combines two densities.
    #[must_use]
    pub fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            Self::Union => a.max(b),
            Self::Intersection => a.min(b),
            Self::Subtract => (a - b).max(0.0),
            Self::SubtractReverse => (b - a).max(0.0),
        }
    }
}

/// Combines `a` with `b` translated by `offset` cells.
///
/// The result spans both operands: along each axis its size is
/// `offset + max(a_size - offset, b_size)`.
pub fn combine(a: &VoxelGrid, b: &VoxelGrid, offset: UVec3, op: CsgOp) -> VoxelGrid {
    let dims = offset + a.dims().saturating_sub(offset).max(b.dims());
    let grid = VoxelGrid::from_fn(dims, |idx| {
        let ra = a.get(idx.x, idx.y, idx.z).unwrap_or(0.0);
        let rb = idx
            .cmpge(offset)
            .all()
            .then(|| idx - offset)
            .and_then(|local| b.get(local.x, local.y, local.z))
            .unwrap_or(0.0);
        op.apply(ra, rb)
    });
    log::debug!(
        "{op:?} of {} and {} at offset {offset} -> {}",
        a.dims(),
        b.dims(),
        dims
    );
    grid
}

/// Union of `a` and `b` translated by `offset`.
pub fn union(a: &VoxelGrid, b: &VoxelGrid, offset: UVec3) -> VoxelGrid {
    combine(a, b, offset, CsgOp::Union)
}

/// Intersection of `a` and `b` translated by `offset`.
pub fn intersection(a: &VoxelGrid, b: &VoxelGrid, offset: UVec3) -> VoxelGrid {
    combine(a, b, offset, CsgOp::Intersection)
}

/// `a` with `b` (translated by `offset`) carved out.
pub fn subtract(a: &VoxelGrid, b: &VoxelGrid, offset: UVec3) -> VoxelGrid {
    combine(a, b, offset, CsgOp::Subtract)
}

/// `b` (translated by `offset`) with `a` carved out.
pub fn subtract_reverse(a: &VoxelGrid, b: &VoxelGrid, offset: UVec3) -> VoxelGrid {
    combine(a, b, offset, CsgOp::SubtractReverse)
}
