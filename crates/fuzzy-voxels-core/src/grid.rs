//! Dense voxel grid of occupancy values.
//!
//! Values are stored in C order: cell `(i, j, k)` of a grid with dimensions
//! `(n, m, k_dim)` lives at `(i * m + j) * k_dim + k`. A value `<= 0` marks an
//! empty cell; positive values are opacities in `(0, 1]`.

use glam::{UVec3, Vec3};

use crate::error::{Result, VoxelError};

/// A regular 3D array of `f32` occupancy values.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    dims: UVec3,
    values: Vec<f32>,
}

impl VoxelGrid {
    /// Creates a grid from existing values.
    ///
    /// Fails with [`VoxelError::SizeMismatch`] when `values.len()` is not the
    /// product of the dimensions.
    pub fn new(dims: UVec3, values: Vec<f32>) -> Result<Self> {
        let expected = cell_count(dims);
        if values.len() != expected {
            return Err(VoxelError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { dims, values })
    }

    /// Creates an all-empty grid.
    #[must_use]
    pub fn zeros(dims: UVec3) -> Self {
        Self {
            dims,
            values: vec![0.0; cell_count(dims)],
        }
    }

    /// Creates a grid by evaluating `f` at every cell index, in storage order.
    pub fn from_fn(dims: UVec3, mut f: impl FnMut(UVec3) -> f32) -> Self {
        let mut values = Vec::with_capacity(cell_count(dims));
        for i in 0..dims.x {
            for j in 0..dims.y {
                for k in 0..dims.z {
                    values.push(f(UVec3::new(i, j, k)));
                }
            }
        }
        Self { dims, values }
    }

    /// Returns the number of cells along each axis.
    #[must_use]
    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the grid has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw values in storage order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns true if `(i, j, k)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, i: u32, j: u32, k: u32) -> bool {
        i < self.dims.x && j < self.dims.y && k < self.dims.z
    }

    /// Flattens a cell index into a storage offset.
    #[must_use]
    pub fn flatten_index(&self, i: u32, j: u32, k: u32) -> Option<usize> {
        if !self.contains(i, j, k) {
            return None;
        }
        let (m, kd) = (self.dims.y as usize, self.dims.z as usize);
        Some((i as usize * m + j as usize) * kd + k as usize)
    }

    /// Returns the value at `(i, j, k)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, i: u32, j: u32, k: u32) -> Option<f32> {
        self.flatten_index(i, j, k).map(|idx| self.values[idx])
    }

    /// Returns a mutable reference to the value at `(i, j, k)`.
    pub fn get_mut(&mut self, i: u32, j: u32, k: u32) -> Option<&mut f32> {
        let idx = self.flatten_index(i, j, k)?;
        self.values.get_mut(idx)
    }

    /// Sets the value at `(i, j, k)`. Returns false when out of range.
    pub fn set(&mut self, i: u32, j: u32, k: u32, value: f32) -> bool {
        match self.get_mut(i, j, k) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Iterates over every cell as `(index, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (UVec3, f32)> + '_ {
        let dims = self.dims;
        self.values.iter().enumerate().map(move |(idx, &v)| {
            let idx = idx as u32;
            let k = idx % dims.z;
            let j = (idx / dims.z) % dims.y;
            let i = idx / (dims.z * dims.y);
            (UVec3::new(i, j, k), v)
        })
    }

    /// Iterates over occupied cells (value `> 0`) in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (UVec3, f32)> + '_ {
        self.iter().filter(|&(_, v)| is_occupied(v))
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.values.iter().filter(|&&v| is_occupied(v)).count()
    }

    /// Returns the center of cell `index` when the whole grid is centered on
    /// the origin with unit cells.
    #[must_use]
    pub fn cell_center(&self, index: UVec3) -> Vec3 {
        index.as_vec3() + Vec3::splat(0.5) - self.dims.as_vec3() * 0.5
    }
}

/// Returns true if `value` marks an occupied cell. NaN is empty.
#[must_use]
pub fn is_occupied(value: f32) -> bool {
    value > 0.0
}

fn cell_count(dims: UVec3) -> usize {
    dims.x as usize * dims.y as usize * dims.z as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_checks_size() {
        let err = VoxelGrid::new(UVec3::new(2, 2, 2), vec![0.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            VoxelError::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_c_order_layout() {
        let grid = VoxelGrid::from_fn(UVec3::new(2, 3, 4), |idx| {
            (idx.x * 100 + idx.y * 10 + idx.z) as f32
        });
        assert_eq!(grid.flatten_index(1, 2, 3), Some((3 + 2) * 4 + 3));
        assert_eq!(grid.get(1, 2, 3), Some(123.0));
        assert_eq!(grid.values()[1], 1.0);
        assert_eq!(grid.values()[4], 10.0);
    }

    #[test]
    fn test_out_of_range() {
        let mut grid = VoxelGrid::zeros(UVec3::splat(2));
        assert_eq!(grid.get(2, 0, 0), None);
        assert!(!grid.set(0, 0, 2, 1.0));
        assert!(grid.set(1, 1, 1, 0.5));
        assert_eq!(grid.get(1, 1, 1), Some(0.5));
    }

    #[test]
    fn test_occupied_skips_non_positive() {
        let grid = VoxelGrid::new(UVec3::new(1, 1, 4), vec![0.0, -0.3, f32::NAN, 0.2]).unwrap();
        let occupied: Vec<_> = grid.occupied().collect();
        assert_eq!(occupied, vec![(UVec3::new(0, 0, 3), 0.2)]);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_cell_center() {
        let grid = VoxelGrid::zeros(UVec3::splat(2));
        assert_eq!(grid.cell_center(UVec3::new(1, 0, 1)), Vec3::new(0.5, -0.5, 0.5));

        let single = VoxelGrid::zeros(UVec3::ONE);
        assert_eq!(single.cell_center(UVec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_empty_dims() {
        let grid = VoxelGrid::zeros(UVec3::new(3, 0, 2));
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }

    proptest! {
        #[test]
        fn iter_matches_get(nx in 1u32..5, ny in 1u32..5, nz in 1u32..5) {
            let grid = VoxelGrid::from_fn(UVec3::new(nx, ny, nz), |idx| {
                (idx.x * 31 + idx.y * 7 + idx.z) as f32
            });
            for (idx, v) in grid.iter() {
                prop_assert_eq!(grid.get(idx.x, idx.y, idx.z), Some(v));
            }
        }
    }
}
