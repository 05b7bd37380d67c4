//! Fuzzy voxelization: the fraction of each cell covered by a solid.
//!
//! A cell's optical density is estimated by testing a regular
//! `SUBSAMPLES³` lattice of points inside the cell against the solid.

use fuzzy_voxels_core::{UVec3, Vec3, VoxelGrid};

use crate::shape::{Cone, Cylinder, Shape, Sphere};

/// Sample points per axis inside one cell.
pub const SUBSAMPLES: u32 = 5;

/// Returns the fraction of the cell of size `cell_size` centered at `center`
/// that lies inside `shape`, in `[0, 1]`.
pub fn optical_density(center: Vec3, cell_size: Vec3, shape: &impl Shape) -> f32 {
    let n = SUBSAMPLES;
    let step = cell_size / n as f32;
    let mut count = 0u32;
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let offset = lattice_offset(UVec3::new(x, y, z), n) * step;
                if shape.contains(center + offset) {
                    count += 1;
                }
            }
        }
    }
    count as f32 / (n * n * n) as f32
}

/// Samples `shape` on an `n³` grid spanning a cube of side `extent` centered
/// on the origin.
///
/// Cell `(i, j, k)` covers X, Y and Z respectively.
pub fn sample_shape(shape: &impl Shape, extent: f32, n: u32) -> VoxelGrid {
    let cell = Vec3::splat(extent / n as f32);
    let grid = VoxelGrid::from_fn(UVec3::splat(n), |idx| {
        let center = lattice_offset(idx, n) * cell;
        let density = optical_density(center, cell, shape);
        log::trace!("cell {idx} at {center}: {density:.2}");
        density
    });
    log::debug!(
        "sampled {n}x{n}x{n} grid over extent {extent}: {} occupied cells",
        grid.occupied_count()
    );
    grid
}

/// Fuzzy model of a sphere of radius `r` on an `n³` grid.
pub fn sphere_model(r: f32, n: u32) -> VoxelGrid {
    sample_shape(&Sphere::new(r), 2.0 * r, n)
}

/// Fuzzy model of a double cone of radius `r` and height `h` on an `n³` grid.
pub fn cone_model(r: f32, h: f32, n: u32) -> VoxelGrid {
    sample_shape(&Cone::new(r, h), (2.0 * r).max(h), n)
}

/// Fuzzy model of a cylinder of radius `r` and height `h` on an `n³` grid.
pub fn cylinder_model(r: f32, h: f32, n: u32) -> VoxelGrid {
    sample_shape(&Cylinder::new(r, h), (2.0 * r).max(h), n)
}

/// Signed lattice coordinate of `idx` relative to the middle sample,
/// `idx - (n - 1) / 2` with integer halving.
fn lattice_offset(idx: UVec3, n: u32) -> Vec3 {
    let mid = ((n.max(1) - 1) / 2) as i32;
    (idx.as_ivec3() - glam::IVec3::splat(mid)).as_vec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_bounds() {
        let s = Sphere::new(1.0);
        assert_eq!(optical_density(Vec3::ZERO, Vec3::splat(0.5), &s), 1.0);
        assert_eq!(optical_density(Vec3::splat(3.0), Vec3::splat(0.5), &s), 0.0);
    }

    #[test]
    fn test_density_half_space() {
        // The plane x = 0 cuts the lattice through its middle column:
        // 3 of 5 columns satisfy x >= 0.
        let half = |p: Vec3| p.x >= 0.0;
        let d = optical_density(Vec3::ZERO, Vec3::ONE, &half);
        assert!((d - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_model() {
        let grid = sphere_model(5.0, 21);
        assert_eq!(grid.dims(), UVec3::splat(21));
        assert_eq!(grid.get(10, 10, 10), Some(1.0));
        assert_eq!(grid.get(0, 0, 0), Some(0.0));
        assert!(grid.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
        // Partially covered boundary cells exist.
        assert!(grid.values().iter().any(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn test_sphere_model_symmetry() {
        let n = 9;
        let grid = sphere_model(2.0, n);
        for (idx, v) in grid.iter() {
            let mirrored = UVec3::splat(n - 1) - idx;
            assert_eq!(grid.get(mirrored.x, idx.y, idx.z), Some(v));
            assert_eq!(grid.get(idx.x, mirrored.y, mirrored.z), Some(v));
        }
    }

    #[test]
    fn test_cylinder_model_fills_axis() {
        let grid = cylinder_model(2.0, 4.0, 11);
        for k in 1..10 {
            assert_eq!(grid.get(5, 5, k), Some(1.0), "axis cell {k}");
        }
    }

    #[test]
    fn test_cone_model_narrows_at_waist() {
        let grid = cone_model(2.0, 4.0, 11);
        let waist: f32 = (0..11).map(|i| grid.get(i, 5, 5).unwrap_or(0.0)).sum();
        let rim: f32 = (0..11).map(|i| grid.get(i, 5, 1).unwrap_or(0.0)).sum();
        assert!(rim > waist);
    }
}
