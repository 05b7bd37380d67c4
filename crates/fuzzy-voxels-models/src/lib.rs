//! Voxel model builders for fuzzy-voxels.
//!
//! - [`shape`]: analytic solids ([`Sphere`], [`Cone`], [`Cylinder`], closures)
//! - [`density`]: fuzzy voxelization of a solid into a [`VoxelGrid`](fuzzy_voxels_core::VoxelGrid)
//! - [`csg`]: union, intersection and subtraction of two models
//! - [`format`]: the Blender voxel (`.bvox`) data-cube format
//! - [`script`]: export as a Blender Python script

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

pub mod csg;
pub mod density;
pub mod format;
pub mod script;
pub mod shape;

pub use csg::{combine, intersection, subtract, subtract_reverse, union, CsgOp};
pub use density::{
    cone_model, cylinder_model, optical_density, sample_shape, sphere_model, SUBSAMPLES,
};
pub use format::BlenderVoxelFile;
pub use script::{save_blender_script, write_blender_script};
pub use shape::{Cone, Cylinder, Shape, Sphere};
