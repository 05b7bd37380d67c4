//! fuzzy-voxels: render fuzzy voxel models as transparent cube scenes.
//!
//! A voxel model is a dense grid of opacities in `[0, 1]`. Materializing it
//! into a host scene creates one unit cube per occupied cell, centers the grid
//! on the origin, and gives each distinct opacity its own semi-transparent
//! material.
//!
//! # Quick Start
//!
//! ```no_run
//! use fuzzy_voxels::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // Fuzzy sphere of radius 5 on a 21³ grid
//!     let model = sphere_model(5.0, 21);
//!
//!     // Render it into an in-memory scene
//!     let mut scene = Scene::new();
//!     let group = draw_voxel_model(&mut scene, &model, DEFAULT_GROUP_NAME)?;
//!     println!("{} cubes", scene.group(group).map_or(0, Group::num_objects));
//!
//!     // Or hand it to Blender
//!     save_blender_script(&model, &Options::default(), "sphere.py")?;
//!     BlenderVoxelFile::single(model).save("sphere.bvox")?;
//!     Ok(())
//! }
//! ```
//!
//! # Hosts
//!
//! The materializer talks to the 3D editor through the [`SceneHost`] trait.
//! [`Scene`] is an in-memory implementation; an editor binding implements the
//! same trait over its own scene graph.

#![allow(clippy::missing_errors_doc)]

mod materialize;

// Re-export core types
pub use fuzzy_voxels_core::{
    error::{Result, VoxelError},
    grid::{is_occupied, VoxelGrid},
    group::Group,
    material::{Material, MaterialKey, DEFAULT_BASE_COLOR, DEFAULT_KEY_DECIMALS},
    object::VoxelObject,
    options::{Options, DEFAULT_GROUP_NAME},
    scene::{GroupId, MaterialId, ObjectId, Scene, SceneHost},
    UVec3, Vec3,
};

// Re-export model builders
pub use fuzzy_voxels_models::{
    combine, cone_model, cylinder_model, intersection, optical_density, sample_shape,
    save_blender_script, sphere_model, subtract, subtract_reverse, union, write_blender_script,
    BlenderVoxelFile, Cone, CsgOp, Cylinder, Shape, Sphere,
};

pub use materialize::{draw_voxel_model, Materializer};

/// Initializes `env_logger` from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("fuzzy-voxels logging initialized");
    }
}
