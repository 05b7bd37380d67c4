//! Core abstractions for fuzzy-voxels.
//!
//! This crate provides the fundamental types used throughout fuzzy-voxels:
//! - [`VoxelGrid`], a dense 3D array of occupancy values
//! - [`MaterialKey`] and the scene entities ([`Material`], [`VoxelObject`], [`Group`])
//! - [`SceneHost`], the host-editor capabilities a model is materialized into,
//!   with the in-memory [`Scene`] implementation
//! - Configuration [`Options`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Grid indices are u32 and grid sizes stay far below 2^32 cells
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod error;
pub mod grid;
pub mod group;
pub mod material;
pub mod object;
pub mod options;
pub mod scene;

pub use error::{Result, VoxelError};
pub use grid::{is_occupied, VoxelGrid};
pub use group::Group;
pub use material::{Material, MaterialKey, DEFAULT_BASE_COLOR, DEFAULT_KEY_DECIMALS};
pub use object::VoxelObject;
pub use options::{Options, DEFAULT_GROUP_NAME};
pub use scene::{GroupId, MaterialId, ObjectId, Scene, SceneHost};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
