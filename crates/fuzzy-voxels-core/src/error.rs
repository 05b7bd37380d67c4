//! Error types for fuzzy-voxels.

use thiserror::Error;

use crate::scene::{GroupId, MaterialId, ObjectId};

/// The main error type for fuzzy-voxels operations.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A scene entity was given an unusable name.
    #[error("invalid name '{0}'")]
    InvalidName(String),

    /// A material with the given name already exists.
    #[error("material '{0}' already exists")]
    MaterialExists(String),

    /// The object handle does not refer to a live object.
    #[error("object {0:?} not found")]
    ObjectNotFound(ObjectId),

    /// The material handle does not refer to a live material.
    #[error("material {0:?} not found")]
    MaterialNotFound(MaterialId),

    /// The group handle does not refer to a live group.
    #[error("group {0:?} not found")]
    GroupNotFound(GroupId),

    /// Malformed voxel file contents.
    #[error("invalid voxel format: {0}")]
    InvalidFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fuzzy-voxels operations.
pub type Result<T> = std::result::Result<T, VoxelError>;
