//! Configuration options for materializing voxel models.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::material::{DEFAULT_BASE_COLOR, DEFAULT_KEY_DECIMALS, MAX_KEY_DECIMALS};

/// Name of the group voxel cubes are collected into when none is given.
pub const DEFAULT_GROUP_NAME: &str = "VM";

/// Options controlling how a grid is turned into scene objects.
///
/// Missing fields fall back to their defaults when deserialized, so a JSON
/// file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Group that receives the created cubes.
    pub group_name: String,

    /// Diffuse color of every voxel material.
    pub base_color: Vec3,

    /// Decimal digits kept when deriving material keys from voxel values.
    pub key_decimals: u32,

    /// Whether cubes are flagged for transparent display.
    pub show_transparent: bool,

    /// Edge length of each cube.
    pub cube_size: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            group_name: DEFAULT_GROUP_NAME.to_string(),
            base_color: DEFAULT_BASE_COLOR,
            key_decimals: DEFAULT_KEY_DECIMALS,
            show_transparent: true,
            cube_size: 1.0,
        }
    }
}

impl Options {
    /// Parses options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut options: Self = serde_json::from_str(json)?;
        options.key_decimals = options.key_decimals.clamp(1, MAX_KEY_DECIMALS);
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded options from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
