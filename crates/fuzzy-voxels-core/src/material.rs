//! Materials and the fixed-point keys that identify them.
//!
//! Every distinct voxel value maps to one material. The mapping goes through
//! [`MaterialKey`], a fixed-point integer derived from the value, so that the
//! material name is a pure function of the key.

use glam::Vec3;

/// Default number of decimal digits kept by a [`MaterialKey`].
pub const DEFAULT_KEY_DECIMALS: u32 = 6;

/// Largest supported key precision; `10^9` still fits an `i64` scale safely.
pub const MAX_KEY_DECIMALS: u32 = 9;

/// Gray used as the base color of voxel materials.
pub const DEFAULT_BASE_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Fixed-point identity of a voxel value: `round(value * 10^decimals)`.
///
/// Values closer than half a unit in the last kept digit share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialKey {
    units: i64,
    decimals: u32,
}

impl MaterialKey {
    /// Quantizes `value` with `decimals` digits of precision.
    ///
    /// `decimals` is clamped to `1..=MAX_KEY_DECIMALS`.
    #[must_use]
    pub fn from_value(value: f32, decimals: u32) -> Self {
        let decimals = decimals.clamp(1, MAX_KEY_DECIMALS);
        let scale = 10_f64.powi(decimals as i32);
        #[allow(clippy::cast_possible_truncation)]
        let units = (f64::from(value) * scale).round() as i64;
        Self { units, decimals }
    }

    /// Returns the integer number of `10^-decimals` units.
    #[must_use]
    pub fn units(&self) -> i64 {
        self.units
    }

    /// Returns the precision this key was built with.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Returns the material name for this key, e.g. `m700000` for `0.7`.
    #[must_use]
    pub fn material_name(&self) -> String {
        format!("m{:0width$}", self.units, width = self.decimals as usize)
    }
}

/// A named surface appearance: base color, alpha and transparency flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    diffuse_color: Vec3,
    alpha: f32,
    use_transparency: bool,
}

impl Material {
    /// Creates an opaque white material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse_color: Vec3::ONE,
            alpha: 1.0,
            use_transparency: false,
        }
    }

    /// Returns the material name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the diffuse color.
    #[must_use]
    pub fn diffuse_color(&self) -> Vec3 {
        self.diffuse_color
    }

    /// Sets the diffuse color.
    pub fn set_diffuse_color(&mut self, color: Vec3) -> &mut Self {
        self.diffuse_color = color;
        self
    }

    /// Returns the opacity in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Sets the opacity.
    pub fn set_alpha(&mut self, alpha: f32) -> &mut Self {
        self.alpha = alpha;
        self
    }

    /// Returns whether alpha blending is enabled.
    #[must_use]
    pub fn use_transparency(&self) -> bool {
        self.use_transparency
    }

    /// Enables or disables alpha blending.
    pub fn set_use_transparency(&mut self, enabled: bool) -> &mut Self {
        self.use_transparency = enabled;
        self
    }
}
