//! Scene objects created for occupied voxels.

use glam::Vec3;

use crate::scene::MaterialId;

/// A primitive cube placed in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelObject {
    name: String,
    location: Vec3,
    dimensions: Vec3,
    material: Option<MaterialId>,
    show_transparent: bool,
}

impl VoxelObject {
    /// Creates a cube of edge 2 at `location`, matching a freshly added
    /// primitive cube.
    pub fn cube(name: impl Into<String>, location: Vec3) -> Self {
        Self {
            name: name.into(),
            location,
            dimensions: Vec3::splat(2.0),
            material: None,
            show_transparent: false,
        }
    }

    /// Returns the unique object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the center of the object.
    #[must_use]
    pub fn location(&self) -> Vec3 {
        self.location
    }

    /// Returns the axis-aligned extent of the object.
    #[must_use]
    pub fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    /// Sets the axis-aligned extent.
    pub fn set_dimensions(&mut self, dimensions: Vec3) {
        self.dimensions = dimensions;
    }

    /// Returns the assigned material, if any.
    #[must_use]
    pub fn material(&self) -> Option<MaterialId> {
        self.material
    }

    /// Assigns a material, replacing any previous one.
    pub fn set_material(&mut self, material: MaterialId) {
        self.material = Some(material);
    }

    /// Returns whether the viewport draws this object with transparency.
    #[must_use]
    pub fn show_transparent(&self) -> bool {
        self.show_transparent
    }

    /// Sets whether the viewport draws this object with transparency.
    pub fn set_show_transparent(&mut self, show: bool) {
        self.show_transparent = show;
    }

    /// Returns the min and max corners of the object.
    #[must_use]
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let half = self.dimensions * 0.5;
        (self.location - half, self.location + half)
    }
}
