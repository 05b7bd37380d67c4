//! Host scene abstraction and the in-memory scene registry.
//!
//! [`SceneHost`] lists the capabilities a 3D editor has to expose for voxel
//! models to be materialized into it. Every creating call returns an explicit
//! handle; there is no notion of a "currently active" object.
//!
//! [`Scene`] is a self-contained host that keeps objects, materials and groups
//! in memory. It is what the tests and demos render into.

use std::collections::HashMap;

use glam::Vec3;

use crate::error::{Result, VoxelError};
use crate::group::Group;
use crate::material::Material;
use crate::object::VoxelObject;

/// Handle to an object owned by a host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// Handle to a material owned by a host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub usize);

/// Handle to a group owned by a host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

/// Scene-graph and material operations consumed from a host editor.
///
/// Implementations own every entity they hand out a handle for. Failures
/// (unknown handles, rejected names) are reported through [`Result`] and are
/// never retried by callers.
pub trait SceneHost {
    /// Adds a primitive cube centered at `location` and returns its handle.
    fn add_cube(&mut self, location: Vec3) -> Result<ObjectId>;

    /// Sets the axis-aligned extent of an object.
    fn set_object_dimensions(&mut self, object: ObjectId, dimensions: Vec3) -> Result<()>;

    /// Makes `material` the active material of `object`.
    fn set_object_material(&mut self, object: ObjectId, material: MaterialId) -> Result<()>;

    /// Sets whether the viewport draws the object with transparency.
    fn set_object_show_transparent(&mut self, object: ObjectId, show: bool) -> Result<()>;

    /// Looks up a material by name.
    fn find_material(&self, name: &str) -> Option<MaterialId>;

    /// Creates a new material with the given name.
    fn create_material(&mut self, name: &str) -> Result<MaterialId>;

    /// Sets the diffuse (base) color of a material.
    fn set_material_color(&mut self, material: MaterialId, color: Vec3) -> Result<()>;

    /// Sets the alpha of a material.
    fn set_material_alpha(&mut self, material: MaterialId, alpha: f32) -> Result<()>;

    /// Enables or disables alpha blending on a material.
    fn set_material_transparency(&mut self, material: MaterialId, enabled: bool) -> Result<()>;

    /// Returns the group with the given name, creating it if needed.
    fn ensure_group(&mut self, name: &str) -> Result<GroupId>;

    /// Adds an object to a group. Linking a member again is a no-op.
    fn link_object(&mut self, group: GroupId, object: ObjectId) -> Result<()>;
}

/// In-memory scene registry.
///
/// Entities are stored in creation order and addressed by index handles.
/// Object names follow the editor convention `Cube`, `Cube.001`, ...
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<VoxelObject>,
    materials: Vec<Material>,
    groups: Vec<Group>,
    material_names: HashMap<String, MaterialId>,
    group_names: HashMap<String, GroupId>,
    name_counters: HashMap<String, usize>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets an object by handle.
    pub fn object(&self, id: ObjectId) -> Option<&VoxelObject> {
        self.objects.get(id.0)
    }

    /// Gets a material by handle.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    /// Gets a group by handle.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.0)
    }

    /// Gets a mutable group by handle.
    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(id.0)
    }

    /// Looks up a group handle by name.
    pub fn group_by_name(&self, name: &str) -> Option<GroupId> {
        self.group_names.get(name).copied()
    }

    /// Looks up a material handle by name.
    pub fn material_by_name(&self, name: &str) -> Option<MaterialId> {
        self.material_names.get(name).copied()
    }

    /// Returns the objects linked into `group`, in link order.
    pub fn objects_in_group(&self, group: GroupId) -> impl Iterator<Item = &VoxelObject> {
        self.group(group)
            .into_iter()
            .flat_map(|g| g.objects().iter())
            .filter_map(move |&id| self.object(id))
    }

    /// Returns all objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &VoxelObject> {
        self.objects.iter()
    }

    /// Returns all materials in creation order.
    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// Returns the number of objects.
    #[must_use]
    pub fn num_objects(&self) -> usize {
        self.objects.len()
    }

    /// Returns the number of materials.
    #[must_use]
    pub fn num_materials(&self) -> usize {
        self.materials.len()
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the scene holds no entities.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.materials.is_empty() && self.groups.is_empty()
    }

    /// Computes the bounding box of all objects, if there are any.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut has_extent = false;

        for object in &self.objects {
            let (bb_min, bb_max) = object.bounding_box();
            min = min.min(bb_min);
            max = max.max(bb_max);
            has_extent = true;
        }

        has_extent.then_some((min, max))
    }

    /// Removes every entity from the scene.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn unique_object_name(&mut self, base: &str) -> String {
        let counter = self.name_counters.entry(base.to_string()).or_insert(0);
        let name = if *counter == 0 {
            base.to_string()
        } else {
            format!("{base}.{counter:03}")
        };
        *counter += 1;
        name
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut VoxelObject> {
        self.objects
            .get_mut(id.0)
            .ok_or(VoxelError::ObjectNotFound(id))
    }

    fn material_mut(&mut self, id: MaterialId) -> Result<&mut Material> {
        self.materials
            .get_mut(id.0)
            .ok_or(VoxelError::MaterialNotFound(id))
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(VoxelError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl SceneHost for Scene {
    fn add_cube(&mut self, location: Vec3) -> Result<ObjectId> {
        let name = self.unique_object_name("Cube");
        let id = ObjectId(self.objects.len());
        self.objects.push(VoxelObject::cube(name, location));
        Ok(id)
    }

    fn set_object_dimensions(&mut self, object: ObjectId, dimensions: Vec3) -> Result<()> {
        self.object_mut(object)?.set_dimensions(dimensions);
        Ok(())
    }

    fn set_object_material(&mut self, object: ObjectId, material: MaterialId) -> Result<()> {
        if self.material(material).is_none() {
            return Err(VoxelError::MaterialNotFound(material));
        }
        self.object_mut(object)?.set_material(material);
        Ok(())
    }

    fn set_object_show_transparent(&mut self, object: ObjectId, show: bool) -> Result<()> {
        self.object_mut(object)?.set_show_transparent(show);
        Ok(())
    }

    fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.material_by_name(name)
    }

    fn create_material(&mut self, name: &str) -> Result<MaterialId> {
        check_name(name)?;
        if self.material_names.contains_key(name) {
            return Err(VoxelError::MaterialExists(name.to_string()));
        }
        let id = MaterialId(self.materials.len());
        self.materials.push(Material::new(name));
        self.material_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn set_material_color(&mut self, material: MaterialId, color: Vec3) -> Result<()> {
        self.material_mut(material)?.set_diffuse_color(color);
        Ok(())
    }

    fn set_material_alpha(&mut self, material: MaterialId, alpha: f32) -> Result<()> {
        self.material_mut(material)?.set_alpha(alpha);
        Ok(())
    }

    fn set_material_transparency(&mut self, material: MaterialId, enabled: bool) -> Result<()> {
        self.material_mut(material)?.set_use_transparency(enabled);
        Ok(())
    }

    fn ensure_group(&mut self, name: &str) -> Result<GroupId> {
        check_name(name)?;
        if let Some(id) = self.group_by_name(name) {
            return Ok(id);
        }
        let id = GroupId(self.groups.len());
        self.groups.push(Group::new(name));
        self.group_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn link_object(&mut self, group: GroupId, object: ObjectId) -> Result<()> {
        if self.object(object).is_none() {
            return Err(VoxelError::ObjectNotFound(object));
        }
        self.group_mut(group)
            .ok_or(VoxelError::GroupNotFound(group))?
            .add_object(object);
        Ok(())
    }
}
