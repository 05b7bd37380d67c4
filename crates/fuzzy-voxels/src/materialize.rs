//! Turning a voxel grid into cube objects in a host scene.
//!
//! Every occupied cell becomes one cube. Cubes with equal values (up to the
//! material key precision) share one material, whose alpha is the value of
//! the first cell that needed it.
//!
//! # Example
//!
//! ```
//! use fuzzy_voxels::*;
//!
//! fn main() -> Result<()> {
//!     let mut grid = VoxelGrid::zeros(UVec3::splat(2));
//!     grid.set(1, 0, 1, 0.7);
//!
//!     let mut scene = Scene::new();
//!     let group = draw_voxel_model(&mut scene, &grid, DEFAULT_GROUP_NAME)?;
//!
//!     let cube = scene.objects_in_group(group).next().unwrap();
//!     assert_eq!(cube.location(), Vec3::new(0.5, -0.5, 0.5));
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;

use fuzzy_voxels_core::{
    GroupId, MaterialId, MaterialKey, Options, Result, SceneHost, Vec3, VoxelGrid,
};

/// Renders `grid` into `host` with default options and returns the group
/// holding the created cubes.
///
/// Host failures propagate unchanged; cubes created before a failure stay in
/// the host.
pub fn draw_voxel_model<H>(host: &mut H, grid: &VoxelGrid, group_name: &str) -> Result<GroupId>
where
    H: SceneHost + ?Sized,
{
    Materializer::default().draw(host, grid, group_name)
}

/// Grid-to-scene materializer configured by [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Materializer {
    options: Options,
}

impl Materializer {
    /// Creates a materializer with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Renders `grid` into the group named by the options.
    pub fn draw_into_default_group<H>(&self, host: &mut H, grid: &VoxelGrid) -> Result<GroupId>
    where
        H: SceneHost + ?Sized,
    {
        self.draw(host, grid, &self.options.group_name)
    }

    /// Renders `grid` into the group `group_name`, creating it if needed.
    pub fn draw<H>(&self, host: &mut H, grid: &VoxelGrid, group_name: &str) -> Result<GroupId>
    where
        H: SceneHost + ?Sized,
    {
        let group = host.ensure_group(group_name)?;
        let mut materials: HashMap<MaterialKey, MaterialId> = HashMap::new();
        let size = Vec3::splat(self.options.cube_size);
        let mut cubes = 0usize;

        for (idx, value) in grid.occupied() {
            let material = self.resolve_material(host, &mut materials, value)?;
            let location = grid.cell_center(idx);

            let cube = host.add_cube(location)?;
            host.set_object_dimensions(cube, size)?;
            host.set_object_material(cube, material)?;
            host.set_object_show_transparent(cube, self.options.show_transparent)?;
            host.link_object(group, cube)?;

            log::trace!("voxel {idx} = {value} -> cube {cube:?} at {location}");
            cubes += 1;
        }

        log::debug!(
            "materialized {} grid into group '{group_name}': {cubes} cubes, {} materials",
            grid.dims(),
            materials.len()
        );
        Ok(group)
    }

    /// Returns the material for `value`, creating it on first use.
    fn resolve_material<H>(
        &self,
        host: &mut H,
        cache: &mut HashMap<MaterialKey, MaterialId>,
        value: f32,
    ) -> Result<MaterialId>
    where
        H: SceneHost + ?Sized,
    {
        let key = MaterialKey::from_value(value, self.options.key_decimals);
        if let Some(&id) = cache.get(&key) {
            return Ok(id);
        }

        let name = key.material_name();
        let id = match host.find_material(&name) {
            Some(id) => id,
            None => {
                let id = host.create_material(&name)?;
                host.set_material_color(id, self.options.base_color)?;
                host.set_material_alpha(id, value)?;
                host.set_material_transparency(id, true)?;
                log::debug!("created material '{name}' with alpha {value}");
                id
            }
        };
        cache.insert(key, id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_voxels_core::{ObjectId, Scene, UVec3, VoxelError};

    #[test]
    fn test_custom_options() {
        let options = Options {
            group_name: "sphere".to_string(),
            base_color: Vec3::new(0.2, 0.4, 0.6),
            show_transparent: false,
            cube_size: 0.8,
            ..Options::default()
        };
        let grid = VoxelGrid::new(UVec3::new(1, 1, 2), vec![0.4, 0.9]).unwrap();
        let mut scene = Scene::new();
        let group = Materializer::new(options)
            .draw_into_default_group(&mut scene, &grid)
            .unwrap();

        assert_eq!(scene.group(group).unwrap().name(), "sphere");
        for cube in scene.objects_in_group(group) {
            assert_eq!(cube.dimensions(), Vec3::splat(0.8));
            assert!(!cube.show_transparent());
            let mat = scene.material(cube.material().unwrap()).unwrap();
            assert_eq!(mat.diffuse_color(), Vec3::new(0.2, 0.4, 0.6));
            assert!(mat.use_transparency());
        }
    }

    #[test]
    fn test_options_accessor() {
        assert_eq!(Materializer::default().options().group_name, "VM");
        let options = Options {
            cube_size: 0.5,
            ..Options::default()
        };
        let materializer = Materializer::new(options);
        assert_eq!(materializer.options().cube_size, 0.5);
    }

    #[test]
    fn test_coarse_keys_merge_materials() {
        let options = Options {
            key_decimals: 1,
            ..Options::default()
        };
        let grid = VoxelGrid::new(UVec3::new(1, 1, 3), vec![0.51, 0.54, 0.56]).unwrap();
        let mut scene = Scene::new();
        Materializer::new(options).draw(&mut scene, &grid, "VM").unwrap();

        assert_eq!(scene.num_objects(), 3);
        assert_eq!(scene.num_materials(), 2);
        let m5 = scene.material_by_name("m5").unwrap();
        assert!((scene.material(m5).unwrap().alpha() - 0.51).abs() < 1e-6);
        assert!(scene.material_by_name("m6").is_some());
    }

    #[test]
    fn test_existing_host_material_is_reused() {
        let mut scene = Scene::new();
        let existing = scene.create_material("m500000").unwrap();
        scene.set_material_alpha(existing, 0.123).unwrap();

        let grid = VoxelGrid::new(UVec3::ONE, vec![0.5]).unwrap();
        let group = draw_voxel_model(&mut scene, &grid, "VM").unwrap();

        let cube = scene.objects_in_group(group).next().unwrap();
        assert_eq!(cube.material(), Some(existing));
        assert_eq!(scene.num_materials(), 1);
        assert!((scene.material(existing).unwrap().alpha() - 0.123).abs() < 1e-6);
    }

    /// Host that rejects every cube after the first `limit`.
    struct FailingHost {
        inner: Scene,
        limit: usize,
    }

    impl SceneHost for FailingHost {
        fn add_cube(&mut self, location: Vec3) -> Result<ObjectId> {
            if self.inner.num_objects() >= self.limit {
                return Err(VoxelError::InvalidName("Cube".to_string()));
            }
            self.inner.add_cube(location)
        }
        fn set_object_dimensions(&mut self, object: ObjectId, dimensions: Vec3) -> Result<()> {
            self.inner.set_object_dimensions(object, dimensions)
        }
        fn set_object_material(&mut self, object: ObjectId, material: MaterialId) -> Result<()> {
            self.inner.set_object_material(object, material)
        }
        fn set_object_show_transparent(&mut self, object: ObjectId, show: bool) -> Result<()> {
            self.inner.set_object_show_transparent(object, show)
        }
        fn find_material(&self, name: &str) -> Option<MaterialId> {
            self.inner.find_material(name)
        }
        fn create_material(&mut self, name: &str) -> Result<MaterialId> {
            self.inner.create_material(name)
        }
        fn set_material_color(&mut self, material: MaterialId, color: Vec3) -> Result<()> {
            self.inner.set_material_color(material, color)
        }
        fn set_material_alpha(&mut self, material: MaterialId, alpha: f32) -> Result<()> {
            self.inner.set_material_alpha(material, alpha)
        }
        fn set_material_transparency(&mut self, material: MaterialId, enabled: bool) -> Result<()> {
            self.inner.set_material_transparency(material, enabled)
        }
        fn ensure_group(&mut self, name: &str) -> Result<GroupId> {
            self.inner.ensure_group(name)
        }
        fn link_object(&mut self, group: GroupId, object: ObjectId) -> Result<()> {
            self.inner.link_object(group, object)
        }
    }

    #[test]
    fn test_host_failure_propagates() {
        let grid = VoxelGrid::new(UVec3::new(1, 1, 3), vec![0.1, 0.2, 0.3]).unwrap();
        let mut host = FailingHost {
            inner: Scene::new(),
            limit: 2,
        };
        let err = draw_voxel_model(&mut host, &grid, "VM").unwrap_err();
        assert!(matches!(err, VoxelError::InvalidName(_)));

        // Work done before the failure stays in the host.
        let group = host.inner.group_by_name("VM").unwrap();
        assert_eq!(host.inner.group(group).unwrap().num_objects(), 2);
    }

    #[test]
    fn test_invalid_group_name() {
        let grid = VoxelGrid::new(UVec3::ONE, vec![1.0]).unwrap();
        let mut scene = Scene::new();
        assert!(matches!(
            draw_voxel_model(&mut scene, &grid, ""),
            Err(VoxelError::InvalidName(_))
        ));
        assert_eq!(scene.num_objects(), 0);
    }
}
