//! Combines two fuzzy spheres with each CSG operation.
//!
//! Run with: cargo run --example `csg_demo`

use fuzzy_voxels::{
    combine, draw_voxel_model, init_logging, save_blender_script, sphere_model, CsgOp, Options,
    Scene, UVec3,
};

fn main() {
    init_logging();

    let a = sphere_model(5.0, 21);
    let b = sphere_model(5.0, 21);
    let offset = UVec3::splat(5);

    let mut scene = Scene::new();
    for (op, name) in [
        (CsgOp::Union, "union"),
        (CsgOp::Intersection, "intersection"),
        (CsgOp::Subtract, "a-minus-b"),
        (CsgOp::SubtractReverse, "b-minus-a"),
    ] {
        let model = combine(&a, &b, offset, op);
        let group = draw_voxel_model(&mut scene, &model, name).expect("Failed to materialize model");
        let cubes = scene.group(group).map_or(0, fuzzy_voxels::Group::num_objects);
        println!("{name}: grid {} -> {cubes} cubes", model.dims());

        let options = Options {
            group_name: name.to_string(),
            ..Options::default()
        };
        let path = std::env::temp_dir().join(format!("{name}.py"));
        save_blender_script(&model, &options, &path).expect("Failed to write Blender script");
    }
    println!("{} materials shared across all groups", scene.num_materials());
}
