//! Builds a fuzzy sphere and exports it in every supported form.
//!
//! Run with: cargo run --example `sphere_demo` -- [options.json]
//!
//! Writes `sphere21-5.py` (a Blender script) and `sphere21-5.bvox` (a Blender
//! voxel data cube) to the temp directory, then materializes the model into an
//! in-memory scene and prints a summary.

use fuzzy_voxels::{
    draw_voxel_model, init_logging, save_blender_script, sphere_model, BlenderVoxelFile,
    Materializer, Options, Scene,
};

fn main() {
    init_logging();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(&path).expect("Failed to load options"),
        None => Options::default(),
    };

    let radius = 5.0;
    let n = 21;
    let model = sphere_model(radius, n);

    let out_dir = std::env::temp_dir();
    save_blender_script(&model, &options, out_dir.join("sphere21-5.py"))
        .expect("Failed to write Blender script");
    BlenderVoxelFile::single(model.clone())
        .save(out_dir.join("sphere21-5.bvox"))
        .expect("Failed to write bvox file");

    let mut scene = Scene::new();
    let group = Materializer::new(options.clone())
        .draw_into_default_group(&mut scene, &model)
        .expect("Failed to materialize model");

    // A second, default-styled copy next to the configured one.
    let plain = draw_voxel_model(&mut scene, &model, "plain").expect("Failed to materialize model");

    let count = |g| scene.group(g).map_or(0, fuzzy_voxels::Group::num_objects);
    println!(
        "sphere r={radius} on {n}^3 grid: {} cubes in '{}', {} in 'plain', {} materials",
        count(group),
        options.group_name,
        count(plain),
        scene.num_materials()
    );
    if let Some((min, max)) = scene.bounding_box() {
        println!("scene bounds: {min} .. {max}");
    }
}
