//! Export of a voxel model as a Blender Python script.
//!
//! The generated script is self-contained: it defines `draw_voxel_model`,
//! fills a numpy array with the model's non-zero values and calls the
//! function, so running it in Blender's text editor builds the scene.
//! It targets the Blender 2.7x API (`bpy.data.groups`, `use_transparency`).

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fuzzy_voxels_core::{Options, Result, VoxelGrid};

/// Writes the script for `grid` using `options` for group name, color,
/// key precision and cube size.
pub fn write_blender_script(grid: &VoxelGrid, options: &Options, mut writer: impl Write) -> Result<()> {
    writer.write_all(script_prelude(options).as_bytes())?;

    let dims = grid.dims();
    writeln!(writer, "VM = np.zeros(({}, {}, {}), dtype=float)", dims.x, dims.y, dims.z)?;
    let mut lines = 0usize;
    for (idx, value) in grid.iter() {
        let Some(text) = python_float(value) else {
            continue;
        };
        writeln!(writer, "VM[{},{},{}] = {text}", idx.x, idx.y, idx.z)?;
        lines += 1;
    }
    writeln!(writer, "N = {}\nM = {}\nK = {}", dims.x, dims.y, dims.z)?;
    writeln!(
        writer,
        "g = draw_voxel_model(VM, N, M, K, {})",
        python_str(&options.group_name)
    )?;
    writer.flush()?;

    log::debug!("wrote Blender script for {dims} grid with {lines} assignments");
    Ok(())
}

/// Writes the script for `grid` to a file.
pub fn save_blender_script(grid: &VoxelGrid, options: &Options, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_blender_script(grid, options, BufWriter::new(File::create(path)?))?;
    log::info!("wrote Blender script to {}", path.display());
    Ok(())
}

/// Formats a cell value as a Python float literal, or `None` when the cell
/// should stay at the array's zero.
fn python_float(value: f32) -> Option<String> {
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return Some(format!("float('{sign}inf')"));
    }
    let text = format!("{value:.2}");
    (text.trim_start_matches('-') != "0.00").then_some(text)
}

/// Quotes `s` as a single-quoted Python string literal.
fn python_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Rust control chars are all below U+00A0.
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn script_prelude(options: &Options) -> String {
    let c = options.base_color;
    let decimals = options.key_decimals;
    let size = options.cube_size;
    let show = if options.show_transparent { "True" } else { "False" };

    let mut s = String::from("import numpy as np\nimport bpy\n\n\n");
    let _ = writeln!(s, "KEY_DECIMALS = {decimals}");
    let _ = writeln!(s, "KEY_SCALE = 10 ** KEY_DECIMALS");
    let _ = writeln!(s, "BASE_COLOR = ({:?}, {:?}, {:?})", c.x, c.y, c.z);
    let _ = writeln!(s, "CUBE_SIZE = {size:?}");
    s.push_str(
        r"

def material_for(p, cache):
    key = int(p * KEY_SCALE + 0.5)
    mat = cache.get(key)
    if mat is None:
        name = 'm%0*d' % (KEY_DECIMALS, key)
        mat = bpy.data.materials.get(name)
        if mat is None:
            mat = bpy.data.materials.new(name)
            mat.diffuse_color = BASE_COLOR
            mat.alpha = p
            mat.use_transparency = True
        cache[key] = mat
    return mat


def draw_voxel_model(V, N, M, K, group_name='VM'):
    g = bpy.data.groups.get(group_name) or bpy.data.groups.new(group_name)
    cache = {}
    for i in range(N):
        for j in range(M):
            for k in range(K):
                p = float(V[i, j, k])
                if not p > 0:
                    continue
                mat = material_for(p, cache)
                bpy.ops.mesh.primitive_cube_add(
                    location=(i + 0.5 - N / 2, j + 0.5 - M / 2, k + 0.5 - K / 2))
                v = bpy.context.active_object
                v.dimensions = (CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                v.active_material = mat
",
    );
    let _ = writeln!(s, "                v.show_transparent = {show}");
    s.push_str("                g.objects.link(v)\n    return g\n\n\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_voxels_core::UVec3;

    fn render(grid: &VoxelGrid, options: &Options) -> String {
        let mut out = Vec::new();
        write_blender_script(grid, options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_script_structure() {
        let mut grid = VoxelGrid::zeros(UVec3::new(2, 3, 4));
        grid.set(1, 0, 3, 0.7);
        grid.set(0, 2, 1, 0.25);
        let script = render(&grid, &Options::default());

        assert!(script.starts_with("import numpy as np\nimport bpy\n"));
        assert!(script.contains("def draw_voxel_model(V, N, M, K, group_name='VM'):"));
        assert!(script.contains("KEY_DECIMALS = 6\n"));
        assert!(script.contains("BASE_COLOR = (0.5, 0.5, 0.5)\n"));
        assert!(script.contains("VM = np.zeros((2, 3, 4), dtype=float)\n"));
        assert!(script.contains("VM[0,2,1] = 0.25\n"));
        assert!(script.contains("VM[1,0,3] = 0.70\n"));
        assert!(script.contains("N = 2\nM = 3\nK = 4\n"));
        assert!(script.trim_end().ends_with("g = draw_voxel_model(VM, N, M, K, 'VM')"));
        assert_eq!(script.matches("VM[").count(), 2);
    }

    #[test]
    fn test_skips_values_rounding_to_zero() {
        let grid = VoxelGrid::new(UVec3::new(1, 1, 3), vec![0.004, -0.001, 0.006]).unwrap();
        let script = render(&grid, &Options::default());
        assert_eq!(script.matches("VM[").count(), 1);
        assert!(script.contains("VM[0,0,2] = 0.01\n"));
    }

    #[test]
    fn test_options_flow_into_script() {
        let options = Options {
            group_name: "sphere".to_string(),
            key_decimals: 3,
            show_transparent: false,
            cube_size: 0.9,
            ..Options::default()
        };
        let script = render(&VoxelGrid::zeros(UVec3::ONE), &options);
        assert!(script.contains("KEY_DECIMALS = 3\n"));
        assert!(script.contains("CUBE_SIZE = 0.9\n"));
        assert!(script.contains("v.show_transparent = False\n"));
        assert!(script.contains("draw_voxel_model(VM, N, M, K, 'sphere')"));
    }

    #[test]
    fn test_non_finite_values() {
        let grid = VoxelGrid::new(
            UVec3::new(1, 1, 3),
            vec![f32::NAN, f32::INFINITY, f32::NEG_INFINITY],
        )
        .unwrap();
        let script = render(&grid, &Options::default());
        assert!(!script.contains("NaN"));
        assert!(!script.contains("VM[0,0,0]"));
        assert!(script.contains("VM[0,0,1] = float('inf')\n"));
        assert!(script.contains("VM[0,0,2] = float('-inf')\n"));
    }

    #[test]
    fn test_group_name_is_python_literal() {
        let options = Options {
            group_name: "it's a\\b\u{1b}\n\u{85}é".to_string(),
            ..Options::default()
        };
        let script = render(&VoxelGrid::zeros(UVec3::ONE), &options);
        assert!(script
            .trim_end()
            .ends_with(r"g = draw_voxel_model(VM, N, M, K, 'it\'s a\\b\x1b\n\x85é')"));
        assert!(!script.contains("\\u{"));

        assert_eq!(python_str(""), "''");
        assert_eq!(python_str("VM"), "'VM'");
        assert_eq!(python_str("a\tb\r"), r"'a\tb\r'");
    }
}
