//! Blender voxel data-cube format (`.bvox`).
//!
//! A file is a 16-byte little-endian header `nx, ny, nz, frames` (all `u32`)
//! followed by the `f32` values of every frame. Within a frame values are
//! written layer by layer along Z, each layer line by line along Y, each line
//! value by value along X.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bytemuck::{Pod, Zeroable};
use fuzzy_voxels_core::{Result, UVec3, VoxelError, VoxelGrid};

/// On-disk header.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct BvoxHeader {
    nx: u32,
    ny: u32,
    nz: u32,
    frames: u32,
}

impl BvoxHeader {
    const SIZE: usize = std::mem::size_of::<Self>();

    fn swap_to_le(self) -> Self {
        Self {
            nx: self.nx.to_le(),
            ny: self.ny.to_le(),
            nz: self.nz.to_le(),
            frames: self.frames.to_le(),
        }
    }

    fn swap_from_le(self) -> Self {
        Self {
            nx: u32::from_le(self.nx),
            ny: u32::from_le(self.ny),
            nz: u32::from_le(self.nz),
            frames: u32::from_le(self.frames),
        }
    }

    fn dims(&self) -> UVec3 {
        UVec3::new(self.nx, self.ny, self.nz)
    }
}

/// An animated voxel data cube: one or more frames sharing the same dims.
#[derive(Debug, Clone, PartialEq)]
pub struct BlenderVoxelFile {
    frames: Vec<VoxelGrid>,
}

impl BlenderVoxelFile {
    /// Creates a data cube from frames.
    ///
    /// Fails if there are no frames or the frames differ in dimensions.
    pub fn new(frames: Vec<VoxelGrid>) -> Result<Self> {
        let Some(first) = frames.first() else {
            return Err(VoxelError::InvalidFormat("no frames".to_string()));
        };
        let dims = first.dims();
        if let Some(bad) = frames.iter().find(|f| f.dims() != dims) {
            return Err(VoxelError::InvalidFormat(format!(
                "frame dims {} differ from {dims}",
                bad.dims()
            )));
        }
        Ok(Self { frames })
    }

    /// Creates a single-frame data cube.
    #[must_use]
    pub fn single(grid: VoxelGrid) -> Self {
        Self { frames: vec![grid] }
    }

    /// Returns the dims shared by all frames.
    #[must_use]
    pub fn dims(&self) -> UVec3 {
        self.frames[0].dims()
    }

    /// Returns the frames in file order.
    #[must_use]
    pub fn frames(&self) -> &[VoxelGrid] {
        &self.frames
    }

    /// Consumes the data cube, returning its frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<VoxelGrid> {
        self.frames
    }

    /// Writes the data cube and returns the number of bytes written.
    pub fn write_to(&self, mut writer: impl Write) -> Result<u64> {
        let dims = self.dims();
        let header = BvoxHeader {
            nx: dims.x,
            ny: dims.y,
            nz: dims.z,
            frames: self.frames.len() as u32,
        };
        writer.write_all(bytemuck::bytes_of(&header.swap_to_le()))?;
        let mut written = BvoxHeader::SIZE as u64;

        for frame in &self.frames {
            for z in 0..dims.z {
                for y in 0..dims.y {
                    for x in 0..dims.x {
                        let value = frame.get(x, y, z).unwrap_or(0.0);
                        writer.write_all(&value.to_le_bytes())?;
                        written += 4;
                    }
                }
            }
        }
        writer.flush()?;
        Ok(written)
    }

    /// Reads a data cube.
    ///
    /// Truncated input fails with [`VoxelError::Io`]; trailing bytes are
    /// ignored.
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut header = BvoxHeader::zeroed();
        reader.read_exact(bytemuck::bytes_of_mut(&mut header))?;
        let header = header.swap_from_le();
        let dims = header.dims();

        if header.frames == 0 {
            return Err(VoxelError::InvalidFormat("no frames".to_string()));
        }
        let cells = (dims.x as usize)
            .checked_mul(dims.y as usize)
            .and_then(|c| c.checked_mul(dims.z as usize))
            .filter(|c| c.checked_mul(4).is_some())
            .ok_or_else(|| VoxelError::InvalidFormat(format!("dims {dims} overflow")))?;

        // Sizes come from an untrusted header: grow buffers only as bytes arrive.
        let frame_bytes = (cells * 4) as u64;
        let mut raw = Vec::new();
        let mut frames = Vec::new();
        for _ in 0..header.frames {
            raw.clear();
            let read = reader.by_ref().take(frame_bytes).read_to_end(&mut raw)?;
            if (read as u64) < frame_bytes {
                return Err(VoxelError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("frame {} truncated: {read} of {frame_bytes} bytes", frames.len()),
                )));
            }
            let values: Vec<f32> = raw
                .chunks_exact(4)
                .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect();
            let (nx, ny) = (dims.x as usize, dims.y as usize);
            frames.push(VoxelGrid::from_fn(dims, |idx| {
                values[(idx.z as usize * ny + idx.y as usize) * nx + idx.x as usize]
            }));
        }
        log::debug!("read bvox {dims} with {} frame(s)", frames.len());
        Ok(Self { frames })
    }

    /// Writes the data cube to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.write_to(BufWriter::new(File::create(path)?))?;
        log::info!("wrote {bytes} bytes to {}", path.display());
        Ok(())
    }

    /// Reads a data cube from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::read_from(BufReader::new(File::open(path)?))
    }
}
