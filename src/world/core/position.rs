//! Chunk and voxel position types, and the conversions between them.
//!
//! The conversions intentionally duplicate neither `div_euclid`/`rem_euclid`
//! logic nor the chunk/local index formulas (those live in
//! `world::storage`, since they also need bounds checks against a
//! `WorldConfig`); this module only carries the coordinate math that is
//! always well-defined regardless of world extent.

use crate::constants::CHUNK_SIZE;

/// Position of a chunk, in chunk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkPos {
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// World-space translation of this chunk's origin corner.
    pub fn translation(&self) -> cgmath::Vector3<f32> {
        let size = CHUNK_SIZE as f32;
        cgmath::Vector3::new(self.cx as f32 * size, self.cy as f32 * size, self.cz as f32 * size)
    }

    /// World-space center of this chunk, used by the frustum tester.
    pub fn center(&self) -> cgmath::Point3<f32> {
        let size = CHUNK_SIZE as f32;
        cgmath::Point3::new(
            (self.cx as f32 + 0.5) * size,
            (self.cy as f32 + 0.5) * size,
            (self.cz as f32 + 0.5) * size,
        )
    }
}

/// Position of a voxel, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Chunk this voxel belongs to.
    pub fn to_chunk_pos(self) -> ChunkPos {
        let size = CHUNK_SIZE as i32;
        ChunkPos::new(
            self.x.div_euclid(size),
            self.y.div_euclid(size),
            self.z.div_euclid(size),
        )
    }

    /// Local coordinate of this voxel within its owning chunk.
    pub fn to_local(self) -> (u32, u32, u32) {
        let size = CHUNK_SIZE as i32;
        (
            self.x.rem_euclid(size) as u32,
            self.y.rem_euclid(size) as u32,
            self.z.rem_euclid(size) as u32,
        )
    }

    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}
