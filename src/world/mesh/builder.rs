//! The chunk mesh builder (spec §4.2): face culling, ambient occlusion, and
//! quad-flip selection, unrolled one block per face exactly as
//! `original_source/.../chunk_mesh_builder.py::build_chunk_mesh` lays it out
//! — an explicit block per face keeps the inner loop branch-free rather than
//! dispatching through a per-face table at runtime.

use crate::constants::{CHUNK_SIZE, CHUNK_VOLUME};
use crate::world::core::{BlockId, ChunkPos, VoxelPos};
use crate::world::storage::{local_index, WorldBlocks};

use super::ao::{ao_samples, flip_id, Plane};
use super::vertex::pack_vertex;

/// Capacity hint for the output buffer (spec §4.2 "buffer sizing"): 18
/// packed words per voxel (6 vertices/face times the typical case of up to
/// 3 visible faces per voxel). An isolated voxel can show all 6 faces
/// (36 words); the `Vec` simply reallocates past this hint rather than
/// truncating, unlike the original's fixed-size buffer.
const WORDS_PER_VOXEL_CAPACITY_HINT: usize = 18;

/// Build the packed vertex stream for one chunk.
///
/// `chunk_blocks` must be the block slice for `chunk_coord`'s own chunk
/// (`world.chunk_slice(chunk_index)`); `world` is consulted for every
/// neighbor lookup so visibility and AO are correct across chunk
/// boundaries (spec §3/§4.2). Returns the written prefix only — the
/// original's `vertex_data[: index + 1]` off-by-one is not reproduced
/// (spec §9 open question).
pub fn build_chunk_mesh(chunk_blocks: &[BlockId], chunk_coord: ChunkPos, world: &WorldBlocks) -> Vec<u32> {
    debug_assert_eq!(chunk_blocks.len(), CHUNK_VOLUME as usize);

    let mut out = Vec::with_capacity(CHUNK_VOLUME as usize * WORDS_PER_VOXEL_CAPACITY_HINT);
    let base = chunk_coord.translation();
    let (base_x, base_y, base_z) = (base.x as i32, base.y as i32, base.z as i32);

    for lx in 0..CHUNK_SIZE {
        for ly in 0..CHUNK_SIZE {
            for lz in 0..CHUNK_SIZE {
                let voxel_id = chunk_blocks[local_index(lx, ly, lz)];
                if voxel_id.is_void() {
                    continue;
                }

                let (x, y, z) = (lx, ly, lz);
                let wx = base_x + x as i32;
                let wy = base_y + y as i32;
                let wz = base_z + z as i32;

                // +Y top
                if world.is_void(VoxelPos::new(wx, wy + 1, wz)) {
                    let ao = ao_samples(Plane::Y, world, VoxelPos::new(wx, wy + 1, wz));
                    let flip = flip_id(ao);
                    let v0 = pack_vertex(x as u8, y as u8 + 1, z as u8, voxel_id.0, 0, ao.0, flip as u8);
                    let v1 = pack_vertex(x as u8 + 1, y as u8 + 1, z as u8, voxel_id.0, 0, ao.1, flip as u8);
                    let v2 = pack_vertex(x as u8 + 1, y as u8 + 1, z as u8 + 1, voxel_id.0, 0, ao.2, flip as u8);
                    let v3 = pack_vertex(x as u8, y as u8 + 1, z as u8 + 1, voxel_id.0, 0, ao.3, flip as u8);
                    if flip {
                        out.extend_from_slice(&[v1, v0, v3, v1, v3, v2]);
                    } else {
                        out.extend_from_slice(&[v0, v3, v2, v0, v2, v1]);
                    }
                }

                // -Y bottom
                if world.is_void(VoxelPos::new(wx, wy - 1, wz)) {
                    let ao = ao_samples(Plane::Y, world, VoxelPos::new(wx, wy - 1, wz));
                    let flip = flip_id(ao);
                    let v0 = pack_vertex(x as u8, y as u8, z as u8, voxel_id.0, 1, ao.0, flip as u8);
                    let v1 = pack_vertex(x as u8 + 1, y as u8, z as u8, voxel_id.0, 1, ao.1, flip as u8);
                    let v2 = pack_vertex(x as u8 + 1, y as u8, z as u8 + 1, voxel_id.0, 1, ao.2, flip as u8);
                    let v3 = pack_vertex(x as u8, y as u8, z as u8 + 1, voxel_id.0, 1, ao.3, flip as u8);
                    if flip {
                        out.extend_from_slice(&[v1, v3, v0, v1, v2, v3]);
                    } else {
                        out.extend_from_slice(&[v0, v2, v3, v0, v1, v2]);
                    }
                }

                // +X right
                if world.is_void(VoxelPos::new(wx + 1, wy, wz)) {
                    let ao = ao_samples(Plane::X, world, VoxelPos::new(wx + 1, wy, wz));
                    let flip = flip_id(ao);
                    let v0 = pack_vertex(x as u8 + 1, y as u8, z as u8, voxel_id.0, 2, ao.0, flip as u8);
                    let v1 = pack_vertex(x as u8 + 1, y as u8 + 1, z as u8, voxel_id.0, 2, ao.1, flip as u8);
                    let v2 = pack_vertex(x as u8 + 1, y as u8 + 1, z as u8 + 1, voxel_id.0, 2, ao.2, flip as u8);
                    let v3 = pack_vertex(x as u8 + 1, y as u8, z as u8 + 1, voxel_id.0, 2, ao.3, flip as u8);
                    if flip {
                        out.extend_from_slice(&[v3, v0, v1, v3, v1, v2]);
                    } else {
                        out.extend_from_slice(&[v0, v1, v2, v0, v2, v3]);
                    }
                }

                // -X left
                if world.is_void(VoxelPos::new(wx - 1, wy, wz)) {
                    let ao = ao_samples(Plane::X, world, VoxelPos::new(wx - 1, wy, wz));
                    let flip = flip_id(ao);
                    let v0 = pack_vertex(x as u8, y as u8, z as u8, voxel_id.0, 3, ao.0, flip as u8);
                    let v1 = pack_vertex(x as u8, y as u8 + 1, z as u8, voxel_id.0, 3, ao.1, flip as u8);
                    let v2 = pack_vertex(x as u8, y as u8 + 1, z as u8 + 1, voxel_id.0, 3, ao.2, flip as u8);
                    let v3 = pack_vertex(x as u8, y as u8, z as u8 + 1, voxel_id.0, 3, ao.3, flip as u8);
                    if flip {
                        out.extend_from_slice(&[v3, v1, v0, v3, v2, v1]);
                    } else {
                        out.extend_from_slice(&[v0, v2, v1, v0, v3, v2]);
                    }
                }

                // -Z back
                if world.is_void(VoxelPos::new(wx, wy, wz - 1)) {
                    let ao = ao_samples(Plane::Z, world, VoxelPos::new(wx, wy, wz - 1));
                    let flip = flip_id(ao);
                    let v0 = pack_vertex(x as u8, y as u8, z as u8, voxel_id.0, 4, ao.0, flip as u8);
                    let v1 = pack_vertex(x as u8, y as u8 + 1, z as u8, voxel_id.0, 4, ao.1, flip as u8);
                    let v2 = pack_vertex(x as u8 + 1, y as u8 + 1, z as u8, voxel_id.0, 4, ao.2, flip as u8);
                    let v3 = pack_vertex(x as u8 + 1, y as u8, z as u8, voxel_id.0, 4, ao.3, flip as u8);
                    if flip {
                        out.extend_from_slice(&[v3, v0, v1, v3, v1, v2]);
                    } else {
                        out.extend_from_slice(&[v0, v1, v2, v0, v2, v3]);
                    }
                }

                // +Z front
                if world.is_void(VoxelPos::new(wx, wy, wz + 1)) {
                    let ao = ao_samples(Plane::Z, world, VoxelPos::new(wx, wy, wz + 1));
                    let flip = flip_id(ao);
                    let v0 = pack_vertex(x as u8, y as u8, z as u8 + 1, voxel_id.0, 5, ao.0, flip as u8);
                    let v1 = pack_vertex(x as u8, y as u8 + 1, z as u8 + 1, voxel_id.0, 5, ao.1, flip as u8);
                    let v2 = pack_vertex(x as u8 + 1, y as u8 + 1, z as u8 + 1, voxel_id.0, 5, ao.2, flip as u8);
                    let v3 = pack_vertex(x as u8 + 1, y as u8, z as u8 + 1, voxel_id.0, 5, ao.3, flip as u8);
                    if flip {
                        out.extend_from_slice(&[v3, v1, v0, v3, v2, v1]);
                    } else {
                        out.extend_from_slice(&[v0, v2, v1, v0, v3, v2]);
                    }
                }
            }
        }
    }

    out
}
