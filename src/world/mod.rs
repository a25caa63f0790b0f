//! The voxel world: flat cross-chunk block storage, chunk bookkeeping,
//! terrain generation, the mesh builder, and the block handler/raycast
//! (spec §2). Components are listed here leaves-first, matching the spec's
//! dependency order.

pub mod block_handler;
pub mod chunk;
pub mod core;
pub mod generation;
pub mod mesh;
pub mod storage;

pub use block_handler::{raycast, BlockHandlerData, InteractionMode};
pub use chunk::ChunkData;
pub use core::{BlockFace, BlockId, ChunkPos, Ray, RaycastHit, VoxelPos};
pub use generation::{default_height_fn, fill_chunk_blocks, HeightFn};
pub use mesh::{build_chunk_mesh, pack_vertex, unpack_vertex};
pub use storage::{all_chunk_coords, chunk_index, local_index, local_index_to_coord, WorldBlocks};

use rayon::prelude::*;

use crate::config::WorldConfig;
use crate::render_interface::MeshSink;

/// Generate every chunk's blocks, then its bookkeeping (spec §4.1, build
/// phase steps 1-2). Meshes are built separately by [`build_all_meshes`],
/// which MUST run only after this returns — the builder reads into
/// neighbor chunks and must never see an unpopulated one (spec §4.1
/// rationale).
pub fn generate_world(config: WorldConfig, height_fn: &generation::HeightFn<'_>) -> (WorldBlocks, Vec<ChunkData>) {
    let mut world = WorldBlocks::new(config);
    let coords: Vec<ChunkPos> = storage::all_chunk_coords(&config).collect();

    // Each chunk's terrain column depends only on its own world-space
    // coordinate, so filling every chunk's slice is embarrassingly
    // parallel (spec §5) — the same `rayon` fan-out `build_all_meshes`
    // uses below, applied to the generation phase instead.
    world
        .chunks_mut()
        .par_iter_mut()
        .zip(coords.par_iter())
        .for_each(|(blocks, coord)| {
            generation::fill_chunk_blocks(blocks, coord.translation(), height_fn);
        });

    let chunks: Vec<ChunkData> = coords
        .into_iter()
        .enumerate()
        .map(|(index, coord)| chunk::new_chunk(coord, index, &world))
        .collect();

    let empty_count = chunks.iter().filter(|c| c.is_empty).count();
    log::debug!(
        "[generate_world] generated {} chunks ({} empty, {} solid)",
        chunks.len(),
        empty_count,
        chunks.len() - empty_count
    );

    (world, chunks)
}

/// Build every chunk's packed vertex stream in parallel (spec §5: the
/// builder is a pure function over read-only `world_blocks`, so the initial
/// mesh pass — like terrain generation above — parallelizes across chunks
/// for free). Empty chunks produce an empty stream without invoking the
/// builder at all.
pub fn build_all_meshes(world: &WorldBlocks, chunks: &[ChunkData]) -> Vec<Vec<u32>> {
    let meshes: Vec<Vec<u32>> = chunks
        .par_iter()
        .enumerate()
        .map(|(index, chunk)| {
            if chunk.is_empty {
                Vec::new()
            } else {
                mesh::build_chunk_mesh(world.chunk_slice(index), chunk.coord, world)
            }
        })
        .collect();

    let total_words: usize = meshes.iter().map(Vec::len).sum();
    log::debug!(
        "[build_all_meshes] built {} chunk meshes, {} vertex words total",
        meshes.len(),
        total_words
    );
    meshes
}

/// Upload every chunk's mesh bytes through `sink`, in order, recording each
/// returned handle on the matching [`ChunkData`]. Sequential: spec §5 only
/// calls out the *build* step as parallelizable, not GPU upload.
pub fn upload_all_meshes<S: MeshSink>(chunks: &mut [ChunkData], meshes: &[Vec<u32>], sink: &mut S) {
    for (chunk, words) in chunks.iter_mut().zip(meshes) {
        let bytes = bytemuck::cast_slice(words.as_slice());
        chunk.mesh = Some(sink.upload_mesh(chunk.mesh, bytes));
    }
}

/// Rebuild and reupload one chunk's mesh after an edit (spec §4.1: "after
/// any voxel mutation... the chunk's mesh... MUST be rebuilt before next
/// render"). A `coord` outside the world box is silently ignored, matching
/// the out-of-world policy edits already follow (spec §7).
pub fn rebuild_chunk<S: MeshSink>(
    world: &WorldBlocks,
    chunks: &mut [ChunkData],
    config: &WorldConfig,
    coord: ChunkPos,
    sink: &mut S,
) {
    let Some(index) = storage::chunk_index(coord.cx, coord.cy, coord.cz, config) else {
        log::warn!("[rebuild_chunk] rebuild requested for {coord:?}, which is outside the world box, ignoring");
        return;
    };
    chunk::refresh_is_empty(&mut chunks[index], world, index);

    let words = if chunks[index].is_empty {
        Vec::new()
    } else {
        mesh::build_chunk_mesh(world.chunk_slice(index), coord, world)
    };
    log::trace!("[rebuild_chunk] rebuilt {coord:?}: {} vertex words", words.len());
    let bytes = bytemuck::cast_slice(words.as_slice());
    chunks[index].mesh = Some(sink.upload_mesh(chunks[index].mesh, bytes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_interface::MeshHandle;

    struct FakeSink {
        next_handle: u32,
        uploads: Vec<(MeshHandle, usize)>,
    }

    impl MeshSink for FakeSink {
        fn upload_mesh(&mut self, handle: Option<MeshHandle>, bytes: &[u8]) -> MeshHandle {
            let handle = handle.unwrap_or_else(|| {
                let h = MeshHandle(self.next_handle);
                self.next_handle += 1;
                h
            });
            self.uploads.push((handle, bytes.len()));
            handle
        }

        fn draw_chunk(&mut self, _handle: MeshHandle, _model: cgmath::Matrix4<f32>) {}
    }

    #[test]
    fn generate_world_populates_every_chunk_slot() {
        let config = WorldConfig {
            world_width: 2,
            world_height: 1,
            world_depth: 2,
            ..WorldConfig::default()
        };
        let flat_ground = |_wx: i32, _wz: i32| 5;
        let (world, chunks) = generate_world(config, &flat_ground);
        assert_eq!(chunks.len(), config.world_volume() as usize);
        for chunk in &chunks {
            assert!(!chunk.is_empty);
            assert!(chunk.mesh.is_none());
        }
        let _ = world;
    }

    #[test]
    fn empty_world_produces_empty_meshes_for_every_chunk() {
        let config = WorldConfig {
            world_width: 1,
            world_height: 1,
            world_depth: 1,
            ..WorldConfig::default()
        };
        let no_ground = |_wx: i32, _wz: i32| 0;
        let (world, chunks) = generate_world(config, &no_ground);
        let meshes = build_all_meshes(&world, &chunks);
        assert!(meshes.iter().all(|m| m.is_empty()));
    }

    #[test]
    fn rebuild_chunk_updates_mesh_handle_and_emptiness() {
        let config = WorldConfig {
            world_width: 1,
            world_height: 1,
            world_depth: 1,
            ..WorldConfig::default()
        };
        let no_ground = |_wx: i32, _wz: i32| 0;
        let (mut world, mut chunks) = generate_world(config, &no_ground);
        assert!(chunks[0].is_empty);

        world.set(VoxelPos::new(0, 0, 0), BlockId(1));
        let mut sink = FakeSink { next_handle: 0, uploads: Vec::new() };
        rebuild_chunk(&world, &mut chunks, &config, ChunkPos::new(0, 0, 0), &mut sink);

        assert!(!chunks[0].is_empty);
        assert!(chunks[0].mesh.is_some());
        assert_eq!(sink.uploads.len(), 1);
        assert!(sink.uploads[0].1 > 0);
    }

    #[test]
    fn rebuild_chunk_out_of_world_is_a_silent_no_op() {
        let config = WorldConfig {
            world_width: 1,
            world_height: 1,
            world_depth: 1,
            ..WorldConfig::default()
        };
        let no_ground = |_wx: i32, _wz: i32| 0;
        let (world, mut chunks) = generate_world(config, &no_ground);
        let mut sink = FakeSink { next_handle: 0, uploads: Vec::new() };
        rebuild_chunk(&world, &mut chunks, &config, ChunkPos::new(5, 5, 5), &mut sink);
        assert!(sink.uploads.is_empty());
    }
}
