//! Pure functions over [`ChunkData`].

use crate::constants::CHUNK_VOLUME;
use crate::world::core::{BlockId, ChunkPos};
use crate::world::storage::WorldBlocks;

use super::chunk_data::ChunkData;

/// Construct a chunk's bookkeeping from its coordinate. `is_empty` is
/// computed by scanning the chunk's already-generated block slice, so this
/// must run after terrain generation has populated `world` (spec §4.1,
/// build phase step 3).
pub fn new_chunk(coord: ChunkPos, chunk_index: usize, world: &WorldBlocks) -> ChunkData {
    ChunkData {
        coord,
        translation: coord.translation(),
        center: coord.center(),
        is_empty: is_chunk_empty(world.chunk_slice(chunk_index)),
        mesh: None,
    }
}

/// `true` iff every voxel in the slice is zero.
pub fn is_chunk_empty(blocks: &[BlockId]) -> bool {
    debug_assert_eq!(blocks.len(), CHUNK_VOLUME as usize);
    blocks.iter().all(BlockId::is_void)
}

/// Recompute `is_empty` after an edit and write it back onto the chunk.
pub fn refresh_is_empty(chunk: &mut ChunkData, world: &WorldBlocks, chunk_index: usize) {
    chunk.is_empty = is_chunk_empty(world.chunk_slice(chunk_index));
}
