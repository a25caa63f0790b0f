//! World-wide flat voxel storage.
//!
//! A single contiguous `world_blocks[WORLD_VOLUME][CHUNK_VOLUME]` array, so
//! the mesh builder can resolve any neighbor voxel — including across a
//! chunk boundary — with two integer divisions instead of chasing a
//! neighbor-chunk pointer. See spec §3/§9 ("flat world storage vs
//! chunk-owned storage").

use crate::config::WorldConfig;
use crate::constants::{CHUNK_AREA, CHUNK_SIZE, CHUNK_VOLUME};
use crate::world::core::{BlockId, ChunkPos, VoxelPos};

/// Every chunk coordinate in the world box, in the exact order that
/// `chunk_index` assigns indices (cx fastest, then cz, then cy) — so
/// `all_chunk_coords(config).enumerate()` lines up with `chunk_index`.
pub fn all_chunk_coords(config: &WorldConfig) -> impl Iterator<Item = ChunkPos> + '_ {
    (0..config.world_height).flat_map(move |cy| {
        (0..config.world_depth).flat_map(move |cz| {
            (0..config.world_width).map(move |cx| ChunkPos::new(cx as i32, cy as i32, cz as i32))
        })
    })
}

/// Chunk index from chunk coordinates, per spec §3: `cx + WIDTH*cz + AREA*cy`.
/// Returns `None` if the coordinate is outside the world box — callers treat
/// that as "void" (spec §7, out-of-world lookup policy).
#[inline]
pub fn chunk_index(cx: i32, cy: i32, cz: i32, config: &WorldConfig) -> Option<usize> {
    if cx < 0
        || cy < 0
        || cz < 0
        || cx as u32 >= config.world_width
        || cy as u32 >= config.world_height
        || cz as u32 >= config.world_depth
    {
        return None;
    }
    let width = config.world_width as i32;
    let area = config.world_area() as i32;
    Some((cx + width * cz + area * cy) as usize)
}

/// Local block index from local coordinates, per spec §3:
/// `lx + CHUNK_SIZE*lz + CHUNK_AREA*ly` (Y varies slowest, then Z, then X).
#[inline]
pub const fn local_index(lx: u32, ly: u32, lz: u32) -> usize {
    (lx + CHUNK_SIZE * lz + CHUNK_AREA * ly) as usize
}

/// Inverse of [`local_index`] — decodes a local block index back to its
/// `(lx, ly, lz)` triple.
#[inline]
pub const fn local_index_to_coord(index: usize) -> (u32, u32, u32) {
    let index = index as u32;
    let ly = index / CHUNK_AREA;
    let rem = index % CHUNK_AREA;
    let lz = rem / CHUNK_SIZE;
    let lx = rem % CHUNK_SIZE;
    (lx, ly, lz)
}

/// The world's voxel storage: one `Vec<BlockId>` of length `CHUNK_VOLUME`
/// per chunk. Resizing the outer `Vec` never touches an existing inner
/// `Vec`'s heap allocation, so a chunk's block slice stays stable for as
/// long as the chunk itself is not replaced — the invariant spec §3
/// requires ("no aliasing, no relocation").
pub struct WorldBlocks {
    config: WorldConfig,
    chunks: Vec<Vec<BlockId>>,
}

impl WorldBlocks {
    /// Zero-initialize storage for every chunk in the world box.
    pub fn new(config: WorldConfig) -> Self {
        let chunk_count = config.world_volume() as usize;
        let chunks = (0..chunk_count)
            .map(|_| vec![BlockId::AIR; CHUNK_VOLUME as usize])
            .collect();
        Self { config, chunks }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn chunk_slice(&self, chunk_index: usize) -> &[BlockId] {
        &self.chunks[chunk_index]
    }

    pub fn chunk_slice_mut(&mut self, chunk_index: usize) -> &mut [BlockId] {
        &mut self.chunks[chunk_index]
    }

    /// Every chunk's block slice, disjoint and mutable, in `chunk_index`
    /// order. Lets callers fill each chunk's terrain in parallel (spec §5:
    /// "Initial generation writes each chunk's slice from exactly one
    /// builder... parallelized with rayon") without holding `&mut self`
    /// across the whole loop.
    pub fn chunks_mut(&mut self) -> &mut [Vec<BlockId>] {
        &mut self.chunks
    }

    /// Read a voxel by world position. Out-of-world reads return
    /// [`BlockId::AIR`] (spec §7: out-of-world lookup is never fatal).
    pub fn get(&self, pos: VoxelPos) -> BlockId {
        let chunk_pos = pos.to_chunk_pos();
        match chunk_index(chunk_pos.cx, chunk_pos.cy, chunk_pos.cz, &self.config) {
            Some(idx) => {
                let (lx, ly, lz) = pos.to_local();
                self.chunks[idx][local_index(lx, ly, lz)]
            }
            None => BlockId::AIR,
        }
    }

    /// `true` if the voxel at `pos` is empty, treating out-of-world as void.
    pub fn is_void(&self, pos: VoxelPos) -> bool {
        self.get(pos).is_void()
    }

    /// Write a voxel by world position. Returns `false` without writing if
    /// `pos` is outside the world box (spec §7: out-of-world edit is a
    /// silent no-op).
    pub fn set(&mut self, pos: VoxelPos, id: BlockId) -> bool {
        let chunk_pos = pos.to_chunk_pos();
        match chunk_index(chunk_pos.cx, chunk_pos.cy, chunk_pos.cz, &self.config) {
            Some(idx) => {
                let (lx, ly, lz) = pos.to_local();
                self.chunks[idx][local_index(lx, ly, lz)] = id;
                true
            }
            None => {
                log::warn!("[WorldBlocks::set] edit target {pos:?} is outside the world box, ignoring");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_index_round_trips_for_every_coordinate() {
        // Exhaustive over a representative subset (full CHUNK_SIZE^3 is
        // 110_592 iterations, cheap enough to run exhaustively).
        for lx in 0..CHUNK_SIZE {
            for ly in 0..CHUNK_SIZE {
                for lz in 0..CHUNK_SIZE {
                    let idx = local_index(lx, ly, lz);
                    assert_eq!(local_index_to_coord(idx), (lx, ly, lz));
                }
            }
        }
    }

    #[test]
    fn chunk_index_matches_spec_formula() {
        let config = WorldConfig::default();
        // cx + WIDTH*cz + AREA*cy
        let expected = 3 + config.world_width as i32 * 2 + config.world_area() as i32 * 1;
        assert_eq!(chunk_index(3, 1, 2, &config), Some(expected as usize));
    }

    #[test]
    fn all_chunk_coords_order_matches_chunk_index() {
        let config = WorldConfig {
            world_width: 3,
            world_height: 2,
            world_depth: 2,
            ..WorldConfig::default()
        };
        for (index, coord) in all_chunk_coords(&config).enumerate() {
            assert_eq!(chunk_index(coord.cx, coord.cy, coord.cz, &config), Some(index));
        }
        assert_eq!(all_chunk_coords(&config).count(), config.world_volume() as usize);
    }

    #[test]
    fn chunk_index_out_of_world_is_none() {
        let config = WorldConfig::default();
        assert_eq!(chunk_index(-1, 0, 0, &config), None);
        assert_eq!(chunk_index(config.world_width as i32, 0, 0, &config), None);
    }

    #[test]
    fn out_of_world_read_is_void_not_fatal() {
        let world = WorldBlocks::new(WorldConfig::default());
        let far_away = VoxelPos::new(100_000, 0, 0);
        assert!(world.is_void(far_away));
        assert_eq!(world.get(far_away), BlockId::AIR);
    }

    #[test]
    fn out_of_world_write_is_silent_no_op() {
        let mut world = WorldBlocks::new(WorldConfig::default());
        let far_away = VoxelPos::new(100_000, 0, 0);
        assert!(!world.set(far_away, BlockId(1)));
    }

    #[test]
    fn in_world_write_then_read_round_trips() {
        let mut world = WorldBlocks::new(WorldConfig::default());
        let pos = VoxelPos::new(5, 5, 5);
        assert!(world.set(pos, BlockId(9)));
        assert_eq!(world.get(pos), BlockId(9));
        assert!(!world.is_void(pos));
    }
}
