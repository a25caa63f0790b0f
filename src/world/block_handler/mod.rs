//! Block handler: owns the currently targeted block (from the raycast),
//! supports add/remove, and reports which chunks need a mesh rebuild
//! (spec §4.3), grounded on `original_source/.../block_handler.py`.

mod raycast;

pub use raycast::raycast;

use crate::constants::CHUNK_SIZE;
use crate::world::core::{BlockId, ChunkPos, RaycastHit, VoxelPos};
use crate::world::storage::{chunk_index, WorldBlocks};

/// Remove (0) or add (1), per spec §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Remove,
    Add,
}

/// Targeted-block state, owned by the block handler (spec §3). `hit` is
/// `None` on a raycast miss; edits become no-ops in that frame (spec §7).
#[derive(Debug, Clone, Copy)]
pub struct BlockHandlerData {
    pub hit: Option<RaycastHit>,
    pub interaction_mode: InteractionMode,
    pub new_block_id: BlockId,
}

impl Default for BlockHandlerData {
    fn default() -> Self {
        Self {
            hit: None,
            interaction_mode: InteractionMode::Remove,
            new_block_id: BlockId(1),
        }
    }
}

impl BlockHandlerData {
    /// Re-run the raycast and refresh the targeted-block state. Leaves
    /// `interaction_mode`/`new_block_id` untouched — only the per-frame
    /// target fields are the raycast's concern (spec §3).
    pub fn update_raycast(
        &mut self,
        world: &WorldBlocks,
        eye: cgmath::Point3<f32>,
        forward: cgmath::Vector3<f32>,
        max_distance: f32,
    ) {
        self.hit = raycast::raycast(world, eye, forward, max_distance);
    }

    pub fn switch_mode(&mut self) {
        self.interaction_mode = match self.interaction_mode {
            InteractionMode::Remove => InteractionMode::Add,
            InteractionMode::Add => InteractionMode::Remove,
        };
    }

    /// Dispatch to [`Self::add_block`] or [`Self::remove_block`] per the
    /// current mode (spec §4.3 `set_block`).
    pub fn set_block(&self, world: &mut WorldBlocks) -> Vec<ChunkPos> {
        match self.interaction_mode {
            InteractionMode::Add => self.add_block(world).into_iter().collect(),
            InteractionMode::Remove => self.remove_block(world),
        }
    }

    /// Write `new_block_id` into the empty cell across the targeted face.
    /// No-op (returns `None`) if there is no target, the target cell is
    /// already solid, or it falls outside the world box (spec §4.3/§7).
    pub fn add_block(&self, world: &mut WorldBlocks) -> Option<ChunkPos> {
        let hit = self.hit?;
        let target = hit.block_world_position.offset(
            hit.block_normal.x,
            hit.block_normal.y,
            hit.block_normal.z,
        );
        if !world.is_void(target) {
            log::debug!("[BlockHandlerData::add_block] target {target:?} is already occupied, ignoring");
            return None;
        }
        if !world.set(target, self.new_block_id) {
            return None;
        }
        log::trace!("[BlockHandlerData::add_block] placed block {:?} at {target:?}", self.new_block_id);
        Some(target.to_chunk_pos())
    }

    /// Clear the targeted voxel and report every chunk whose mesh depends on
    /// it: the owning chunk, plus any neighbor chunk across a boundary the
    /// voxel sits on (spec §4.3 `remove_block`/`rebuild_adjacent_chunks`).
    /// No-op (returns an empty list) on a raycast miss.
    pub fn remove_block(&self, world: &mut WorldBlocks) -> Vec<ChunkPos> {
        let Some(hit) = self.hit else {
            return Vec::new();
        };
        world.set(hit.block_world_position, BlockId::AIR);

        let mut dirty = vec![hit.chunk];
        let (lx, ly, lz) = hit.block_local_position;
        let VoxelPos { x: wx, y: wy, z: wz } = hit.block_world_position;
        let config = *world.config();

        let mut push_neighbor = |pos: VoxelPos| {
            let chunk = pos.to_chunk_pos();
            if chunk_index(chunk.cx, chunk.cy, chunk.cz, &config).is_some() && !dirty.contains(&chunk) {
                dirty.push(chunk);
            }
        };

        if lx == 0 {
            push_neighbor(VoxelPos::new(wx - 1, wy, wz));
        } else if lx == CHUNK_SIZE - 1 {
            push_neighbor(VoxelPos::new(wx + 1, wy, wz));
        }
        if ly == 0 {
            push_neighbor(VoxelPos::new(wx, wy - 1, wz));
        } else if ly == CHUNK_SIZE - 1 {
            push_neighbor(VoxelPos::new(wx, wy + 1, wz));
        }
        if lz == 0 {
            push_neighbor(VoxelPos::new(wx, wy, wz - 1));
        } else if lz == CHUNK_SIZE - 1 {
            push_neighbor(VoxelPos::new(wx, wy, wz + 1));
        }

        log::trace!(
            "[BlockHandlerData::remove_block] removed voxel at {:?}, {} chunk(s) need a rebuild",
            hit.block_world_position,
            dirty.len()
        );
        dirty
    }
}
