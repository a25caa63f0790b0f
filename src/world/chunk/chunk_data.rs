//! Chunk data — pure data, no methods. See `chunk_operations` for the
//! functions that build and update it.

use crate::render_interface::MeshHandle;
use crate::world::core::ChunkPos;

/// A single chunk's bookkeeping: its coordinate, its cached
/// world-space transform, whether it is entirely air, and the handle to
/// whatever mesh is currently uploaded for it (`None` until the first
/// build).
#[derive(Debug, Clone)]
pub struct ChunkData {
    pub coord: ChunkPos,
    pub translation: cgmath::Vector3<f32>,
    pub center: cgmath::Point3<f32>,
    pub is_empty: bool,
    pub mesh: Option<MeshHandle>,
}
