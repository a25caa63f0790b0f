//! Core world data types — fundamental structures shared by storage,
//! generation, meshing, and the block handler.

mod block;
mod position;
mod ray;

pub use block::BlockId;
pub use position::{ChunkPos, VoxelPos};
pub use ray::{BlockFace, Ray, RaycastHit};
