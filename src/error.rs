//! Error types for the voxel core.
//!
//! Per-voxel operations (get/set a block, raycast, neighbor lookup) never
//! return `Result`: their error policy is a sentinel value (void on
//! out-of-world read, silent no-op on out-of-world edit) so the hot loops in
//! `world::mesh::builder` and `world::block_handler::raycast` stay
//! `Result`-free. `VoxelError` exists for the operations that run once and
//! are worth reporting: constructing a `WorldConfig`.

use thiserror::Error;

pub type VoxelResult<T> = Result<T, VoxelError>;

#[derive(Debug, Error, PartialEq)]
pub enum VoxelError {
    #[error("chunk size {size} does not fit the packed vertex coordinate field (max {max})")]
    ChunkSizeTooLarge { size: u32, max: u32 },

    #[error("world dimension {dimension} must be at least 1 chunk, got {value}")]
    EmptyWorldDimension { dimension: &'static str, value: u32 },

    #[error("max_ray_distance must be positive, got {0}")]
    NonPositiveRayDistance(f32),
}
