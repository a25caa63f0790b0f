//! Immutable runtime configuration.
//!
//! `CHUNK_SIZE` and the packed-vertex bit widths stay compile-time constants
//! (`constants.rs`) because they are baked into the mesh byte stream. Values
//! a host can reasonably change without touching the wire format — world
//! extent, the raycast cutoff, and frustum geometry — live here instead of
//! behind mutable globals. Construct once at program start and pass by
//! shared reference.

use crate::constants::{CHUNK_SIZE, MAX_RAY_DISTANCE, PACKED_COORD_BITS, WORLD_DEPTH, WORLD_HEIGHT, WORLD_WIDTH};
use crate::error::{VoxelError, VoxelResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub world_width: u32,
    pub world_height: u32,
    pub world_depth: u32,
    pub max_ray_distance: f32,
    pub fov_deg: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub pitch_max_deg: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            world_depth: WORLD_DEPTH,
            max_ray_distance: MAX_RAY_DISTANCE,
            fov_deg: 50.0,
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 2000.0,
            pitch_max_deg: 89.0,
        }
    }
}

impl WorldConfig {
    /// Validate a configuration, matching the policy in spec §7/§10.2:
    /// this is the one place `VoxelError` is returned, since it runs once
    /// at startup and is not performance sensitive.
    pub fn validate(self) -> VoxelResult<Self> {
        let max_chunk_size = (1u32 << PACKED_COORD_BITS) - 1;
        if CHUNK_SIZE > max_chunk_size {
            return Err(VoxelError::ChunkSizeTooLarge {
                size: CHUNK_SIZE,
                max: max_chunk_size,
            });
        }
        if self.world_width == 0 {
            return Err(VoxelError::EmptyWorldDimension { dimension: "width", value: 0 });
        }
        if self.world_height == 0 {
            return Err(VoxelError::EmptyWorldDimension { dimension: "height", value: 0 });
        }
        if self.world_depth == 0 {
            return Err(VoxelError::EmptyWorldDimension { dimension: "depth", value: 0 });
        }
        if self.max_ray_distance <= 0.0 {
            return Err(VoxelError::NonPositiveRayDistance(self.max_ray_distance));
        }
        log::info!(
            "[WorldConfig::validate] configuration validated: {}x{}x{} chunks",
            self.world_width,
            self.world_height,
            self.world_depth
        );
        Ok(self)
    }

    pub fn world_area(&self) -> u32 {
        self.world_width * self.world_depth
    }

    pub fn world_volume(&self) -> u32 {
        self.world_area() * self.world_height
    }
}
