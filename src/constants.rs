//! Compile-time constants for the voxel core.
//!
//! `CHUNK_SIZE` and the packed-vertex bit widths are baked into the mesh
//! byte stream (see `world::mesh::vertex`); they are `const`, not part of
//! `WorldConfig`, because changing them changes the wire format.

use static_assertions::const_assert;

/// Edge length of a chunk cube, in voxels.
pub const CHUNK_SIZE: u32 = 48;
/// `CHUNK_SIZE²`.
pub const CHUNK_AREA: u32 = CHUNK_SIZE * CHUNK_SIZE;
/// `CHUNK_SIZE³`.
pub const CHUNK_VOLUME: u32 = CHUNK_AREA * CHUNK_SIZE;

/// Chunks along X and Z.
pub const WORLD_WIDTH: u32 = 10;
pub const WORLD_DEPTH: u32 = 10;
/// Chunks along Y.
pub const WORLD_HEIGHT: u32 = 2;
/// `WORLD_WIDTH * WORLD_DEPTH`.
pub const WORLD_AREA: u32 = WORLD_WIDTH * WORLD_DEPTH;
/// Total chunk count.
pub const WORLD_VOLUME: u32 = WORLD_AREA * WORLD_HEIGHT;

/// Raycast cutoff, in voxel units.
pub const MAX_RAY_DISTANCE: f32 = 6.0;

/// Bits available for a local axis coordinate in the packed vertex (0..63).
pub const PACKED_COORD_BITS: u32 = 6;
/// Bits available for the block id in the packed vertex (0..255).
pub const PACKED_BLOCK_ID_BITS: u32 = 8;

// CHUNK_SIZE must fit in PACKED_COORD_BITS bits: a face quad's far corner sits
// at local coordinate CHUNK_SIZE (not CHUNK_SIZE - 1), so the packable range is
// [0, 2^PACKED_COORD_BITS - 1] and CHUNK_SIZE itself must not exceed it.
const_assert!(CHUNK_SIZE <= (1 << PACKED_COORD_BITS) - 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants_match_fixed_parameters() {
        assert_eq!(CHUNK_AREA, 2304);
        assert_eq!(CHUNK_VOLUME, 110_592);
        assert_eq!(WORLD_AREA, 100);
        assert_eq!(WORLD_VOLUME, 200);
    }
}
