//! Ambient occlusion sampling and the quad-flip rule (spec §4.2).
//!
//! For a visible face, the eight neighbors around the *face-adjacent* void
//! voxel (the cell just across the face, in the plane perpendicular to the
//! face normal) are sampled and combined into four per-corner AO values.
//! The ring offsets below are transcribed unchanged from
//! `original_source/.../chunk_mesh_builder.py::get_ao` — same ring labels
//! `a..h`, same `plane` dispatch, same `ao0..ao3` combination.

use crate::world::core::VoxelPos;
use crate::world::storage::WorldBlocks;

/// The plane perpendicular to a face's normal, used to orient the AO ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    Y,
    X,
    Z,
}

/// Four per-corner AO values, in the order the vertex emit tables expect.
pub type AoCorners = (u8, u8, u8, u8);

#[inline]
fn void_at(world: &WorldBlocks, pos: VoxelPos) -> u8 {
    world.is_void(pos) as u8
}

/// Sample the AO ring around `face_pos` (the void voxel across the face,
/// in world coordinates) and combine into `(ao0, ao1, ao2, ao3)`.
pub fn ao_samples(plane: Plane, world: &WorldBlocks, face_pos: VoxelPos) -> AoCorners {
    let (x, y, z) = (face_pos.x, face_pos.y, face_pos.z);
    let v = |dx: i32, dy: i32, dz: i32| void_at(world, VoxelPos::new(x + dx, y + dy, z + dz));

    let (a, b, c, d, e, f, g, h) = match plane {
        Plane::Y => (
            v(0, 0, -1),
            v(-1, 0, -1),
            v(-1, 0, 0),
            v(-1, 0, 1),
            v(0, 0, 1),
            v(1, 0, 1),
            v(1, 0, 0),
            v(1, 0, -1),
        ),
        Plane::X => (
            v(0, 0, -1),
            v(0, -1, -1),
            v(0, -1, 0),
            v(0, -1, 1),
            v(0, 0, 1),
            v(0, 1, 1),
            v(0, 1, 0),
            v(0, 1, -1),
        ),
        Plane::Z => (
            v(-1, 0, 0),
            v(-1, -1, 0),
            v(0, -1, 0),
            v(1, -1, 0),
            v(1, 0, 0),
            v(1, 1, 0),
            v(0, 1, 0),
            v(-1, 1, 0),
        ),
    };

    (a + b + c, g + h + a, e + f + g, c + d + e)
}

/// `flip_id = 1` iff `ao1 + ao3 > ao0 + ao2` (spec §4.2 flip rule): picks the
/// diagonal split that follows the lower-AO corners, avoiding an
/// anisotropic shading artifact.
#[inline]
pub fn flip_id(ao: AoCorners) -> bool {
    ao.1 + ao.3 > ao.0 + ao.2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    #[test]
    fn all_void_neighbors_give_full_ao() {
        let world = WorldBlocks::new(WorldConfig::default());
        for plane in [Plane::Y, Plane::X, Plane::Z] {
            let ao = ao_samples(plane, &world, VoxelPos::new(10, 10, 10));
            assert_eq!(ao, (3, 3, 3, 3));
        }
    }

    #[test]
    fn solidifying_a_neighbor_lowers_the_corners_that_reference_it() {
        use crate::world::core::BlockId;

        let mut world = WorldBlocks::new(WorldConfig::default());
        // For plane Y, neighbor `a` is at (x, y, z-1) and contributes to
        // ao0 and ao1 only.
        let face_pos = VoxelPos::new(10, 10, 10);
        let before = ao_samples(Plane::Y, &world, face_pos);
        world.set(VoxelPos::new(10, 10, 9), BlockId(1));
        let after = ao_samples(Plane::Y, &world, face_pos);

        assert_eq!(after.0, before.0 - 1);
        assert_eq!(after.1, before.1 - 1);
        assert_eq!(after.2, before.2);
        assert_eq!(after.3, before.3);
    }

    #[test]
    fn flip_rule_is_a_deterministic_function_of_ao() {
        assert!(!flip_id((3, 3, 3, 3)));
        assert!(flip_id((0, 3, 0, 3)));
        assert!(!flip_id((3, 0, 3, 0)));
        // Same AO tuple always yields the same flip decision.
        assert_eq!(flip_id((1, 2, 0, 2)), flip_id((1, 2, 0, 2)));
    }
}
