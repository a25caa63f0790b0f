//! Ray and block-face types shared by the raycast and the mesh builder's
//! face ids.

use cgmath::{InnerSpace, Point3, Vector3};

use super::block::BlockId;
use super::position::{ChunkPos, VoxelPos};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// The six faces of a voxel, numbered per the packed-vertex `face_id` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFace {
    Top = 0,
    Bottom = 1,
    Right = 2,
    Left = 3,
    Back = 4,
    Front = 5,
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Right,
        BlockFace::Left,
        BlockFace::Back,
        BlockFace::Front,
    ];

    pub const fn normal(self) -> Vector3<i32> {
        match self {
            BlockFace::Top => Vector3::new(0, 1, 0),
            BlockFace::Bottom => Vector3::new(0, -1, 0),
            BlockFace::Right => Vector3::new(1, 0, 0),
            BlockFace::Left => Vector3::new(-1, 0, 0),
            BlockFace::Back => Vector3::new(0, 0, -1),
            BlockFace::Front => Vector3::new(0, 0, 1),
        }
    }

    pub const fn face_id(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    pub block_id: BlockId,
    pub block_index: usize,
    pub block_local_position: (u32, u32, u32),
    pub block_world_position: VoxelPos,
    pub block_normal: Vector3<i32>,
    pub chunk: ChunkPos,
}
