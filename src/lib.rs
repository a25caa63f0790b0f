//! A chunked voxel world core: flat cross-chunk block storage, a
//! greedy-per-face chunk mesh builder with ambient occlusion, and a voxel
//! raycast/edit pipeline.
//!
//! GPU surface, windowing, input, and asset loading are explicit
//! non-goals — this crate emits a packed `u32` vertex stream
//! ([`render_interface::MeshSink`]) and consumes a ray plus a camera basis
//! ([`camera::CameraBasis`]); everything else is the host application's.

pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod render_interface;
pub mod world;

pub use camera::{chunk_sphere_radius, is_on_frustum, CameraBasis, FrustumPlanes};
pub use config::WorldConfig;
pub use constants::{CHUNK_AREA, CHUNK_SIZE, CHUNK_VOLUME, MAX_RAY_DISTANCE, WORLD_AREA, WORLD_VOLUME};
pub use error::{VoxelError, VoxelResult};
pub use render_interface::{MeshHandle, MeshSink};
pub use world::{
    build_all_meshes, build_chunk_mesh, fill_chunk_blocks, generate_world, rebuild_chunk, upload_all_meshes,
    BlockHandlerData, BlockId, ChunkData, ChunkPos, InteractionMode, RaycastHit, VoxelPos, WorldBlocks,
};
