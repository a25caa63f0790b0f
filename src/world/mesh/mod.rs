//! The chunk mesh builder: face culling, ambient occlusion, quad-flip
//! selection, and the packed vertex format they all emit into (spec §4.2).

mod ao;
mod builder;
mod vertex;

pub use ao::{ao_samples, flip_id, AoCorners, Plane};
pub use builder::build_chunk_mesh;
pub use vertex::{pack_vertex, unpack_vertex, VertexFields};
