//! The only surface the (out-of-scope) GPU renderer touches.
//!
//! Per spec §1/§6, context creation, shader compilation, vertex buffer
//! upload, and draw submission are external collaborators. The core emits a
//! packed `u32` vertex stream (`world::mesh::vertex`) and calls into this
//! trait; it never touches a graphics API directly.

/// Opaque handle to whatever mesh a [`MeshSink`] currently has uploaded for
/// a chunk. The core treats this as an identity only — it never inspects
/// or constructs one itself beyond what `upload_mesh` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Boundary to the renderer. `vertex_stride` is always 4 bytes (one packed
/// `u32` per vertex, per spec §4.2); `bytes` is the packed vertex stream
/// produced by `world::mesh::builder::build_chunk_mesh`, reinterpreted as
/// bytes.
pub trait MeshSink {
    /// Upload `bytes` and replace any prior mesh for `handle`, or allocate
    /// a fresh handle if `handle` is `None`.
    fn upload_mesh(&mut self, handle: Option<MeshHandle>, bytes: &[u8]) -> MeshHandle;

    /// Submit a draw call for `handle` using the given model matrix
    /// (`translate(chunk_coord * CHUNK_SIZE)`, per spec §6).
    fn draw_chunk(&mut self, handle: MeshHandle, model: cgmath::Matrix4<f32>);
}
