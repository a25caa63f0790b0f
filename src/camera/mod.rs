//! Camera basis and frustum culling (spec §4.4/§6). Camera movement, input
//! handling, and view/projection matrix construction are the input/camera
//! controller's concern and explicitly out of scope (spec §1) — this module
//! only carries what the core's frustum test and raycast consume.

mod basis;
mod frustum;

pub use basis::CameraBasis;
pub use frustum::{chunk_sphere_radius, is_on_frustum, FrustumPlanes};
