//! Camera basis — pure data, no methods. The core only ever needs a
//! position and an orthonormal basis to cull chunks and cast rays; camera
//! movement, yaw/pitch integration, and view/projection matrices belong to
//! the (out-of-scope) input/camera controller (spec §1).

use cgmath::{Point3, Vector3};

/// The position and orthonormal basis the frustum tester and raycast both
/// consume (spec §4.3/§4.4/§6).
#[derive(Debug, Clone, Copy)]
pub struct CameraBasis {
    pub position: Point3<f32>,
    pub forward: Vector3<f32>,
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
}
