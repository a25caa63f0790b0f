//! Frustum culling (spec §4.4), transcribed from
//! `original_source/.../frustum/frustum.py`: three short-circuited plane
//! tests against a chunk's bounding sphere.

use cgmath::InnerSpace;

use crate::config::WorldConfig;
use crate::constants::CHUNK_SIZE;

use super::basis::CameraBasis;

/// Precomputed per-axis factors, built once from `WorldConfig`'s FOV/aspect
/// (spec §4.4); `factor_* = 1 / cos(half_fov)`, `tan_* = tan(half_fov)`.
#[derive(Debug, Clone, Copy)]
pub struct FrustumPlanes {
    pub near: f32,
    pub far: f32,
    pub factor_x: f32,
    pub tan_x: f32,
    pub factor_y: f32,
    pub tan_y: f32,
}

impl FrustumPlanes {
    /// `H_FOV = 2*atan(tan(V_FOV/2) * aspect_ratio)`, matching the original's
    /// derivation from a single vertical FOV plus aspect ratio.
    pub fn from_config(config: &WorldConfig) -> Self {
        let v_fov = config.fov_deg.to_radians();
        let half_y = v_fov / 2.0;
        let half_x = (half_y.tan() * config.aspect_ratio).atan();

        Self {
            near: config.near,
            far: config.far,
            factor_x: 1.0 / half_x.cos(),
            tan_x: half_x.tan(),
            factor_y: 1.0 / half_y.cos(),
            tan_y: half_y.tan(),
        }
    }
}

/// Bounding-sphere radius shared by every chunk: `(CHUNK_SIZE/2) * sqrt(3)`.
pub fn chunk_sphere_radius() -> f32 {
    (CHUNK_SIZE as f32 / 2.0) * 3.0_f32.sqrt()
}

/// `true` iff the chunk centered at `center` is inside the frustum described
/// by `basis`/`planes` (spec §4.4). Tests are short-circuited in the order
/// the spec lists: near/far, then left/right, then top/bottom.
pub fn is_on_frustum(center: cgmath::Point3<f32>, basis: &CameraBasis, planes: &FrustumPlanes, radius: f32) -> bool {
    let sphere_vector = center - basis.position;

    let sz = sphere_vector.dot(basis.forward);
    if !(planes.near - radius < sz && sz < planes.far + radius) {
        return false;
    }

    let sx = sphere_vector.dot(basis.right);
    let x_distance = planes.factor_x * radius + sz * planes.tan_x;
    if !(-x_distance <= sx && sx <= x_distance) {
        return false;
    }

    let sy = sphere_vector.dot(basis.up);
    let y_distance = planes.factor_y * radius + sz * planes.tan_y;
    if !(-y_distance <= sy && sy <= y_distance) {
        return false;
    }

    true
}
