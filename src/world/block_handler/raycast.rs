//! Amanatides–Woo voxel-stepping raycast (spec §4.3), transcribed from
//! `original_source/.../block_handler.py::raycast` — including its X-before-Z,
//! then Y-before-Z tie-break, which is observable because it chooses which
//! axis the hit normal comes from.

use cgmath::{Point3, Vector3};

use crate::world::core::{RaycastHit, VoxelPos};
use crate::world::storage::{local_index, WorldBlocks};

/// Cap applied to `1/direction`, matching the original's `10_000_000.0`
/// guard against dividing by a near-zero direction component.
const DELTA_CAP: f32 = 1e7;

#[inline]
fn glsl_fract(x: f32) -> f32 {
    x - x.floor()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

struct AxisState {
    step: i32,
    delta: f32,
    max: f32,
}

fn init_axis(origin: f32, end_minus_origin: f32) -> AxisState {
    let step = if end_minus_origin > 0.0 {
        1
    } else if end_minus_origin < 0.0 {
        -1
    } else {
        0
    };
    let delta = if step != 0 {
        (step as f32 / end_minus_origin).min(DELTA_CAP)
    } else {
        DELTA_CAP
    };
    let max = if step > 0 {
        delta * (1.0 - glsl_fract(origin))
    } else {
        delta * glsl_fract(origin)
    };
    AxisState { step, delta, max }
}

/// Step from `eye` along `forward` for up to `max_distance` voxel units and
/// return the first solid voxel hit, or `None` on a miss (spec §4.3).
/// `forward` need not be pre-normalized to unit length by the caller — only
/// its direction matters, since `max_distance` sets the cutoff independently.
pub fn raycast(world: &WorldBlocks, eye: Point3<f32>, forward: Vector3<f32>, max_distance: f32) -> Option<RaycastHit> {
    let end = eye + forward * max_distance;

    let mut x = init_axis(eye.x, end.x - eye.x);
    let mut y = init_axis(eye.y, end.y - eye.y);
    let mut z = init_axis(eye.z, end.z - eye.z);

    let mut current = VoxelPos::new(eye.x.floor() as i32, eye.y.floor() as i32, eye.z.floor() as i32);
    // `None` mirrors the original's `step_direction = -1` sentinel: a hit in
    // the starting voxel, before any step, falls through to the Z branch.
    let mut last_step: Option<Axis> = None;

    loop {
        if x.max > 1.0 && y.max > 1.0 && z.max > 1.0 {
            return None;
        }

        let block_id = world.get(current);
        if block_id.is_solid() {
            let chunk = current.to_chunk_pos();
            let local = current.to_local();
            let mut normal = Vector3::new(0, 0, 0);
            match last_step {
                Some(Axis::X) => normal.x = -x.step,
                Some(Axis::Y) => normal.y = -y.step,
                _ => normal.z = -z.step,
            }
            return Some(RaycastHit {
                block_id,
                block_index: local_index(local.0, local.1, local.2),
                block_local_position: local,
                block_world_position: current,
                block_normal: normal,
                chunk,
            });
        }

        if x.max < y.max {
            if x.max < z.max {
                current.x += x.step;
                x.max += x.delta;
                last_step = Some(Axis::X);
            } else {
                current.z += z.step;
                z.max += z.delta;
                last_step = Some(Axis::Z);
            }
        } else if y.max < z.max {
            current.y += y.step;
            y.max += y.delta;
            last_step = Some(Axis::Y);
        } else {
            current.z += z.step;
            z.max += z.delta;
            last_step = Some(Axis::Z);
        }
    }
}
