//! Terrain generation — pure function `(wx, wz) -> column_height` feeding
//! chunk initialization (spec §4.1).
//!
//! The height rule is injected as a plain `Fn(f64, f64) -> i32` rather than
//! a trait object: nothing in the engine needs dynamic dispatch over it
//! (only tests substitute an alternate height field), so a function value
//! is the simpler DOP-style fit (see DESIGN.md's Open Question resolution).
//! `Sync` is required because `world::generate_world` calls this per-chunk
//! from multiple `rayon` worker threads (spec §5).

use noise::{NoiseFn, Simplex};

use crate::constants::CHUNK_SIZE;
use crate::world::core::BlockId;

/// A column-height rule: world X/Z in, voxel height out.
pub type HeightFn<'a> = dyn Fn(i32, i32) -> i32 + Sync + 'a;

/// The default terrain rule (spec §4.1): `floor(simplex2D(wx*0.01, wz*0.01) * 32 + 32)`.
pub fn default_height_fn(seed: u32) -> impl Fn(i32, i32) -> i32 + Sync {
    let noise = Simplex::new(seed);
    move |wx: i32, wz: i32| -> i32 {
        let sample = noise.get([wx as f64 * 0.01, wz as f64 * 0.01]);
        (sample * 32.0 + 32.0).floor() as i32
    }
}

/// Fill one chunk's block slice from a height function.
///
/// For each column `(wx, wz)` in the chunk, every local `y` with
/// `wy < column_height` becomes solid with id `wy + 2` (monotonic with
/// altitude — the only thing the rest of the core requires is "non-zero is
/// solid", per spec §3).
pub fn fill_chunk_blocks(blocks: &mut [BlockId], chunk_translation: cgmath::Vector3<f32>, height_fn: &HeightFn<'_>) {
    debug_assert_eq!(blocks.len(), crate::constants::CHUNK_VOLUME as usize);
    let base_x = chunk_translation.x as i32;
    let base_y = chunk_translation.y as i32;
    let base_z = chunk_translation.z as i32;

    for lx in 0..CHUNK_SIZE {
        for lz in 0..CHUNK_SIZE {
            let wx = base_x + lx as i32;
            let wz = base_z + lz as i32;
            let column_height = height_fn(wx, wz);

            for ly in 0..CHUNK_SIZE {
                let wy = base_y + ly as i32;
                let index = crate::world::storage::local_index(lx, ly, lz);
                blocks[index] = if wy < column_height {
                    BlockId((wy + 2).clamp(1, u8::MAX as i32) as u8)
                } else {
                    BlockId::AIR
                };
            }
        }
    }
}
