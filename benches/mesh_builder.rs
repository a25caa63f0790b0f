//! Benchmarks for the chunk mesh builder's inner loop (spec §4.2:
//! "~5-10M void tests per chunk at CHUNK_SIZE=48").

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use voxelcore::{build_chunk_mesh, fill_chunk_blocks, BlockId, ChunkPos, WorldBlocks, WorldConfig};

fn single_chunk_world() -> WorldConfig {
    WorldConfig {
        world_width: 1,
        world_height: 1,
        world_depth: 1,
        ..WorldConfig::default()
    }
}

fn terrain_chunk() -> WorldBlocks {
    let mut world = WorldBlocks::new(single_chunk_world());
    let rolling_hills = |wx: i32, wz: i32| 24 + ((wx + wz) % 8);
    let blocks = world.chunk_slice_mut(0);
    fill_chunk_blocks(blocks, ChunkPos::new(0, 0, 0).translation(), &rolling_hills);
    world
}

fn fully_solid_chunk() -> WorldBlocks {
    let mut world = WorldBlocks::new(single_chunk_world());
    for block in world.chunk_slice_mut(0) {
        *block = BlockId(1);
    }
    world
}

fn empty_chunk() -> WorldBlocks {
    WorldBlocks::new(single_chunk_world())
}

fn bench_build_chunk_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chunk_mesh");

    let terrain = terrain_chunk();
    group.bench_function("rolling_terrain", |b| {
        b.iter(|| {
            black_box(build_chunk_mesh(terrain.chunk_slice(0), ChunkPos::new(0, 0, 0), &terrain))
        });
    });

    let solid = fully_solid_chunk();
    group.bench_function("fully_solid_isolated", |b| {
        b.iter(|| black_box(build_chunk_mesh(solid.chunk_slice(0), ChunkPos::new(0, 0, 0), &solid)));
    });

    let empty = empty_chunk();
    group.bench_function("empty", |b| {
        b.iter(|| black_box(build_chunk_mesh(empty.chunk_slice(0), ChunkPos::new(0, 0, 0), &empty)));
    });

    group.finish();
}

criterion_group!(benches, bench_build_chunk_mesh);
criterion_main!(benches);
