//! Pluggable terrain generation feeding chunk initialization.

mod terrain;

pub use terrain::{default_height_fn, fill_chunk_blocks, HeightFn};
