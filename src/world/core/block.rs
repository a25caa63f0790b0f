//! Block identifier — pure data, no methods beyond simple predicates.

use std::fmt;

/// Opaque voxel identifier. `0` means empty (void); any non-zero value is
/// solid. The core only ever tests "is this zero", never the specific id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BlockId(pub u8);

unsafe impl bytemuck::Pod for BlockId {}
unsafe impl bytemuck::Zeroable for BlockId {}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    #[inline]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn is_void(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_void() {
            write!(f, "Air")
        } else {
            write!(f, "Block({})", self.0)
        }
    }
}
