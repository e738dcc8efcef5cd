use serde::{Deserialize, Serialize};

/// Stable identifier of a frame within a [`FrameTree`](crate::FrameTree).
///
/// Ids are arena indices: they are only meaningful for the tree that issued
/// them. Using an id on a different tree is reported as
/// [`UnknownFrame`](crate::TransformError::UnknownFrame) when the index is
/// out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub(crate) u32);

impl FrameId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }
}
