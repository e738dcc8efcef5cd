use crate::frames::FrameId;
use thiserror::Error;

/// Errors surfaced while resolving or transforming across a frame hierarchy.
///
/// Every variant is a data or programming error in the frame graph handed to
/// the call; none is transient and none is retried internally. A failed call
/// never returns a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The two frames descend from different root origins.
    #[error("No common ancestor between frames {from:?} and {to:?}")]
    DisjointHierarchy { from: FrameId, to: FrameId },

    /// A cycle or dangling parent was found while walking ancestors.
    #[error("Malformed hierarchy: ancestor walk from {frame:?} never reaches a root")]
    InvalidHierarchy { frame: FrameId },

    /// The id does not address a frame of this tree.
    #[error("Frame {0:?} is not registered in this tree")]
    UnknownFrame(FrameId),
}
