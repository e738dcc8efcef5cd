use crate::error::TransformError;
use crate::frames::id::FrameId;
use crate::frames::tree::FrameTree;
use tracing::trace;

/// A resolved route between two frames of one hierarchy.
///
/// `ascent` lists the frames whose hop converts local coordinates into their
/// parent's, starting at the source frame and ending just below the common
/// ancestor. `descent` lists the frames whose hop converts parent
/// coordinates into their own, ordered parent-to-child so the walk ends at
/// the destination frame. Either list is empty when the corresponding side
/// of the route is trivial; both are empty when source and destination are
/// the same frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransformPath {
    pub(crate) common: FrameId,
    pub(crate) ascent: Vec<FrameId>,
    pub(crate) descent: Vec<FrameId>,
}

impl FrameTree {
    /// Ancestor chain of `frame`: `[frame, parent, grandparent, …, root]`.
    ///
    /// The walk follows parent indices until it hits a self-referencing root.
    /// Back-references alone cannot prove the graph acyclic, so the walk is
    /// bounded by the arena size: a chain that visits more frames than exist
    /// must repeat one, and fails fast with
    /// [`TransformError::InvalidHierarchy`]. A dangling parent index fails
    /// the same way.
    pub fn ancestors(&self, frame: FrameId) -> Result<Vec<FrameId>, TransformError> {
        let mut node = self.node(frame)?;
        let mut chain = Vec::new();
        let mut current = frame;

        loop {
            chain.push(current);
            if node.parent == current {
                return Ok(chain);
            }
            if chain.len() >= self.len() {
                return Err(TransformError::InvalidHierarchy { frame });
            }

            current = node.parent;
            node = self
                .nodes
                .get(current.index())
                .ok_or(TransformError::InvalidHierarchy { frame })?;
        }
    }

    /// Resolve the transform route from `from` to `to`.
    ///
    /// Both ancestor chains are ordered nearest-first, and chains of a tree
    /// are strictly ordered subsequences converging on a single root, so the
    /// first entry of the `from` chain that appears anywhere in the `to`
    /// chain is the unique nearest common ancestor. Frames under different
    /// roots share no entry and fail with
    /// [`TransformError::DisjointHierarchy`].
    pub(crate) fn resolve(
        &self,
        from: FrameId,
        to: FrameId,
    ) -> Result<TransformPath, TransformError> {
        let from_chain = self.ancestors(from)?;
        let to_chain = self.ancestors(to)?;

        let common = from_chain
            .iter()
            .copied()
            .find(|id| to_chain.contains(id))
            .ok_or(TransformError::DisjointHierarchy { from, to })?;

        let ascent: Vec<FrameId> = from_chain
            .iter()
            .copied()
            .take_while(|&id| id != common)
            .collect();

        let mut descent: Vec<FrameId> = to_chain
            .iter()
            .copied()
            .take_while(|&id| id != common)
            .collect();
        descent.reverse();

        trace!(
            "Resolved {:?} -> {:?}: common {:?}, {} up, {} down",
            from,
            to,
            common,
            ascent.len(),
            descent.len()
        );

        Ok(TransformPath {
            common,
            ascent,
            descent,
        })
    }
}
