use crate::frames::id::FrameId;
use crate::frames::tree::FrameTree;
use std::fmt;

/// Lazy `"<Kind>(<label>)"` renderer for a frame, produced by
/// [`FrameTree::display`].
pub struct FrameDisplay<'a> {
    tree: &'a FrameTree,
    frame: FrameId,
}

impl fmt::Display for FrameDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree.node(self.frame) {
            Ok(node) => write!(f, "{}({})", node.kind.name(), node.label),
            Err(_) => write!(f, "Unknown({:?})", self.frame),
        }
    }
}

impl FrameTree {
    /// Render `frame` as `"<Kind>(<label>)"`, e.g. `Inertial(barge)`.
    pub fn display(&self, frame: FrameId) -> FrameDisplay<'_> {
        FrameDisplay { tree: self, frame }
    }
}

/// Synthesize a label from a digest of the frame's construction parameters.
///
/// The digest covers the kind name, the parent id, the node's position in
/// the arena, and the bit patterns of any numeric parameters, so rebuilding
/// the same hierarchy yields the same labels run after run. Nothing relies
/// on these being unique; they only keep log and display output readable.
pub(crate) fn default_label(
    kind: &str,
    parent: FrameId,
    index: usize,
    params: &[f64],
) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(kind.as_bytes());
    hasher.update(&parent.0.to_le_bytes());
    hasher.update(&(index as u64).to_le_bytes());
    for param in params {
        hasher.update(&param.to_bits().to_le_bytes());
    }

    let digest = hasher.finalize();
    format!("{}-{}", kind.to_lowercase(), &digest.to_hex()[..8])
}
