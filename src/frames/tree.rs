use crate::error::TransformError;
use crate::frames::display::default_label;
use crate::frames::id::FrameId;
use crate::frames::kind::FrameKind;
use crate::frames::motion::{InertialMotion, MotionModel};
use nalgebra::{UnitQuaternion, Vector3};
use tracing::debug;

/// One record of the frame arena.
#[derive(Debug)]
pub(crate) struct FrameNode {
    /// Display label, not required to be unique
    pub(crate) label: String,

    /// Parent frame; equal to the node's own id for a root
    pub(crate) parent: FrameId,

    /// Motion of this frame relative to the parent
    pub(crate) kind: FrameKind,
}

/// An append-only arena of immutable coordinate frames.
///
/// Frames are addressed by [`FrameId`] and store their parent as an index
/// back-reference, so a frame never owns its parent and the arena outlives
/// every id it issued. Roots reference themselves, terminating ancestor
/// walks. A single tree may hold several independent roots; transforms
/// between frames of different roots fail with
/// [`TransformError::DisjointHierarchy`].
///
/// Nothing mutates after a frame is registered, so any number of transforms
/// may be evaluated concurrently over `&FrameTree` without synchronization.
#[derive(Debug, Default)]
pub struct FrameTree {
    pub(crate) nodes: Vec<FrameNode>,
}

impl FrameTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Register a root frame with zero kinematics.
    ///
    /// The root is its own parent, so `parent(root) == root` and
    /// `ancestors(root) == [root]`.
    pub fn add_origin(&mut self, label: impl Into<String>) -> FrameId {
        let id = FrameId::new(self.nodes.len() as u32);
        self.nodes.push(FrameNode {
            label: label.into(),
            parent: id,
            kind: FrameKind::Origin,
        });

        debug!("Registered {} as {:?}", self.display(id), id);
        id
    }

    /// Register a non-rotating frame translating at constant velocity under
    /// `parent`.
    ///
    /// # Arguments
    /// - `label`: display label; a deterministic digest label is synthesized
    ///   when `None`.
    /// - `orientation`: constant rotation from the new frame to `parent`.
    /// - `position`: origin position in `parent` at t = 0 [m].
    /// - `velocity`: constant origin velocity in `parent` [m/s].
    pub fn add_inertial(
        &mut self,
        label: Option<&str>,
        parent: FrameId,
        orientation: UnitQuaternion<f64>,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
    ) -> Result<FrameId, TransformError> {
        let motion = InertialMotion::new(orientation, position, velocity);
        let params = [
            orientation.w,
            orientation.i,
            orientation.j,
            orientation.k,
            position.x,
            position.y,
            position.z,
            velocity.x,
            velocity.y,
            velocity.z,
        ];
        self.add_node(label, parent, FrameKind::Inertial(motion), &params)
    }

    /// Register a frame with host-supplied time-varying motion under
    /// `parent`.
    ///
    /// This is the extension point for rotating and accelerating frames; the
    /// transform engine only ever sees the [`MotionModel`] accessors.
    pub fn add_custom(
        &mut self,
        label: Option<&str>,
        parent: FrameId,
        motion: impl MotionModel + 'static,
    ) -> Result<FrameId, TransformError> {
        self.add_node(label, parent, FrameKind::Custom(Box::new(motion)), &[])
    }

    fn add_node(
        &mut self,
        label: Option<&str>,
        parent: FrameId,
        kind: FrameKind,
        digest_params: &[f64],
    ) -> Result<FrameId, TransformError> {
        // Children may only be wired onto frames that already exist, which
        // keeps parent indices strictly below their children and the graph
        // acyclic by construction.
        self.node(parent)?;

        let index = self.nodes.len();
        let label = match label {
            Some(label) => label.to_string(),
            None => default_label(kind.name(), parent, index, digest_params),
        };

        let id = FrameId::new(index as u32);
        self.nodes.push(FrameNode {
            label,
            parent,
            kind,
        });

        debug!(
            "Registered {} as {:?} under {:?}",
            self.display(id),
            id,
            parent
        );
        Ok(id)
    }

    /// The stored parent of `frame`, or `frame` itself for a root.
    pub fn parent(&self, frame: FrameId) -> Result<FrameId, TransformError> {
        Ok(self.node(frame)?.parent)
    }

    /// Display label of `frame`.
    pub fn label(&self, frame: FrameId) -> Result<&str, TransformError> {
        Ok(self.node(frame)?.label.as_str())
    }

    /// Whether `frame` is fully inertial: its own kind is inertial and so is
    /// every ancestor up to the root. Ascent through any rotating or
    /// accelerating ancestor breaks the property.
    pub fn is_inertial(&self, frame: FrameId) -> Result<bool, TransformError> {
        let chain = self.ancestors(frame)?;
        Ok(chain
            .iter()
            .all(|id| self.nodes[id.index()].kind.motion().is_inertial()))
    }

    /// Number of registered frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over all registered frame ids, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = FrameId> + '_ {
        (0..self.nodes.len() as u32).map(FrameId::new)
    }

    pub(crate) fn node(&self, frame: FrameId) -> Result<&FrameNode, TransformError> {
        self.nodes
            .get(frame.index())
            .ok_or(TransformError::UnknownFrame(frame))
    }

    /// Motion model of a frame already validated by path resolution.
    pub(crate) fn motion(&self, frame: FrameId) -> &dyn MotionModel {
        self.nodes[frame.index()].kind.motion()
    }
}
