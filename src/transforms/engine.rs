use crate::error::TransformError;
use crate::frames::id::FrameId;
use crate::frames::tree::FrameTree;
use crate::transforms::state::{AccelerationState, VelocityState};
use crate::transforms::steps::{
    AccelerationStep, DirectionStep, OrientationStep, PositionStep, TransformStep, VelocityStep,
};
use crate::transforms::traits::{
    AccelerationTransform, DirectionTransform, FrameTransforms, OrientationTransform,
    PositionTransform, VelocityTransform,
};
use nalgebra::{UnitQuaternion, Vector3};
use tracing::trace;

impl FrameTree {
    /// Fold one step law over the path between two frames, ascending to
    /// the common ancestor and descending to the target.
    fn walk<S: TransformStep>(
        &self,
        mut value: S::Value,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<S::Value, TransformError> {
        let path = self.resolve(from, to)?;
        trace!(
            "Walking {} -> {} via {}: {} up, {} down",
            self.display(from),
            self.display(to),
            self.display(path.common),
            path.ascent.len(),
            path.descent.len()
        );

        for &hop in &path.ascent {
            value = S::ascend(self.motion(hop), value, t);
        }
        for &hop in &path.descent {
            value = S::descend(self.motion(hop), value, t);
        }

        Ok(value)
    }
}

impl PositionTransform for FrameTree {
    fn transform_position(
        &self,
        position: &Vector3<f64>,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<Vector3<f64>, TransformError> {
        self.walk::<PositionStep>(*position, from, to, t)
    }
}

impl VelocityTransform for FrameTree {
    fn transform_velocity(
        &self,
        state: &VelocityState,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<VelocityState, TransformError> {
        self.walk::<VelocityStep>(*state, from, to, t)
    }
}

impl AccelerationTransform for FrameTree {
    fn transform_acceleration(
        &self,
        state: &AccelerationState,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<AccelerationState, TransformError> {
        self.walk::<AccelerationStep>(*state, from, to, t)
    }
}

impl OrientationTransform for FrameTree {
    fn transform_orientation(
        &self,
        orientation: &UnitQuaternion<f64>,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<UnitQuaternion<f64>, TransformError> {
        self.walk::<OrientationStep>(*orientation, from, to, t)
    }
}

impl DirectionTransform for FrameTree {
    fn transform_direction(
        &self,
        direction: &Vector3<f64>,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<Vector3<f64>, TransformError> {
        self.walk::<DirectionStep>(*direction, from, to, t)
    }
}

impl FrameTransforms for FrameTree {}
