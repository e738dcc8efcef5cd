use crate::error::TransformError;
use crate::frames::id::FrameId;
use crate::transforms::state::{AccelerationState, VelocityState};
use nalgebra::{UnitQuaternion, Vector3};

// Trait for converting positions between frames of one hierarchy
pub trait PositionTransform {
    /// Transform a position from one frame to another at time `t`
    fn transform_position(
        &self,
        position: &Vector3<f64>,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<Vector3<f64>, TransformError>;
}

/// Trait for converting point velocities between frames
pub trait VelocityTransform {
    /// Transform a position and velocity pair from one frame to another
    /// at time `t`
    fn transform_velocity(
        &self,
        state: &VelocityState,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<VelocityState, TransformError>;
}

/// Trait for converting point accelerations between frames
pub trait AccelerationTransform {
    /// Transform a full second-order state from one frame to another at
    /// time `t`
    fn transform_acceleration(
        &self,
        state: &AccelerationState,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<AccelerationState, TransformError>;
}

/// Trait for converting attitude quaternions between frames
pub trait OrientationTransform {
    /// Transform an attitude quaternion from one frame to another at
    /// time `t`
    fn transform_orientation(
        &self,
        orientation: &UnitQuaternion<f64>,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<UnitQuaternion<f64>, TransformError>;
}

/// Trait for rotating free direction vectors between frames
pub trait DirectionTransform {
    /// Rotate a direction from one frame to another at time `t`,
    /// ignoring every translation along the way
    fn transform_direction(
        &self,
        direction: &Vector3<f64>,
        from: FrameId,
        to: FrameId,
        t: f64,
    ) -> Result<Vector3<f64>, TransformError>;
}

/// Bundle of transform traits implemented by the frame tree
pub trait FrameTransforms:
    PositionTransform
    + VelocityTransform
    + AccelerationTransform
    + OrientationTransform
    + DirectionTransform
{
}
