//! Kinetree: kinematic transforms over a hierarchy of moving frames
//!
//! Frames register in a [`FrameTree`] with a parent and a motion model, and
//! positions, velocities, accelerations, orientations and directions move
//! between any two frames of the hierarchy through the transform traits,
//! with the rotational transport terms picked up along the way.

pub mod error;
pub mod frames;
pub mod transforms;

pub use error::TransformError;
pub use frames::{
    FrameDisplay, FrameId, FrameKind, FrameTree, InertialMotion, MotionModel, OriginMotion,
};
pub use transforms::{
    AccelerationState, AccelerationTransform, DirectionTransform, FrameTransforms,
    OrientationTransform, PositionTransform, VelocityState, VelocityTransform,
};
