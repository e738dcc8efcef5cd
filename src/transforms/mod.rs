mod engine;
mod steps;

pub mod state;
pub mod traits;

pub use state::{AccelerationState, VelocityState};
pub use traits::{
    AccelerationTransform, DirectionTransform, FrameTransforms, OrientationTransform,
    PositionTransform, VelocityTransform,
};
