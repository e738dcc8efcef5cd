mod ancestry;
pub mod display;
pub mod id;
pub mod kind;
pub mod motion;
pub mod tree;

pub use display::FrameDisplay;
pub use id::FrameId;
pub use kind::FrameKind;
pub use motion::{InertialMotion, MotionModel, OriginMotion};
pub use tree::FrameTree;
