use crate::frames::motion::{InertialMotion, MotionModel, OriginMotion};

/// The kind of a frame, carrying its motion relative to the parent.
///
/// The two base kinds cover the common cases; anything that rotates or
/// follows an arbitrary trajectory enters through [`FrameKind::Custom`] with
/// a host-supplied [`MotionModel`].
#[derive(Debug)]
pub enum FrameKind {
    /// Tree root. Its parent is itself and its motion is identically zero.
    Origin,

    /// Non-rotating frame translating at constant velocity.
    Inertial(InertialMotion),

    /// Arbitrary time-varying motion (translating and/or rotating).
    Custom(Box<dyn MotionModel>),
}

impl FrameKind {
    /// The motion model driving this kind.
    pub fn motion(&self) -> &dyn MotionModel {
        match self {
            FrameKind::Origin => &OriginMotion,
            FrameKind::Inertial(motion) => motion,
            FrameKind::Custom(motion) => motion.as_ref(),
        }
    }

    /// Kind name as rendered by `"<Kind>(<label>)"`.
    pub fn name(&self) -> &'static str {
        self.motion().kind_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{UnitQuaternion, Vector3};

    #[test]
    fn test_kind_names_match_variants() {
        let inertial = FrameKind::Inertial(InertialMotion::fixed(
            UnitQuaternion::identity(),
            Vector3::zeros(),
        ));

        assert_eq!(FrameKind::Origin.name(), "Origin");
        assert_eq!(inertial.name(), "Inertial");
    }

    #[test]
    fn test_origin_kind_dispatches_to_zero_motion() {
        let kind = FrameKind::Origin;
        assert_eq!(kind.motion().origin_velocity(42.0), Vector3::zeros());
        assert!(kind.motion().is_inertial());
    }
}
