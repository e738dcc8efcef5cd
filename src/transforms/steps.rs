use crate::frames::motion::MotionModel;
use crate::transforms::state::{AccelerationState, VelocityState};
use nalgebra::{UnitQuaternion, Vector3};

/// Single-hop transform law folded over a resolved path
///
/// `ascend` re-expresses a value held in a child frame in that child's
/// parent; `descend` is the exact algebraic inverse, re-expressing a
/// parent value in the child. Each order of motion gets its own step
/// type so the walk itself can stay generic.
pub(crate) trait TransformStep {
    /// Quantity carried through the walk
    type Value;

    /// Re-express `value` from the child frame in its parent
    fn ascend(motion: &dyn MotionModel, value: Self::Value, t: f64) -> Self::Value;

    /// Re-express `value` from the parent frame in the child
    fn descend(motion: &dyn MotionModel, value: Self::Value, t: f64) -> Self::Value;
}

/// Rigid placement of a point: rotate into the parent, then offset by
/// the child origin.
pub(crate) struct PositionStep;

impl TransformStep for PositionStep {
    type Value = Vector3<f64>;

    fn ascend(motion: &dyn MotionModel, value: Vector3<f64>, t: f64) -> Vector3<f64> {
        motion.origin_position(t) + motion.orientation(t) * value
    }

    fn descend(motion: &dyn MotionModel, value: Vector3<f64>, t: f64) -> Vector3<f64> {
        motion.orientation(t).inverse() * (value - motion.origin_position(t))
    }
}

/// Velocity through a moving, rotating frame boundary
///
/// On top of the frame's own origin velocity, a point riding a rotating
/// child picks up the sweep `omega x lever`, where the lever arm is the
/// point's offset from the child origin in parent coordinates.
pub(crate) struct VelocityStep;

impl TransformStep for VelocityStep {
    type Value = VelocityState;

    fn ascend(motion: &dyn MotionModel, state: VelocityState, t: f64) -> VelocityState {
        let q = motion.orientation(t);
        let omega = motion.angular_velocity(t);
        let lever = q * state.position;

        VelocityState {
            position: motion.origin_position(t) + lever,
            velocity: motion.origin_velocity(t) + q * state.velocity + omega.cross(&lever),
        }
    }

    fn descend(motion: &dyn MotionModel, state: VelocityState, t: f64) -> VelocityState {
        let q_inv = motion.orientation(t).inverse();
        let omega = motion.angular_velocity(t);
        let lever = state.position - motion.origin_position(t);

        VelocityState {
            position: q_inv * lever,
            velocity: q_inv
                * (state.velocity - motion.origin_velocity(t) - omega.cross(&lever)),
        }
    }
}

/// Full transport of acceleration: Coriolis, centripetal and Euler
/// terms on top of the frame's own origin acceleration.
pub(crate) struct AccelerationStep;

impl TransformStep for AccelerationStep {
    type Value = AccelerationState;

    fn ascend(motion: &dyn MotionModel, state: AccelerationState, t: f64) -> AccelerationState {
        let q = motion.orientation(t);
        let omega = motion.angular_velocity(t);
        let alpha = motion.angular_acceleration(t);
        let lever = q * state.position;
        // Velocity relative to the child frame, in parent coordinates.
        let relative_velocity = q * state.velocity;

        AccelerationState {
            position: motion.origin_position(t) + lever,
            velocity: motion.origin_velocity(t) + relative_velocity + omega.cross(&lever),
            acceleration: motion.origin_acceleration(t)
                + q * state.acceleration
                + 2.0 * omega.cross(&relative_velocity)
                + omega.cross(&omega.cross(&lever))
                + alpha.cross(&lever),
        }
    }

    fn descend(motion: &dyn MotionModel, state: AccelerationState, t: f64) -> AccelerationState {
        let q_inv = motion.orientation(t).inverse();
        let omega = motion.angular_velocity(t);
        let alpha = motion.angular_acceleration(t);
        let lever = state.position - motion.origin_position(t);
        let relative_velocity =
            state.velocity - motion.origin_velocity(t) - omega.cross(&lever);

        AccelerationState {
            position: q_inv * lever,
            velocity: q_inv * relative_velocity,
            acceleration: q_inv
                * (state.acceleration
                    - motion.origin_acceleration(t)
                    - 2.0 * omega.cross(&relative_velocity)
                    - omega.cross(&omega.cross(&lever))
                    - alpha.cross(&lever)),
        }
    }
}

/// Attitude composition across one hop, translation plays no part.
pub(crate) struct OrientationStep;

impl TransformStep for OrientationStep {
    type Value = UnitQuaternion<f64>;

    fn ascend(
        motion: &dyn MotionModel,
        value: UnitQuaternion<f64>,
        t: f64,
    ) -> UnitQuaternion<f64> {
        motion.orientation(t) * value
    }

    fn descend(
        motion: &dyn MotionModel,
        value: UnitQuaternion<f64>,
        t: f64,
    ) -> UnitQuaternion<f64> {
        motion.orientation(t).conjugate() * value
    }
}

/// Pure rotation of a free vector, translation plays no part.
pub(crate) struct DirectionStep;

impl TransformStep for DirectionStep {
    type Value = Vector3<f64>;

    fn ascend(motion: &dyn MotionModel, value: Vector3<f64>, t: f64) -> Vector3<f64> {
        motion.orientation(t) * value
    }

    fn descend(motion: &dyn MotionModel, value: Vector3<f64>, t: f64) -> Vector3<f64> {
        motion.orientation(t).inverse() * value
    }
}
