use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Motion of a frame relative to its parent, as pure functions of time.
///
/// Every accessor is evaluated against a time `t` in seconds (any consistent
/// epoch) and returns quantities expressed in the *parent* frame's
/// coordinates. `orientation` rotates a vector from this frame's coordinates
/// into the parent's. `angular_velocity` and `angular_acceleration` are also
/// parent-coordinate vectors, not body-frame ones; the transport equations in
/// [`transforms`](crate::transforms) rely on that convention, and swapping it
/// inverts the sign of every Coriolis, centripetal, and Euler term.
///
/// Only `orientation` and `angular_velocity` are required; the origin
/// accessors and `angular_acceleration` default to zero motion, so a frame
/// spinning about a fixed parent point supplies just those two.
///
/// Implementations must be pure: the same `t` always yields the same values.
pub trait MotionModel: fmt::Debug + Send + Sync {
    /// Kind name used when rendering the frame as `"<Kind>(<label>)"`.
    fn kind_name(&self) -> &'static str {
        "Custom"
    }

    /// Whether this kind alone is inertial (non-rotating, non-accelerating).
    ///
    /// A frame is only *fully* inertial when every ancestor is inertial too;
    /// see [`FrameTree::is_inertial`](crate::FrameTree::is_inertial).
    fn is_inertial(&self) -> bool {
        false
    }

    /// Position of this frame's origin in the parent frame [m].
    fn origin_position(&self, _t: f64) -> Vector3<f64> {
        Vector3::zeros()
    }

    /// Velocity of this frame's origin in the parent frame [m/s].
    fn origin_velocity(&self, _t: f64) -> Vector3<f64> {
        Vector3::zeros()
    }

    /// Acceleration of this frame's origin in the parent frame [m/s²].
    fn origin_acceleration(&self, _t: f64) -> Vector3<f64> {
        Vector3::zeros()
    }

    /// Rotation from this frame's coordinates to the parent's.
    fn orientation(&self, t: f64) -> UnitQuaternion<f64>;

    /// Angular velocity of this frame, in parent coordinates [rad/s].
    fn angular_velocity(&self, t: f64) -> Vector3<f64>;

    /// Angular acceleration of this frame, in parent coordinates [rad/s²].
    fn angular_acceleration(&self, _t: f64) -> Vector3<f64> {
        Vector3::zeros()
    }
}

/// Motion of a root frame: a fixed point with zero kinematics.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginMotion;

impl MotionModel for OriginMotion {
    fn kind_name(&self) -> &'static str {
        "Origin"
    }

    fn is_inertial(&self) -> bool {
        true
    }

    fn orientation(&self, _t: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::identity()
    }

    fn angular_velocity(&self, _t: f64) -> Vector3<f64> {
        Vector3::zeros()
    }
}

/// Motion of a non-rotating frame translating at constant velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertialMotion {
    /// Constant rotation from this frame to the parent frame
    pub orientation: UnitQuaternion<f64>,

    /// Origin position in the parent frame at t = 0 [m]
    pub position: Vector3<f64>,

    /// Constant origin velocity in the parent frame [m/s]
    pub velocity: Vector3<f64>,
}

impl InertialMotion {
    pub fn new(
        orientation: UnitQuaternion<f64>,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
    ) -> Self {
        Self {
            orientation,
            position,
            velocity,
        }
    }

    /// A frame at rest at a fixed offset from its parent.
    pub fn fixed(orientation: UnitQuaternion<f64>, position: Vector3<f64>) -> Self {
        Self::new(orientation, position, Vector3::zeros())
    }
}

impl MotionModel for InertialMotion {
    fn kind_name(&self) -> &'static str {
        "Inertial"
    }

    fn is_inertial(&self) -> bool {
        true
    }

    fn origin_position(&self, t: f64) -> Vector3<f64> {
        self.position + self.velocity * t
    }

    fn origin_velocity(&self, _t: f64) -> Vector3<f64> {
        self.velocity
    }

    fn orientation(&self, _t: f64) -> UnitQuaternion<f64> {
        self.orientation
    }

    fn angular_velocity(&self, _t: f64) -> Vector3<f64> {
        Vector3::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_motion_is_all_zeros() {
        let motion = OriginMotion;

        for t in [-10.0, 0.0, 3.5, 1e6] {
            assert_eq!(motion.origin_position(t), Vector3::zeros());
            assert_eq!(motion.origin_velocity(t), Vector3::zeros());
            assert_eq!(motion.origin_acceleration(t), Vector3::zeros());
            assert_eq!(motion.orientation(t), UnitQuaternion::identity());
            assert_eq!(motion.angular_velocity(t), Vector3::zeros());
            assert_eq!(motion.angular_acceleration(t), Vector3::zeros());
        }
        assert!(motion.is_inertial());
    }

    #[test]
    fn test_inertial_motion_is_rectilinear() {
        let motion = InertialMotion::new(
            UnitQuaternion::identity(),
            Vector3::new(100.0, -50.0, 2.0),
            Vector3::new(3.0, 4.0, 0.0),
        );

        // r(t) = r0 + v*t, exactly
        for t in [0.0, 1.0, 12.5, -7.0] {
            let expected = Vector3::new(100.0, -50.0, 2.0) + Vector3::new(3.0, 4.0, 0.0) * t;
            assert_eq!(motion.origin_position(t), expected);
            assert_eq!(motion.origin_velocity(t), Vector3::new(3.0, 4.0, 0.0));
        }

        // No rotation or acceleration at any time
        assert_eq!(motion.origin_acceleration(55.0), Vector3::zeros());
        assert_eq!(motion.angular_velocity(55.0), Vector3::zeros());
        assert_eq!(motion.angular_acceleration(55.0), Vector3::zeros());
        assert!(motion.is_inertial());
    }

    #[test]
    fn test_fixed_motion_never_moves() {
        let attitude = UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3);
        let motion = InertialMotion::fixed(attitude, Vector3::new(1.0, 2.0, 3.0));

        assert_eq!(motion.origin_position(0.0), motion.origin_position(1e4));
        assert_eq!(motion.origin_velocity(12.0), Vector3::zeros());
        assert_eq!(motion.orientation(9.0), attitude);
    }

    #[test]
    fn test_rotation_only_models_default_to_zero_translation() {
        // Supplying just the two required accessors must yield a complete
        // model whose remaining motion is zero.
        #[derive(Debug)]
        struct Turntable;

        impl MotionModel for Turntable {
            fn orientation(&self, t: f64) -> UnitQuaternion<f64> {
                UnitQuaternion::from_axis_angle(&Vector3::z_axis(), t)
            }

            fn angular_velocity(&self, _t: f64) -> Vector3<f64> {
                Vector3::new(0.0, 0.0, 1.0)
            }
        }

        let motion = Turntable;
        for t in [0.0, 2.5, -4.0] {
            assert_eq!(motion.origin_position(t), Vector3::zeros());
            assert_eq!(motion.origin_velocity(t), Vector3::zeros());
            assert_eq!(motion.origin_acceleration(t), Vector3::zeros());
            assert_eq!(motion.angular_acceleration(t), Vector3::zeros());
        }
        assert_eq!(motion.kind_name(), "Custom");
        assert!(!motion.is_inertial());
    }
}
