use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Position and velocity of a point, expressed in a single frame
///
/// Velocity picked up from a rotating frame depends on where the point
/// sits, so the two travel together through a transform and both come
/// back expressed in the target frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityState {
    /// Position of the point [m]
    pub position: Vector3<f64>,

    /// Linear velocity of the point [m/s]
    pub velocity: Vector3<f64>,
}

impl Default for VelocityState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
        }
    }
}

impl VelocityState {
    /// Create a new velocity state with initial values
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// Create a velocity state for a point at rest at `position`
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Position, velocity and acceleration of a point, expressed in a
/// single frame
///
/// The centripetal and Coriolis contributions of a rotating frame feed
/// on the lower-order quantities, so acceleration carries them along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationState {
    /// Position of the point [m]
    pub position: Vector3<f64>,

    /// Linear velocity of the point [m/s]
    pub velocity: Vector3<f64>,

    /// Linear acceleration of the point [m/s²]
    pub acceleration: Vector3<f64>,
}

impl Default for AccelerationState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
        }
    }
}

impl AccelerationState {
    /// Create a new acceleration state with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        acceleration: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration,
        }
    }

    /// Create an acceleration state for a point at rest at `position`
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}
