use kinetree::{FrameId, FrameTree, MotionModel};
use nalgebra::{Unit, UnitQuaternion, Vector3};

/// Constant-rate rotation about a fixed parent axis through `center`
#[derive(Debug)]
pub struct SpinMotion {
    pub axis: Unit<Vector3<f64>>,
    pub rate: f64,
    pub center: Vector3<f64>,
}

impl MotionModel for SpinMotion {
    fn kind_name(&self) -> &'static str {
        "Spin"
    }

    fn origin_position(&self, _t: f64) -> Vector3<f64> {
        self.center
    }

    fn orientation(&self, t: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&self.axis, self.rate * t)
    }

    fn angular_velocity(&self, _t: f64) -> Vector3<f64> {
        self.axis.into_inner() * self.rate
    }
}

/// Spin-up from rest under constant angular acceleration
#[derive(Debug)]
pub struct SpinUpMotion {
    pub axis: Unit<Vector3<f64>>,
    pub accel: f64,
}

impl MotionModel for SpinUpMotion {
    fn orientation(&self, t: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&self.axis, 0.5 * self.accel * t * t)
    }

    fn angular_velocity(&self, t: f64) -> Vector3<f64> {
        self.axis.into_inner() * (self.accel * t)
    }

    fn angular_acceleration(&self, _t: f64) -> Vector3<f64> {
        self.axis.into_inner() * self.accel
    }
}

/// Frame handles for the standard harbor scene
pub struct HarborFrames {
    pub tree: FrameTree,
    pub world: FrameId,
    pub tower: FrameId,
    pub barge: FrameId,
    pub turntable: FrameId,
}

/// Creates a world with a fixed tower, a barge steaming east with a
/// constant yaw, and a turntable spinning on the barge deck
pub fn create_test_harbor() -> HarborFrames {
    let mut tree = FrameTree::new();
    let world = tree.add_origin("world");
    let tower = tree
        .add_inertial(
            Some("tower"),
            world,
            UnitQuaternion::identity(),
            Vector3::new(0.0, 50.0, 0.0),
            Vector3::zeros(),
        )
        .expect("world is registered");
    let barge = tree
        .add_inertial(
            Some("barge"),
            world,
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.3),
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
        )
        .expect("world is registered");
    let turntable = tree
        .add_custom(
            Some("turntable"),
            barge,
            SpinMotion {
                axis: Vector3::z_axis(),
                rate: 0.5,
                center: Vector3::new(1.0, -2.0, 0.5),
            },
        )
        .expect("barge is registered");

    HarborFrames {
        tree,
        world,
        tower,
        barge,
        turntable,
    }
}

/// Creates a minimal world with one carousel spinning at 1 rad/s about z
pub fn create_test_carousel() -> (FrameTree, FrameId, FrameId) {
    let mut tree = FrameTree::new();
    let world = tree.add_origin("world");
    let carousel = tree
        .add_custom(
            Some("carousel"),
            world,
            SpinMotion {
                axis: Vector3::z_axis(),
                rate: 1.0,
                center: Vector3::zeros(),
            },
        )
        .expect("world is registered");
    (tree, world, carousel)
}
