use kinetree::{AccelerationState, FrameId, FrameTransforms, FrameTree, MotionModel};
use nalgebra::{UnitQuaternion, Vector3};
use tracing_subscriber::EnvFilter;

/// Carousel deck spinning about the ground's z axis.
#[derive(Debug)]
struct Carousel {
    rate: f64,
}

impl MotionModel for Carousel {
    fn kind_name(&self) -> &'static str {
        "Carousel"
    }

    fn orientation(&self, t: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.rate * t)
    }

    fn angular_velocity(&self, _t: f64) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, self.rate)
    }
}

/// Print a rider's state over time as seen from `to`.
fn chart(
    frames: &impl FrameTransforms,
    rider: &AccelerationState,
    from: FrameId,
    to: FrameId,
    times: &[f64],
) {
    println!("    t  position              velocity              acceleration");
    for &t in times {
        let seen = frames
            .transform_acceleration(rider, from, to, t)
            .expect("frames share a root");
        println!(
            "{:5.2}  [{:5.2} {:5.2} {:5.2}]  [{:5.2} {:5.2} {:5.2}]  [{:5.2} {:5.2} {:5.2}]",
            t,
            seen.position.x,
            seen.position.y,
            seen.position.z,
            seen.velocity.x,
            seen.velocity.y,
            seen.velocity.z,
            seen.acceleration.x,
            seen.acceleration.y,
            seen.acceleration.z,
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = FrameTree::new();
    let ground = tree.add_origin("ground");
    let truck = tree
        .add_inertial(
            Some("truck"),
            ground,
            UnitQuaternion::identity(),
            Vector3::new(20.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
        )
        .expect("ground is registered");
    let carousel = tree
        .add_custom(Some("carousel"), ground, Carousel { rate: 0.5 })
        .expect("ground is registered");

    println!("Frames:");
    for frame in tree.iter() {
        let parent = tree.parent(frame).expect("frame is registered");
        println!("  {} under {}", tree.display(frame), tree.display(parent));
    }

    // A rider standing 3 m out on the spinning deck.
    let rider = AccelerationState::at_rest(Vector3::new(3.0, 0.0, 0.0));

    println!();
    println!("Rider as seen from {}:", tree.display(ground));
    chart(&tree, &rider, carousel, ground, &[0.0, 1.0, 2.0, 3.0]);

    println!();
    println!("Rider as seen from the approaching {}:", tree.display(truck));
    chart(&tree, &rider, carousel, truck, &[0.0, 1.0, 2.0, 3.0]);
}
