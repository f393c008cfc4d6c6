use dh_kinematics::{Frame, KinematicsError, DEFAULT_TRACKING_FRACTION};
use nalgebra::Vector3;

#[test]
fn test_translate_toward_converges_monotonically() {
    let mut follower = Frame::new(-1.0, 2.0, 0.5);
    let target = Frame::new(2.0, -1.0, 1.5);
    let epsilon = 1e-3;

    let mut previous = f64::INFINITY;
    let mut steps = 0;
    loop {
        let distance = follower.translate_toward(&target, DEFAULT_TRACKING_FRACTION);
        assert!(distance < previous, "distance grew at step {}", steps);
        previous = distance;
        steps += 1;
        if (target.position() - follower.position()).norm() < epsilon {
            break;
        }
        assert!(steps < 1000, "did not converge within 1000 steps");
    }
}

#[test]
fn test_translate_toward_keeps_orientation() {
    let mut follower = Frame::default();
    follower.rotate(0.1, 0.2, 0.3);
    let rotation = follower.rotation();
    follower.translate_toward(&Frame::new(1.0, 1.0, 1.0), 0.25);
    assert_eq!(follower.rotation(), rotation);
}

#[test]
fn test_translate_toward_reached_target() {
    let mut follower = Frame::new(1.0, 1.0, 1.0);
    let target = follower.clone();
    assert_eq!(follower.translate_toward(&target, DEFAULT_TRACKING_FRACTION), 0.0);
    assert_eq!(follower, target);
}

#[test]
fn test_rotation_tracking_shrinks_single_axis_delta() {
    let mut follower = Frame::default();
    let mut target = Frame::default();
    target.rotate(0.0, 0.0, 1.2);

    let mut last = f64::INFINITY;
    for _ in 0..50 {
        let delta = follower.rotate_toward(&target, 0.1);
        assert!(delta.z.abs() < last);
        last = delta.z.abs();
    }
    assert!(follower.rotation_delta_toward(&target).norm() < 0.01);
}

#[test]
fn test_zero_axis_rotation_is_an_error() {
    let mut frame = Frame::new(0.0, 0.0, 1.0);
    let err = frame.rotate_about_axis(0.5, &Vector3::new(0.0, 0.0, 0.0)).unwrap_err();
    assert_eq!(err, KinematicsError::DegenerateAxis);
    assert!(frame.pose().iter().all(|v| v.is_finite()));
}
