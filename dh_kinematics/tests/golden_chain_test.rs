//! Regression values for the SCARA presets, checked against a hand-evaluated
//! product of the four link transforms.
use dh_kinematics::{ChainConfig, DhParameters, DirectKinematic, KinematicsError, Link};
use nalgebra::Matrix4;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn assert_pose_eq(actual: &Matrix4<f64>, expected: &Matrix4<f64>, decimals: i32) {
    let tol = 0.5 * 10f64.powi(-decimals);
    for r in 0..4 {
        for c in 0..4 {
            let diff = (actual[(r, c)] - expected[(r, c)]).abs();
            assert!(
                diff < tol,
                "entry ({}, {}) differs: {:.9} vs {:.9}",
                r,
                c,
                actual[(r, c)],
                expected[(r, c)]
            );
        }
    }
}

#[test]
fn test_scara_end_effector_golden_value() {
    let dk = DirectKinematic::new(vec![
        Link::new(DhParameters::new(FRAC_PI_4, 0.0, 0.2, 0.0)),
        Link::new(DhParameters::new(FRAC_PI_4, 0.0, 0.15, PI)),
        Link::new(DhParameters::new(0.0, 0.18, 0.0, 0.0)),
        Link::new(DhParameters::new(FRAC_PI_2, 0.08, 0.0, 0.0)),
    ])
    .unwrap();

    let expected = Matrix4::new(
        1.0, 0.0, 0.0, 0.141421356,
        0.0, -1.0, 0.0, 0.291421356,
        0.0, 0.0, -1.0, -0.26,
        0.0, 0.0, 0.0, 1.0,
    );
    assert_pose_eq(dk.end_effector_pose(), &expected, 6);
}

#[test]
fn test_scara_test_rig_golden_value() {
    let dk = ChainConfig::scara_test_rig().build().unwrap();

    let expected = Matrix4::new(
        1.0, 0.0, 0.0, 1.414213562,
        0.0, -1.0, 0.0, 2.914213562,
        0.0, 0.0, -1.0, -2.8,
        0.0, 0.0, 0.0, 1.0,
    );
    assert_pose_eq(dk.end_effector_pose(), &expected, 6);
}

#[test]
fn test_preset_matches_explicit_links() {
    let from_config = ChainConfig::scara().build().unwrap();
    let explicit = DirectKinematic::from_parameters(&[
        (FRAC_PI_4, 0.0, 0.2, 0.0).into(),
        (FRAC_PI_4, 0.0, 0.15, PI).into(),
        (0.0, 0.18, 0.0, 0.0).into(),
        (FRAC_PI_2, 0.08, 0.0, 0.0).into(),
    ])
    .unwrap();
    assert_eq!(from_config.end_effector_pose(), explicit.end_effector_pose());
}

#[test]
fn test_first_joint_sweep_rotates_about_base() {
    let mut dk = ChainConfig::scara().build().unwrap();
    let start = *dk.end_effector_pose();
    let reach = start[(0, 3)].hypot(start[(1, 3)]);

    for step in 1..=10 {
        let theta = FRAC_PI_4 + step as f64 * 0.1;
        dk.set_joint_angle(0, theta).unwrap();
        let pose = dk.end_effector_pose();
        // joint 0 spins about the base z axis: planar reach and height hold
        assert!((pose[(0, 3)].hypot(pose[(1, 3)]) - reach).abs() < 1e-12);
        assert!((pose[(2, 3)] - start[(2, 3)]).abs() < 1e-12);
        assert_eq!(dk.joint_angles()[0], theta);
    }
}

#[test]
fn test_intermediate_joint_positions() {
    let dk = ChainConfig::scara().build().unwrap();
    let elbow = dk.frame_pose(0).unwrap();
    let r = 0.2 * FRAC_PI_4.cos();
    assert_pose_eq(
        &Matrix4::new(
            FRAC_PI_4.cos(), -FRAC_PI_4.sin(), 0.0, r,
            FRAC_PI_4.sin(), FRAC_PI_4.cos(), 0.0, r,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        &elbow,
        9,
    );

    let wrist = dk.frame_pose(2).unwrap();
    assert!((wrist[(2, 3)] + 0.18).abs() < 1e-12);
}

#[test]
fn test_out_of_range_queries() {
    let mut dk = ChainConfig::scara().build().unwrap();
    assert_eq!(
        dk.joint_frame(4).unwrap_err(),
        KinematicsError::IndexOutOfRange { index: 4, len: 4 }
    );
    assert_eq!(
        dk.update_link_parameter(0, 5, 1.0).unwrap_err(),
        KinematicsError::IndexOutOfRange { index: 5, len: 4 }
    );
    assert!(DirectKinematic::from_parameters(&[]).is_err());
}
