//! Free-standing coordinate frames and the moves used to animate them.

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::transforms::{rotation_about_axis, rotation_xyz, translation};
use crate::KinematicsError;

/// Step used by the tracking animations when no other fraction is given.
pub const DEFAULT_TRACKING_FRACTION: f64 = 0.01;

/// A positioned, oriented coordinate system.
///
/// The pose is stored as one homogeneous matrix: the 3×3 block holds the
/// orientation (its columns are the frame's x, y and z axes expressed in the
/// world) and the last column holds the origin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pose: Matrix4<f64>,
}

/// One basis axis drawn as a segment from the frame origin.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

/// The three basis axes of a frame, ready to be drawn as arrows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FrameAxes {
    pub origin: Point3<f64>,
    pub x: AxisSegment,
    pub y: AxisSegment,
    pub z: AxisSegment,
}

impl FrameAxes {
    pub fn segments(&self) -> [AxisSegment; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            pose: Matrix4::identity(),
        }
    }
}

impl Frame {
    /// Frame aligned with the world axes, with its origin at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            pose: translation(x, y, z),
        }
    }

    pub fn from_pose(pose: Matrix4<f64>) -> Self {
        Self { pose }
    }

    pub fn pose(&self) -> &Matrix4<f64> {
        &self.pose
    }

    pub fn set_pose(&mut self, pose: Matrix4<f64>) {
        self.pose = pose;
    }

    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.pose[(0, 3)], self.pose[(1, 3)], self.pose[(2, 3)])
    }

    pub fn rotation(&self) -> Matrix3<f64> {
        self.pose.fixed_view::<3, 3>(0, 0).into_owned()
    }

    pub fn x_component(&self) -> f64 {
        self.pose[(0, 3)]
    }

    pub fn y_component(&self) -> f64 {
        self.pose[(1, 3)]
    }

    pub fn z_component(&self) -> f64 {
        self.pose[(2, 3)]
    }

    /// Moves the frame by `(dx, dy, dz)` expressed in its own axes.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.pose = self.pose * translation(dx, dy, dz);
    }

    /// Rotates the orientation by `Rz(theta_z) · Ry(theta_y) · Rx(theta_x)`
    /// about world axes. The origin stays where it is.
    pub fn rotate(&mut self, theta_x: f64, theta_y: f64, theta_z: f64) {
        self.apply_rotation(&rotation_xyz(theta_x, theta_y, theta_z));
    }

    /// Rotates the orientation by `theta` about a world-space `axis`.
    ///
    /// # Errors
    ///
    /// [`KinematicsError::DegenerateAxis`] for a zero-length axis; the pose is
    /// left untouched.
    pub fn rotate_about_axis(&mut self, theta: f64, axis: &Vector3<f64>) -> Result<(), KinematicsError> {
        let r = rotation_about_axis(theta, axis)?;
        self.apply_rotation(&r);
        Ok(())
    }

    fn apply_rotation(&mut self, r: &Matrix4<f64>) {
        let rotated = r.fixed_view::<3, 3>(0, 0) * self.rotation();
        self.pose.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotated);
    }

    /// Moves the origin `fraction` of the way toward `other`'s origin and
    /// returns the distance between the two origins before the step.
    ///
    /// With `0 < fraction < 1` and a stationary target the distance shrinks
    /// by the factor `1 - fraction` every call.
    pub fn translate_toward(&mut self, other: &Frame, fraction: f64) -> f64 {
        let delta = other.position() - self.position();
        let distance = delta.norm();
        let step = delta * fraction;

        self.pose = translation(step.x, step.y, step.z) * self.pose;
        trace!(distance, fraction, "frame translated toward target");

        distance
    }

    /// Angles `(x, y, z)` of the orientation read back through `atan2`,
    /// matching the `Rz · Ry · Rx` composition.
    pub fn orientation_angles(&self) -> Vector3<f64> {
        let r = self.rotation();
        let x = r[(2, 1)].atan2(r[(2, 2)]);
        let y = (-r[(2, 0)]).atan2((r[(0, 0)] * r[(0, 0)] + r[(1, 0)] * r[(1, 0)]).sqrt());
        let z = r[(1, 0)].atan2(r[(0, 0)]);
        Vector3::new(x, y, z)
    }

    /// Per-axis angle difference `other - self` between the two orientations.
    ///
    /// This compares the `atan2` decompositions axis by axis. It is not the
    /// geodesic rotation between the frames and does not wrap across ±π.
    pub fn rotation_delta_toward(&self, other: &Frame) -> Vector3<f64> {
        other.orientation_angles() - self.orientation_angles()
    }

    /// Rotates `fraction` of the per-axis delta toward `other` and returns the
    /// delta measured before the step.
    pub fn rotate_toward(&mut self, other: &Frame, fraction: f64) -> Vector3<f64> {
        let delta = self.rotation_delta_toward(other);
        let step = delta * fraction;
        self.rotate(step.x, step.y, step.z);
        delta
    }

    /// Segments for the three basis axes, each `length` long.
    pub fn axes(&self, length: f64) -> FrameAxes {
        let origin = Point3::from(self.position());
        let r = self.rotation();
        let segment = |column: usize| AxisSegment {
            start: origin,
            end: origin + r.column(column).into_owned() * length,
        };

        FrameAxes {
            origin,
            x: segment(0),
            y: segment(1),
            z: segment(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_new_frame_components() {
        let f = Frame::new(1.0, -2.0, 3.5);
        assert_eq!(f.x_component(), 1.0);
        assert_eq!(f.y_component(), -2.0);
        assert_eq!(f.z_component(), 3.5);
        assert_eq!(f.rotation(), Matrix3::identity());
    }

    #[test]
    fn test_translate_uses_local_axes() {
        let mut f = Frame::default();
        f.rotate(0.0, 0.0, FRAC_PI_2);
        f.translate(1.0, 0.0, 0.0);
        // local x now points along world y
        assert_relative_eq!(f.position(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_keeps_origin() {
        let mut f = Frame::new(1.0, 2.0, 3.0);
        f.rotate(0.3, -0.2, 1.1);
        assert_relative_eq!(f.position(), Vector3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
        assert!(crate::transforms::is_homogeneous(f.pose(), 1e-12));
    }

    #[test]
    fn test_rotate_about_axis_matches_rotate() {
        let mut a = Frame::new(0.5, 0.0, 0.0);
        let mut b = a.clone();
        a.rotate(0.0, 0.0, FRAC_PI_4);
        b.rotate_about_axis(FRAC_PI_4, &Vector3::z()).unwrap();
        assert_relative_eq!(*a.pose(), *b.pose(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_about_zero_axis_leaves_pose() {
        let mut f = Frame::new(1.0, 1.0, 1.0);
        let before = f.clone();
        assert_eq!(
            f.rotate_about_axis(1.0, &Vector3::zeros()),
            Err(KinematicsError::DegenerateAxis)
        );
        assert_eq!(f, before);
    }

    #[test]
    fn test_translate_toward_returns_pre_step_distance() {
        let mut f = Frame::default();
        let target = Frame::new(3.0, 4.0, 0.0);
        let d = f.translate_toward(&target, 0.5);
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);
        assert_relative_eq!(f.position(), Vector3::new(1.5, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_delta_about_z() {
        let a = Frame::default();
        let mut b = Frame::default();
        b.rotate(0.0, 0.0, 0.6);
        let delta = a.rotation_delta_toward(&b);
        assert_relative_eq!(delta, Vector3::new(0.0, 0.0, 0.6), epsilon = 1e-12);
        assert_relative_eq!(b.rotation_delta_toward(&a), -delta, epsilon = 1e-12);
    }

    #[test]
    fn test_orientation_angles_roundtrip_composite() {
        let mut f = Frame::default();
        f.rotate(0.2, -0.3, 0.9);
        assert_relative_eq!(f.orientation_angles(), Vector3::new(0.2, -0.3, 0.9), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_toward_single_axis_converges() {
        let mut f = Frame::default();
        let mut target = Frame::default();
        target.rotate(0.0, 0.0, 1.0);
        let first = f.rotate_toward(&target, 0.5);
        assert_relative_eq!(first.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.orientation_angles().z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_axes_follow_rotation_columns() {
        let mut f = Frame::new(1.0, 0.0, 0.0);
        f.rotate(0.0, 0.0, FRAC_PI_2);
        let axes = f.axes(2.0);
        assert_eq!(axes.origin, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(axes.x.end, Point3::new(1.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(axes.y.end, Point3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(axes.z.end, Point3::new(1.0, 0.0, 2.0), epsilon = 1e-12);
        assert!(axes.segments().iter().all(|s| s.start == axes.origin));
    }
}
