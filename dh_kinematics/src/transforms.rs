//! Homogeneous transformation primitives.
//!
//! Every function returns a fresh 4×4 matrix built on nalgebra's `Matrix4`.
//! Angles are in radians.
//!
//! # Rotation convention
//!
//! [`rotation_xyz`] composes `Rz(theta_z) · Ry(theta_y) · Rx(theta_x)`: the
//! rotation about X is applied first, then Y, then Z, all about fixed axes.
//! Nothing else in this crate composes rotations in a different order.
//!
//! # Examples
//!
//! ```rust
//! use dh_kinematics::transforms::{rotation_z, translation};
//!
//! let m = rotation_z(std::f64::consts::FRAC_PI_2) * translation(1.0, 0.0, 0.0);
//! assert!((m[(1, 3)] - 1.0).abs() < 1e-12);
//! ```

use nalgebra::{Matrix3, Matrix4, Unit, Vector3};

use crate::KinematicsError;

/// Axes shorter than this are treated as zero vectors.
pub const MIN_AXIS_NORM: f64 = 1e-12;

/// Rotation matrix around the x axis
pub fn rotation_x(theta: f64) -> Matrix4<f64> {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c, -s, 0.0,
        0.0, s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation matrix around the y axis
pub fn rotation_y(theta: f64) -> Matrix4<f64> {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        c, 0.0, s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        -s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation matrix around the z axis
pub fn rotation_z(theta: f64) -> Matrix4<f64> {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        c, -s, 0.0, 0.0,
        s, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Composite rotation `Rz(theta_z) · Ry(theta_y) · Rx(theta_x)`.
pub fn rotation_xyz(theta_x: f64, theta_y: f64, theta_z: f64) -> Matrix4<f64> {
    rotation_z(theta_z) * rotation_y(theta_y) * rotation_x(theta_x)
}

/// Rotation by `theta` about an arbitrary axis through the origin.
///
/// Uses Rodrigues' formula `R = I + sin(θ)·K + (1 - cos(θ))·K²`, where `K` is
/// the cross-product matrix of the normalized axis, embedded in a homogeneous
/// matrix.
///
/// # Errors
///
/// Returns [`KinematicsError::DegenerateAxis`] when the axis has zero length
/// or contains non-finite components. Very large finite axes are fine.
pub fn rotation_about_axis(theta: f64, axis: &Vector3<f64>) -> Result<Matrix4<f64>, KinematicsError> {
    if !axis.iter().all(|v| v.is_finite()) {
        return Err(KinematicsError::DegenerateAxis);
    }
    // scale to a unit max component first so the norm cannot overflow
    let scale = axis.amax();
    if scale <= MIN_AXIS_NORM {
        return Err(KinematicsError::DegenerateAxis);
    }
    let axis = Unit::try_new(axis / scale, MIN_AXIS_NORM).ok_or(KinematicsError::DegenerateAxis)?;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    let k = Matrix3::new(
        0.0, -z, y,
        z, 0.0, -x,
        -y, x, 0.0,
    );
    let (s, c) = theta.sin_cos();
    let r = Matrix3::identity() + k * s + k * k * (1.0 - c);

    Ok(r.to_homogeneous())
}

/// Pure translation by `(dx, dy, dz)`.
pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix4<f64> {
    Matrix4::new(
        1.0, 0.0, 0.0, dx,
        0.0, 1.0, 0.0, dy,
        0.0, 0.0, 1.0, dz,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Returns true when `m` is a rigid homogeneous transform within `eps`:
/// orthonormal rotation block with determinant +1 and a `[0, 0, 0, 1]` last row.
pub fn is_homogeneous(m: &Matrix4<f64>, eps: f64) -> bool {
    let r: Matrix3<f64> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let orthonormal = (r.transpose() * r - Matrix3::identity()).amax() <= eps;
    let proper = (r.determinant() - 1.0).abs() <= eps;
    let last_row = m[(3, 0)].abs() <= eps
        && m[(3, 1)].abs() <= eps
        && m[(3, 2)].abs() <= eps
        && (m[(3, 3)] - 1.0).abs() <= eps;

    orthonormal && proper && last_row
}
