//! Forward kinematics for serial chains described with standard
//! Denavit-Hartenberg parameters.

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::check_index;
use crate::frame::Frame;
use crate::table::{DhRow, DhTable};
use crate::transforms::{rotation_x, rotation_z, translation};
use crate::KinematicsError;

/// Standard Denavit-Hartenberg parameters of one link.
///
/// Index | Field   | Meaning
/// ------|---------|-------------------------------
/// 0     | `theta` | joint angle about z (variable)
/// 1     | `d`     | offset along z
/// 2     | `a`     | length along the new x
/// 3     | `alpha` | twist about the new x
///
/// Angles in radians.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DhParameters {
    pub theta: f64,
    pub d: f64,
    pub a: f64,
    pub alpha: f64,
}

impl DhParameters {
    pub const COUNT: usize = 4;

    pub fn new(theta: f64, d: f64, a: f64, alpha: f64) -> Self {
        Self { theta, d, a, alpha }
    }

    pub fn get(&self, index: usize) -> Result<f64, KinematicsError> {
        match index {
            0 => Ok(self.theta),
            1 => Ok(self.d),
            2 => Ok(self.a),
            3 => Ok(self.alpha),
            _ => Err(KinematicsError::IndexOutOfRange { index, len: Self::COUNT }),
        }
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), KinematicsError> {
        let slot = match index {
            0 => &mut self.theta,
            1 => &mut self.d,
            2 => &mut self.a,
            3 => &mut self.alpha,
            _ => return Err(KinematicsError::IndexOutOfRange { index, len: Self::COUNT }),
        };
        *slot = value;
        Ok(())
    }

    /// `Rz(theta) · Tz(d) · Tx(a) · Rx(alpha)`
    pub fn transform(&self) -> Matrix4<f64> {
        let rz = rotation_z(self.theta);
        let tz = translation(0.0, 0.0, self.d);
        let tx = translation(self.a, 0.0, 0.0);
        let rx = rotation_x(self.alpha);

        rz * tz * tx * rx
    }
}

impl From<(f64, f64, f64, f64)> for DhParameters {
    fn from((theta, d, a, alpha): (f64, f64, f64, f64)) -> Self {
        Self::new(theta, d, a, alpha)
    }
}

/// One joint of a chain: its DH parameters and the cached link transform `A`.
///
/// `A` is recomputed on every write, so it never lags behind the parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    params: DhParameters,
    a: Matrix4<f64>,
}

impl Link {
    pub fn new(params: DhParameters) -> Self {
        Self {
            a: params.transform(),
            params,
        }
    }

    pub fn parameters(&self) -> &DhParameters {
        &self.params
    }

    /// The link transform `A`.
    pub fn transform(&self) -> &Matrix4<f64> {
        &self.a
    }

    pub fn theta(&self) -> f64 {
        self.params.theta
    }

    /// Sets one DH parameter by index (0 = theta, 1 = d, 2 = a, 3 = alpha)
    /// and recomputes `A`.
    pub fn update_parameter(&mut self, index: usize, value: f64) -> Result<(), KinematicsError> {
        let previous = self.params.get(index)?;
        self.params.set(index, value)?;
        self.refresh(index, previous, value);
        Ok(())
    }

    /// Joint angle shorthand for parameter 0.
    pub fn set_theta(&mut self, theta: f64) {
        let previous = self.params.theta;
        self.params.theta = theta;
        self.refresh(0, previous, theta);
    }

    fn refresh(&mut self, index: usize, previous: f64, value: f64) {
        self.a = self.params.transform();
        debug!(index, previous, value, "link transform recomputed");
    }
}

impl From<DhParameters> for Link {
    fn from(params: DhParameters) -> Self {
        Self::new(params)
    }
}

/// A serial chain of links with its cached end effector pose.
///
/// `htm` is the left-to-right product `A_0 · A_1 · … · A_{n-1}` and is rebuilt
/// from scratch whenever any link changes. Chains are short, so the O(n)
/// rebuild is not a concern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DirectKinematic {
    links: Vec<Link>,
    htm: Matrix4<f64>,
}

impl DirectKinematic {
    /// # Errors
    ///
    /// [`KinematicsError::InvalidChain`] when `links` is empty.
    pub fn new(links: Vec<Link>) -> Result<Self, KinematicsError> {
        if links.is_empty() {
            return Err(KinematicsError::InvalidChain);
        }
        let htm = Self::compose(&links);
        debug!(links = links.len(), "kinematic chain built");

        Ok(Self { links, htm })
    }

    pub fn from_parameters(params: &[DhParameters]) -> Result<Self, KinematicsError> {
        Self::new(params.iter().copied().map(Link::new).collect())
    }

    fn compose(links: &[Link]) -> Matrix4<f64> {
        links
            .iter()
            .fold(Matrix4::identity(), |htm, link| htm * link.transform())
    }

    fn recompute(&mut self) {
        self.htm = Self::compose(&self.links);
        debug!(
            x = self.htm[(0, 3)],
            y = self.htm[(1, 3)],
            z = self.htm[(2, 3)],
            "end effector pose recomputed"
        );
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false; a chain cannot be built without links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn end_effector_pose(&self) -> &Matrix4<f64> {
        &self.htm
    }

    /// Joint angle (DH parameter 0) of every link, in chain order.
    pub fn joint_angles(&self) -> Vec<f64> {
        self.links.iter().map(Link::theta).collect()
    }

    pub fn set_joint_angle(&mut self, link: usize, theta: f64) -> Result<(), KinematicsError> {
        check_index(link, self.links.len())?;
        self.links[link].set_theta(theta);
        self.recompute();
        Ok(())
    }

    /// Sets DH parameter `parameter` of link `link` and rebuilds the chain pose.
    pub fn update_link_parameter(
        &mut self,
        link: usize,
        parameter: usize,
        value: f64,
    ) -> Result<(), KinematicsError> {
        check_index(link, self.links.len())?;
        self.links[link].update_parameter(parameter, value)?;
        self.recompute();
        Ok(())
    }

    /// Pose of joint `link` in the base frame: `A_0 · … · A_link`.
    pub fn frame_pose(&self, link: usize) -> Result<Matrix4<f64>, KinematicsError> {
        check_index(link, self.links.len())?;
        if link == self.links.len() - 1 {
            return Ok(self.htm);
        }
        Ok(Self::compose(&self.links[..=link]))
    }

    pub fn joint_frame(&self, link: usize) -> Result<Frame, KinematicsError> {
        self.frame_pose(link).map(Frame::from_pose)
    }

    /// Every joint pose as a frame, accumulated in a single pass.
    pub fn joint_frames(&self) -> Vec<Frame> {
        self.links
            .iter()
            .scan(Matrix4::identity(), |acc, link| {
                *acc = *acc * link.transform();
                Some(Frame::from_pose(*acc))
            })
            .collect()
    }

    pub fn table(&self) -> DhTable {
        DhTable {
            rows: self
                .links
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    let p = link.parameters();
                    DhRow {
                        index,
                        theta: p.theta,
                        d: p.d,
                        a: p.a,
                        alpha: p.alpha,
                    }
                })
                .collect(),
        }
    }
}
