use dh_kinematics::{DirectKinematic, Frame, DEFAULT_TRACKING_FRACTION};
use tracing::warn;

use crate::drawer::Scene;

impl Scene for DirectKinematic {
    fn frames(&self) -> Vec<Frame> {
        self.joint_frames()
    }

    fn caption(&self) -> Vec<String> {
        let angles: Vec<String> = self
            .joint_angles()
            .iter()
            .map(|theta| format!("{:.1}°", theta.to_degrees()))
            .collect();
        let pose = self.end_effector_pose();

        vec![
            format!("joints: [{}]", angles.join(", ")),
            format!(
                "tool:   ({:.3}, {:.3}, {:.3})",
                pose[(0, 3)],
                pose[(1, 3)],
                pose[(2, 3)]
            ),
        ]
    }
}

/// Drives one joint toward a target angle by a fixed step per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSweep {
    pub link: usize,
    pub target: f64,
    pub step: f64,
}

impl JointSweep {
    /// Next chain state. Once the joint reaches `target` the chain is
    /// returned unchanged.
    pub fn apply(&self, chain: &DirectKinematic) -> DirectKinematic {
        let mut next = chain.clone();
        let Some(&theta) = chain.joint_angles().get(self.link) else {
            warn!(link = self.link, "joint sweep targets a link outside the chain");
            return next;
        };

        let remaining = self.target - theta;
        if remaining.abs() <= f64::EPSILON {
            return next;
        }
        let theta = theta + remaining.signum() * self.step.abs().min(remaining.abs());
        if let Err(e) = next.set_joint_angle(self.link, theta) {
            warn!(error = %e, "joint sweep could not update the chain");
        }
        next
    }
}

/// A follower frame chasing a fixed target frame in position and orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracking {
    pub follower: Frame,
    pub target: Frame,
    pub fraction: f64,
    /// Distance between the two origins before the latest step.
    pub distance: f64,
}

impl Tracking {
    pub fn new(follower: Frame, target: Frame) -> Self {
        let distance = (target.position() - follower.position()).norm();
        Self {
            follower,
            target,
            fraction: DEFAULT_TRACKING_FRACTION,
            distance,
        }
    }

    pub fn step(&self) -> Self {
        let mut next = self.clone();
        next.distance = next.follower.translate_toward(&self.target, self.fraction);
        next.follower.rotate_toward(&self.target, self.fraction);
        next
    }
}

impl Scene for Tracking {
    fn frames(&self) -> Vec<Frame> {
        vec![self.target.clone(), self.follower.clone()]
    }

    fn caption(&self) -> Vec<String> {
        let delta = self.follower.rotation_delta_toward(&self.target);
        vec![
            format!("distance: {:.4}", self.distance),
            format!(
                "rotation delta: ({:.3}, {:.3}, {:.3}) rad",
                delta.x, delta.y, delta.z
            ),
        ]
    }
}
