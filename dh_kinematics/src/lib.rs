//! Forward kinematics for serial robot arms described with Denavit-Hartenberg
//! parameters, plus the coordinate frames used to visualize them.
//!
//! ```rust
//! use dh_kinematics::{ChainConfig, KinematicsError};
//!
//! # fn main() -> Result<(), KinematicsError> {
//! let mut chain = ChainConfig::scara().build()?;
//! chain.set_joint_angle(0, 0.0)?;
//! let pose = chain.end_effector_pose();
//! println!("{}", chain.table());
//! println!("tool at ({:.3}, {:.3}, {:.3})", pose[(0, 3)], pose[(1, 3)], pose[(2, 3)]);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub use errors::*;

pub mod transforms;
pub mod frame;
pub mod kinematics;
pub mod table;
pub mod robot_config;

pub use frame::{AxisSegment, Frame, FrameAxes, DEFAULT_TRACKING_FRACTION};
pub use kinematics::{DhParameters, DirectKinematic, Link};
pub use robot_config::{ChainConfig, ChainModel};
pub use table::{DhRow, DhTable};
