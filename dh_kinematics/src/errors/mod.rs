mod kinematics_error;

pub use kinematics_error::KinematicsError;
pub(crate) use kinematics_error::check_index;
