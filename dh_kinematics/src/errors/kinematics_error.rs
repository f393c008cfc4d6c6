use std::error::Error;
use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// A chain needs at least one link.
    InvalidChain,
    IndexOutOfRange { index: usize, len: usize },
    DegenerateAxis,
    Config(String),
}

impl Error for KinematicsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KinematicsError::InvalidChain => write!(f, "Kinematic chain must contain at least one link"),
            KinematicsError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for length {}", index, len)
            }
            KinematicsError::DegenerateAxis => write!(f, "Rotation axis has zero length"),
            KinematicsError::Config(ref msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl From<serde_json::Error> for KinematicsError {
    fn from(err: serde_json::Error) -> Self {
        KinematicsError::Config(err.to_string())
    }
}

impl From<std::io::Error> for KinematicsError {
    fn from(err: std::io::Error) -> Self {
        KinematicsError::Config(err.to_string())
    }
}

/// Checks `index` against `len` and reports the failing pair.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), KinematicsError> {
    if index < len {
        Ok(())
    } else {
        Err(KinematicsError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_check_bounds() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(4, 4),
            Err(KinematicsError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_display_messages() {
        let err = KinematicsError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 is out of range for length 3");
        assert_eq!(
            KinematicsError::DegenerateAxis.to_string(),
            "Rotation axis has zero length"
        );
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let err: KinematicsError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, KinematicsError::Config(_)));
    }
}
