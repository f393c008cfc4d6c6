//! Chain configuration module
//!
//! A `ChainConfig` is the serializable description of a serial arm: a name
//! and its DH parameter table. Built-in presets cover the arms used by the
//! demos; other arms can be loaded from JSON.
//!
//! ```json
//! {
//!   "name": "scara",
//!   "links": [
//!     { "theta": 0.785398, "d": 0.0, "a": 0.2, "alpha": 0.0 }
//!   ]
//! }
//! ```

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::kinematics::{DhParameters, DirectKinematic};
use crate::KinematicsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainModel {
    /// Four-joint SCARA arm with lengths in metres.
    Scara,
    /// Bench rig with the SCARA joint layout and its own link dimensions.
    ScaraTestRig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub name: String,
    pub links: Vec<DhParameters>,
}

impl ChainConfig {
    /// SCARA arm
    ///
    /// Link | theta | d    | a    | alpha
    /// -----|-------|------|------|------
    /// 1    | 45°   | 0    | 0.2  | 0
    /// 2    | 45°   | 0    | 0.15 | 180°
    /// 3    | 0     | 0.18 | 0    | 0
    /// 4    | 90°   | 0.08 | 0    | 0
    pub fn scara() -> Self {
        Self {
            name: "scara".to_string(),
            links: vec![
                DhParameters::new(FRAC_PI_4, 0.0, 0.2, 0.0),
                DhParameters::new(FRAC_PI_4, 0.0, 0.15, PI),
                DhParameters::new(0.0, 0.18, 0.0, 0.0),
                DhParameters::new(FRAC_PI_2, 0.08, 0.0, 0.0),
            ],
        }
    }

    /// Bench-scale SCARA rig used by the animation demo
    ///
    /// Link | theta | d   | a   | alpha
    /// -----|-------|-----|-----|------
    /// 1    | 45°   | 0   | 2   | 0
    /// 2    | 45°   | 0   | 1.5 | 180°
    /// 3    | 0     | 2   | 0   | 0
    /// 4    | 90°   | 0.8 | 0   | 0
    pub fn scara_test_rig() -> Self {
        Self {
            name: "scara_test_rig".to_string(),
            links: vec![
                DhParameters::new(FRAC_PI_4, 0.0, 2.0, 0.0),
                DhParameters::new(FRAC_PI_4, 0.0, 1.5, PI),
                DhParameters::new(0.0, 2.0, 0.0, 0.0),
                DhParameters::new(FRAC_PI_2, 0.8, 0.0, 0.0),
            ],
        }
    }

    pub fn from_model(model: ChainModel) -> Self {
        match model {
            ChainModel::Scara => Self::scara(),
            ChainModel::ScaraTestRig => Self::scara_test_rig(),
        }
    }

    pub fn validate(&self) -> Result<(), KinematicsError> {
        if self.links.is_empty() {
            return Err(KinematicsError::InvalidChain);
        }
        for (i, p) in self.links.iter().enumerate() {
            if ![p.theta, p.d, p.a, p.alpha].iter().all(|v| v.is_finite()) {
                return Err(KinematicsError::Config(format!(
                    "link {} of '{}' has a non-finite DH parameter",
                    i + 1,
                    self.name
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, KinematicsError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KinematicsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, KinematicsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the description and builds the chain.
    pub fn build(&self) -> Result<DirectKinematic, KinematicsError> {
        self.validate()?;
        DirectKinematic::from_parameters(&self.links)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::scara()
    }
}
