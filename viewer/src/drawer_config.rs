use serde::{Deserialize, Serialize};
use std::time::Duration;

/// ```rust,ignore
/// // Top-down view with a snapshot file
/// let config = DrawerConfig {
///     azimuth_deg: -90.0,
///     elevation_deg: 90.0,
///     export_path: Some("frames.jsonl".to_string()),
///     ..DrawerConfig::default()
/// };
///
/// // Validate the configuration
/// if let Err(e) = config.validate() {
///     println!("Configuration error: {}", e);
///     return;
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DrawerConfig {
    pub title: String,
    /// Camera azimuth about the world z axis, degrees.
    pub azimuth_deg: f64,
    /// Camera elevation above the xy plane, degrees.
    pub elevation_deg: f64,
    /// Drawn length of every basis axis.
    pub axis_length: f64,
    pub tick_interval_ms: u64,
    /// Number of update ticks before the animation holds its last state.
    pub frame_count: usize,
    /// JSON lines file that receives every plotted tick.
    pub export_path: Option<String>,
}

impl DrawerConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.azimuth_deg.is_finite() || !self.elevation_deg.is_finite() {
            return Err("Camera angles must be finite.".to_string());
        }
        if self.axis_length <= 0.0 || !self.axis_length.is_finite() {
            return Err("Axis length must be a positive number.".to_string());
        }
        if self.tick_interval_ms == 0 {
            return Err("Tick interval must be greater than 0.".to_string());
        }
        if let Some(path) = &self.export_path {
            if path.is_empty() {
                return Err("Export path cannot be empty.".to_string());
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth_deg.to_radians()
    }

    pub fn elevation(&self) -> f64 {
        self.elevation_deg.to_radians()
    }
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            title: "Frames".to_string(),
            azimuth_deg: 41.0,
            elevation_deg: 38.0,
            axis_length: 1.0,
            tick_interval_ms: 16,
            frame_count: 200,
            export_path: None,
        }
    }
}
