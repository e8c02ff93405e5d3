use std::path::Path;

use anyhow::{ensure, Context, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::motion::DEFAULT_MOVE_SPEED;
use crate::orientation::{LookScheme, Orientation, SENSITIVITY_SCALE};

/// Largest accepted `mouse_sensitivity` (1 rad per pixel)
pub const MAX_MOUSE_SENSITIVITY: f64 = 1.0e3;
/// Largest accepted `move_speed` in units per second
pub const MAX_MOVE_SPEED: f64 = 1.0e6;

/// Window creation parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "flycam".to_string(),
        }
    }
}

/// Camera and window settings, loadable from JSON
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlyConfig {
    /// Mouse sensitivity multiplier (1.0 = 0.001 rad per pixel)
    pub mouse_sensitivity: f64,
    /// Movement speed in world units per second
    pub move_speed: f64,
    pub start_position: [f64; 3],
    pub start_yaw_deg: f64,
    pub start_pitch_deg: f64,
    /// Vertical field of view in degrees
    pub field_of_view_deg: f64,
    pub near: f64,
    pub far: f64,
    pub look_scheme: LookScheme,
    pub window: WindowConfig,
}

impl Default for FlyConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.0,
            move_speed: DEFAULT_MOVE_SPEED,
            start_position: [0.0, 1.5, 9.5],
            start_yaw_deg: 180.0,
            start_pitch_deg: 20.0,
            field_of_view_deg: 65.0,
            near: 0.1,
            far: 1000.0,
            look_scheme: LookScheme::Relative,
            window: WindowConfig::default(),
        }
    }
}

impl FlyConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.mouse_sensitivity > 0.0 && self.mouse_sensitivity <= MAX_MOUSE_SENSITIVITY,
            "mouse_sensitivity must be in (0, {MAX_MOUSE_SENSITIVITY}], got {}",
            self.mouse_sensitivity
        );
        ensure!(
            self.move_speed > 0.0 && self.move_speed <= MAX_MOVE_SPEED,
            "move_speed must be in (0, {MAX_MOVE_SPEED}], got {}",
            self.move_speed
        );
        ensure!(
            self.start_position.iter().all(|c| c.is_finite()),
            "start_position must be finite, got {:?}",
            self.start_position
        );
        ensure!(
            self.start_yaw_deg.is_finite() && self.start_pitch_deg.is_finite(),
            "start angles must be finite"
        );
        ensure!(
            self.field_of_view_deg > 0.0 && self.field_of_view_deg < 180.0,
            "field_of_view_deg must be in (0, 180), got {}",
            self.field_of_view_deg
        );
        ensure!(
            self.near > 0.0 && self.far > self.near,
            "clip planes must satisfy 0 < near < far, got near={} far={}",
            self.near,
            self.far
        );
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        Ok(())
    }

    /// Sensitivity in radians per pixel
    pub fn sensitivity(&self) -> f64 {
        self.mouse_sensitivity * SENSITIVITY_SCALE
    }

    pub fn start_position(&self) -> DVec3 {
        DVec3::from_array(self.start_position)
    }

    pub fn start_orientation(&self) -> Orientation {
        Orientation::from_degrees(self.start_yaw_deg, self.start_pitch_deg)
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view_deg.to_radians()
    }
}
