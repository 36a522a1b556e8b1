//! Display configuration shared by the hosts

use crate::layout::{Layout, Point};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Window geometry and cell size
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window width in pixels
    pub window_width: f64,
    /// Window height in pixels
    pub window_height: f64,
    /// Cell circumradius in pixels
    pub circumradius: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            circumradius: 40.0,
        }
    }
}

impl DisplayConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DisplayConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes that cannot produce a usable layout
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("circumradius", self.circumradius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("{} must be a positive number, got {}", name, value);
            }
        }
        Ok(())
    }

    /// Layout with the board centered in the window
    pub fn layout(&self) -> Layout {
        Layout::new(
            Point::new(self.window_width / 2.0, self.window_height / 2.0),
            self.circumradius,
        )
    }
}
