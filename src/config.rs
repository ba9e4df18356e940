//! Chart configuration: surface size, margins, axis styling.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//! ```json
//! { "width": 1600, "margin": { "left": 60 }, "bar_color": "#4472C4" }
//! ```

use crate::error::{ChartError, Result};
use crate::viz::util::parse_hex_color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Space between the surface edge and the drawing area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20,
            right: 10,
            bottom: 20,
            left: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Full surface width, margins included.
    pub width: u32,
    /// Full surface height, margins included.
    pub height: u32,
    pub margin: Margins,
    /// Band padding ratio, used for both inner and outer padding.
    pub padding: f64,
    /// Upper bound on the number of duration ticks; plotters picks the round step.
    pub tick_count: usize,
    /// Length of the axis tick marks.
    pub tick_size: u32,
    pub font_px: u32,
    /// `#rrggbb` or `#rgb`.
    pub bar_color: String,
    /// Print the `HH:MM` duration above each bar.
    pub value_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 300,
            margin: Margins::default(),
            padding: 0.1,
            tick_count: 10,
            tick_size: 6,
            font_px: 10,
            bar_color: "#000000".into(),
            value_labels: false,
        }
    }
}

impl ChartConfig {
    /// Read a JSON config file; missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let cfg: ChartConfig = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn inner_width(&self) -> f64 {
        self.width as f64 - self.margin.left as f64 - self.margin.right as f64
    }

    pub fn inner_height(&self) -> f64 {
        self.height as f64 - self.margin.top as f64 - self.margin.bottom as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "margins leave no drawing area in a {}x{} surface",
                self.width, self.height
            )));
        }
        if !(0.0..1.0).contains(&self.padding) {
            return Err(ChartError::InvalidConfig(format!(
                "padding must be in [0, 1), got {}",
                self.padding
            )));
        }
        if parse_hex_color(&self.bar_color).is_none() {
            return Err(ChartError::InvalidConfig(format!(
                "bar_color is not a hex color: {:?}",
                self.bar_color
            )));
        }
        Ok(())
    }
}
