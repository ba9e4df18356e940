//! Public types for the visualization module.

use std::path::Path;

/// File formats for standalone chart output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotFormat {
    /// Vector output through the SVG backend (default).
    #[default]
    Svg,
    /// Raster output through the bitmap backend.
    Png,
}

impl PlotFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            PlotFormat::Svg => "svg",
            PlotFormat::Png => "png",
        }
    }

    /// `.svg` selects SVG; every other extension falls through to the bitmap backend.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => PlotFormat::Svg,
            _ => PlotFormat::Png,
        }
    }
}
