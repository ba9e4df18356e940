//! Visualization: render working-time bar charts to an HTML page, **SVG** or **PNG**.
//!
//! - One band per label in input order, one linear duration axis per chart
//! - `HH:MM` tick labels on the duration axis
//! - Each chart builds its own scales; charts never share state

pub mod document;
pub mod draw;
pub mod format;
pub mod layout;
pub mod scale;
pub mod text;
pub mod types;
pub mod util;

// Re-export types for public API
pub use document::{Document, Section};
pub use format::format_hms;
pub use layout::{Bar, BarChartLayout, Tick};
pub use types::PlotFormat;

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::models::{ChartKind, TimeBucket, WorkLog};

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::fs;
use std::path::{Path, PathBuf};

use document::with_container_id;
use draw::draw_bar_chart;
use util::ensure_fonts_registered;

/// Render one chart and append its heading and surface (tagged `container_id`) to `document`.
///
/// Nothing already in `document` is touched.
pub fn render_bar_chart(
    document: &mut Document,
    buckets: &[TimeBucket],
    title: &str,
    container_id: &str,
    config: &ChartConfig,
) -> Result<()> {
    let svg = render_svg(buckets, config)?;
    document.push(Section {
        heading: title.to_string(),
        container_id: container_id.to_string(),
        svg: with_container_id(&svg, container_id),
    });
    log::info!("rendered {:?} ({} bars)", container_id, buckets.len());
    Ok(())
}

/// Render the per-day, per-project and per-issue charts, in that order.
pub fn render_worklog(worklog: &WorkLog, config: &ChartConfig) -> Result<Document> {
    let mut document = Document::new();
    for kind in ChartKind::ALL {
        render_bar_chart(
            &mut document,
            worklog.buckets(kind),
            kind.title(),
            kind.container_id(),
            config,
        )
        .map_err(|e| with_chart_context(e, kind))?;
    }
    Ok(document)
}

/// Render one chart as a standalone `<svg>` string.
pub fn render_svg(buckets: &[TimeBucket], config: &ChartConfig) -> Result<String> {
    let layout = BarChartLayout::compute(buckets, config)?;
    ensure_fonts_registered();
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
        draw_bar_chart(&root, &layout, config)?;
        root.present().map_err(ChartError::drawing)?;
    }
    Ok(svg)
}

/// Render one chart to a file. `.svg` uses the SVG backend, anything else the bitmap backend.
pub fn plot_bar_chart<P: AsRef<Path>>(
    buckets: &[TimeBucket],
    out_path: P,
    config: &ChartConfig,
) -> Result<()> {
    let layout = BarChartLayout::compute(buckets, config)?;
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let size = (config.width, config.height);

    match PlotFormat::from_path(out_path) {
        PlotFormat::Svg => {
            let root = SVGBackend::new(out_path, size).into_drawing_area();
            draw_bar_chart(&root, &layout, config)?;
            root.present().map_err(ChartError::drawing)?;
        }
        PlotFormat::Png => {
            let root = BitMapBackend::new(out_path, size).into_drawing_area();
            draw_bar_chart(&root, &layout, config)?;
            root.present().map_err(ChartError::drawing)?;
        }
    }
    log::info!("wrote plot to {}", out_path.display());
    Ok(())
}

/// Write `perDay`, `perProject` and `perIssues` plots into `out_dir`; returns the written paths.
pub fn plot_worklog<P: AsRef<Path>>(
    worklog: &WorkLog,
    out_dir: P,
    format: PlotFormat,
    config: &ChartConfig,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(ChartKind::ALL.len());
    for kind in ChartKind::ALL {
        let path = out_dir.join(format!("{}.{}", kind.container_id(), format.extension()));
        plot_bar_chart(worklog.buckets(kind), &path, config)
            .map_err(|e| with_chart_context(e, kind))?;
        written.push(path);
    }
    Ok(written)
}

fn with_chart_context(e: ChartError, kind: ChartKind) -> ChartError {
    match e {
        ChartError::InvalidInput(msg) => {
            ChartError::InvalidInput(format!("{}: {}", kind.container_id(), msg))
        }
        other => other,
    }
}
