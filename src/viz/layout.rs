//! Bar chart geometry, independent of any drawing backend.
//!
//! All coordinates are pixels inside the margins: `(0, 0)` is the top-left corner
//! of the drawing area and `inner_height` is the baseline.

use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::{TimeBucket, validate_buckets};

use super::format::format_hms;
use super::scale::{BandScale, LinearScale};
use super::text::truncate_to_width;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub seconds: u64,
    /// `HH:MM` of `seconds`.
    pub duration_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A category tick: pixel offset of the band centre plus its (possibly shortened) text.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub inner_width: f64,
    pub inner_height: f64,
    pub bars: Vec<Bar>,
    /// Bottom axis, one per bar at the band centre.
    pub x_ticks: Vec<Tick>,
    /// Duration domain in seconds; the left axis is drawn over it.
    pub y_domain: (f64, f64),
}

impl BarChartLayout {
    pub fn compute(buckets: &[TimeBucket], config: &ChartConfig) -> Result<Self> {
        validate_buckets(buckets)?;
        config.validate()?;

        let inner_width = config.inner_width();
        let inner_height = config.inner_height();

        let x = BandScale::new(buckets.iter().map(|b| b.label.as_str()), inner_width, config.padding);
        let max_seconds = buckets.iter().map(|b| b.seconds).max().unwrap_or(0);
        let y = LinearScale::for_durations(max_seconds, inner_height);
        log::debug!(
            "layout: {} bands, step {:.2}px, bandwidth {:.2}px, y domain {:?}",
            buckets.len(),
            x.step(),
            x.bandwidth(),
            y.domain()
        );

        let bars: Vec<Bar> = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let top = y.scale(b.seconds as f64);
                Bar {
                    label: b.label.clone(),
                    seconds: b.seconds,
                    duration_label: format_hms(b.seconds),
                    x: x.position_at(i),
                    y: top,
                    width: x.bandwidth(),
                    height: inner_height - top,
                }
            })
            .collect();

        let label_room = x.step().max(0.0) as u32;
        let x_ticks = bars
            .iter()
            .map(|bar| Tick {
                offset: bar.x + bar.width / 2.0,
                text: truncate_to_width(&bar.label, config.font_px, label_room),
            })
            .collect();

        Ok(Self {
            inner_width,
            inner_height,
            bars,
            x_ticks,
            y_domain: y.domain(),
        })
    }
}
