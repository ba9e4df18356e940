//! Draws a computed [`BarChartLayout`] onto any Plotters backend.

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::format::format_tick;
use super::layout::BarChartLayout;
use super::util::parse_hex_color;

/// Paint one chart on `root`, which must span the full surface (margins included).
///
/// The plotting area is sized so that it matches the layout's inner area exactly:
/// the top/right margins become chart margins and the left/bottom margins become
/// the label areas. X is kept in inner-area pixels, so band geometry from the
/// layout is used unchanged; Y is in seconds.
pub fn draw_bar_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    layout: &BarChartLayout,
    config: &ChartConfig,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(ChartError::drawing)?;

    let bar_color = parse_hex_color(&config.bar_color).unwrap_or(BLACK);
    let band_centres: Vec<f64> = layout.x_ticks.iter().map(|t| t.offset).collect();
    let (y_min, y_max) = layout.y_domain;

    let mut chart = ChartBuilder::on(root)
        .margin_top(config.margin.top)
        .margin_right(config.margin.right)
        .set_label_area_size(LabelAreaPosition::Left, config.margin.left)
        .set_label_area_size(LabelAreaPosition::Bottom, config.margin.bottom)
        .build_cartesian_2d(
            (0f64..layout.inner_width).with_key_points(band_centres),
            y_min..y_max,
        )
        .map_err(ChartError::drawing)?;

    // band centres are the only x key points, so each lookup hits one tick
    let x_label_fmt = |x: &f64| {
        layout
            .x_ticks
            .iter()
            .find(|t| (t.offset - *x).abs() < 0.5)
            .map(|t| t.text.clone())
            .unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| format_tick(*v);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(layout.x_ticks.len())
        .y_labels(config.tick_count)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .set_all_tick_mark_size(config.tick_size)
        .axis_style(BLACK.stroke_width(1))
        .label_style((FontFamily::SansSerif, config.font_px))
        .draw()
        .map_err(ChartError::drawing)?;

    // One rectangle per bucket, zero-height ones included.
    chart
        .draw_series(layout.bars.iter().map(|bar| {
            Rectangle::new(
                [(bar.x, y_min), (bar.x + bar.width, bar.seconds as f64)],
                bar_color.filled(),
            )
        }))
        .map_err(ChartError::drawing)?;

    if config.value_labels {
        let above = TextStyle::from((FontFamily::SansSerif, config.font_px))
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(layout.bars.iter().map(|bar| {
                EmptyElement::at((bar.x + bar.width / 2.0, bar.seconds as f64))
                    + Text::new(bar.duration_label.clone(), (0, -2), above.clone())
            }))
            .map_err(ChartError::drawing)?;
    }

    Ok(())
}
