//! tempo_charts
//!
//! Render working-time bar charts (per day, per project, per issue) from
//! already-aggregated `(label, seconds)` collections. Pairs with the
//! `tempo-charts` CLI.
//!
//! ### Features
//! - Load the three collections from JSON (string or numeric `time`) or CSV
//! - One bar per label in input order, durations on an `HH:MM` axis
//! - Emit an HTML page (`<h1>` + inline `<svg>` per chart) or standalone SVG/PNG files
//!
//! ### Example
//! ```no_run
//! use tempo_charts::{ChartConfig, TimeBucket, WorkLog, viz};
//!
//! let worklog = WorkLog {
//!     per_day: vec![TimeBucket::new("Mon", 3661), TimeBucket::new("Tue", 0)],
//!     per_project: vec![TimeBucket::new("Tempo", 3661)],
//!     per_issue: vec![TimeBucket::new("TEMPO-1", 3661)],
//! };
//! let page = viz::render_worklog(&worklog, &ChartConfig::default())?;
//! page.write_to("worktime.html")?;
//! viz::plot_bar_chart(&worklog.per_day, "per_day.svg", &ChartConfig::default())?;
//! # Ok::<(), tempo_charts::ChartError>(())
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod viz;

pub use config::{ChartConfig, Margins};
pub use error::{ChartError, Result};
pub use models::{ChartKind, TimeBucket, WorkLog};
