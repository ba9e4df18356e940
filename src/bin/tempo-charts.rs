use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tempo_charts::viz::{self, PlotFormat};
use tempo_charts::{ChartConfig, ChartKind, WorkLog, input};

#[derive(Parser, Debug)]
#[command(
    name = "tempo-charts",
    version,
    about = "Render working-time bar charts per day, project and issue"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the three charts into an HTML page (and optionally standalone plots).
    Render(RenderArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Svg,
    Png,
}

impl From<OutFormat> for PlotFormat {
    fn from(f: OutFormat) -> Self {
        match f {
            OutFormat::Svg => PlotFormat::Svg,
            OutFormat::Png => PlotFormat::Png,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON file with `perDay`, `perProject` and `perIssue` arrays (`-` reads stdin).
    #[arg(short, long, conflicts_with_all = ["per_day", "per_project", "per_issue"])]
    input: Option<PathBuf>,
    /// CSV file for the per-day chart (columns: day,time).
    #[arg(long, requires_all = ["per_project", "per_issue"])]
    per_day: Option<PathBuf>,
    /// CSV file for the per-project chart (columns: project,time).
    #[arg(long, requires_all = ["per_day", "per_issue"])]
    per_project: Option<PathBuf>,
    /// CSV file for the per-issue chart (columns: issue,time).
    #[arg(long, requires_all = ["per_day", "per_project"])]
    per_issue: Option<PathBuf>,
    /// HTML page to write.
    #[arg(short, long, default_value = "worktime.html")]
    out: PathBuf,
    /// Also write one standalone plot per chart into this directory.
    #[arg(long)]
    plot_dir: Option<PathBuf>,
    /// Format of the standalone plots.
    #[arg(long, value_enum, default_value_t = OutFormat::Svg)]
    format: OutFormat,
    /// JSON chart config; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Surface width in pixels (default 1200).
    #[arg(long)]
    width: Option<u32>,
    /// Surface height in pixels (default 300).
    #[arg(long)]
    height: Option<u32>,
    /// Bar fill as #rrggbb (default #000000).
    #[arg(long)]
    bar_color: Option<String>,
    /// Print the HH:MM duration above each bar.
    #[arg(long, default_value_t = false)]
    value_labels: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn load_config(args: &RenderArgs) -> Result<ChartConfig> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("read config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if let Some(c) = &args.bar_color {
        config.bar_color = c.clone();
    }
    if args.value_labels {
        config.value_labels = true;
    }
    config.validate()?;
    Ok(config)
}

fn load_worklog(args: &RenderArgs) -> Result<WorkLog> {
    if let Some(path) = &args.input {
        if path.as_os_str() == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read input from stdin")?;
            return Ok(input::parse_worklog_json(&text)?);
        }
        return input::load_worklog_json(path)
            .with_context(|| format!("read input {}", path.display()));
    }
    match (&args.per_day, &args.per_project, &args.per_issue) {
        (Some(day), Some(project), Some(issue)) => {
            let load = |p: &PathBuf, kind: ChartKind| {
                input::load_buckets_csv(p, kind)
                    .with_context(|| format!("read input {}", p.display()))
            };
            Ok(WorkLog {
                per_day: load(day, ChartKind::PerDay)?,
                per_project: load(project, ChartKind::PerProject)?,
                per_issue: load(issue, ChartKind::PerIssue)?,
            })
        }
        _ => anyhow::bail!("provide --input <json> or --per-day/--per-project/--per-issue <csv>"),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = load_config(&args)?;
    let worklog = load_worklog(&args)?;

    let page = viz::render_worklog(&worklog, &config)?;
    page.write_to(&args.out)
        .with_context(|| format!("write {}", args.out.display()))?;
    eprintln!("Wrote {} charts to {}", page.len(), args.out.display());

    if let Some(dir) = args.plot_dir.as_ref() {
        let written = viz::plot_worklog(&worklog, dir, args.format.into(), &config)?;
        for path in written {
            eprintln!("Wrote plot to {}", path.display());
        }
    }

    Ok(())
}
