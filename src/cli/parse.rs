use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-chart",
    about = "Line charts in the terminal using box-drawing glyphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Emit debug logging on stderr (overridden by `RUST_LOG`)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot numeric columns from a CSV / whitespace separated file
    Plot(PlotArgs),
    /// Plot a random walk
    Demo(DemoArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Options shared by every command that draws a chart.
#[derive(Args, Debug, Default)]
pub struct ChartArgs {
    /// Lower bound of the y-axis (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    /// Upper bound of the y-axis (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Vertical resolution in rows (defaults to max - min)
    #[arg(long)]
    pub height: Option<usize>,
    /// Size the chart to the terminal height
    #[arg(long, conflicts_with = "height")]
    pub fit: bool,

    /// Columns reserved for the y-axis labels
    #[arg(long)]
    pub offset: Option<usize>,

    /// Series colors, cycled (name or `#RRGGBB`; repeat or comma-separate)
    #[arg(long = "color", value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Y label template, e.g. "{:8.2} "
    #[arg(long)]
    pub format: Option<String>,

    /// Interpolated points inserted between consecutive samples
    #[arg(long, default_value_t = 0)]
    pub spacing: usize,

    /// Draw the x-axis along the bottom row
    #[arg(long)]
    pub x_axis: bool,

    /// One label per sample, comma-separated (shown with --x-axis)
    #[arg(long, value_delimiter = ',')]
    pub x_ticks: Option<Vec<String>>,

    /// Use plain ASCII instead of box-drawing glyphs
    #[arg(long)]
    pub ascii: bool,
}

/// `ascii-chart plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// Input path (use `-` for stdin); one series per column
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `ascii-chart demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 60)]
    pub steps: usize,
    /// Drift per step
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mu: f64,
    /// Volatility per step
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    /// Number of independent walks
    #[arg(long, default_value_t = 1)]
    pub series: usize,
    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub chart: ChartArgs,
}
