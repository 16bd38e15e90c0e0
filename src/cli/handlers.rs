use std::io::{Write, stdout};

use tracing::{debug, warn};

use crate::{
    core::{
        bounds::{fit_height, plot_columns, terminal_geometry},
        color::{AnsiCode, colorize},
        config::{Config, ConfigBuilder},
        data::{Series, read_series_from_path},
        error::ChartError,
        format::LabelFormat,
        rng::Lcg,
    },
    plot,
    render::Symbols,
};

use super::parse::{ChartArgs, DemoArgs, PlotArgs};

/// Palette used when no `--color` is given and more than one series is drawn.
const DEMO_PALETTE: [AnsiCode; 4] = [
    AnsiCode::industrial_orange(),
    AnsiCode::cyan(),
    AnsiCode::magenta(),
    AnsiCode::green(),
];

fn builder_from(a: &ChartArgs) -> Result<ConfigBuilder, ChartError> {
    let mut b = Config::builder()
        .min_opt(a.min)
        .max_opt(a.max)
        .height_opt(a.height)
        .horizontal_point_spacing(a.spacing)
        .display_x_axis(a.x_axis);

    if let Some(offset) = a.offset {
        b = b.offset(offset);
    }
    for name in &a.colors {
        b = b.color(AnsiCode::from_name(name)?);
    }
    if let Some(f) = &a.format {
        b = b.format(LabelFormat::parse(f)?);
    }
    if let Some(ticks) = &a.x_ticks {
        b = b.x_ticks(ticks.iter().cloned());
    }
    if a.ascii {
        b = b.symbols(Symbols::ascii());
    }
    if a.fit && a.height.is_none() {
        let x_rows = usize::from(a.x_ticks.is_some() && a.x_axis);
        b = b.height(fit_height(terminal_geometry(), x_rows));
    }
    Ok(b)
}

fn draw(series: &[Series], a: &ChartArgs, b: ConfigBuilder) -> Result<(), ChartError> {
    let samples = series.first().map_or(0, Series::len);
    let columns = samples.saturating_sub(1) * (a.spacing + 1) + 1;
    let gutter = a
        .format
        .as_deref()
        .and_then(|f| LabelFormat::parse(f).ok())
        .unwrap_or_default()
        .render(0.0)
        .chars()
        .count()
        + 2;
    let available = plot_columns(terminal_geometry(), gutter);
    if columns > available {
        warn!(columns, available, "chart is wider than the terminal");
    }

    let chart = plot(series, b)?;
    if chart.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let mut out = stdout().lock();
    writeln!(out, "{chart}")?;
    out.flush()?;
    Ok(())
}

pub fn plot_file(a: PlotArgs) -> Result<(), ChartError> {
    let series = read_series_from_path(&a.file)?;
    debug!(
        columns = series.len(),
        samples = series.first().map_or(0, Series::len),
        file = %a.file,
        "input read"
    );
    let b = builder_from(&a.chart)?;
    draw(&series, &a.chart, b)
}

pub fn demo(a: &DemoArgs) -> Result<(), ChartError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let series: Vec<Series> = (0..a.series.max(1))
        .map(|_| Series::from(rng.walk(a.steps, a.mu, a.sigma)))
        .collect();

    let mut b = builder_from(&a.chart)?;
    if a.chart.height.is_none() && !a.chart.fit {
        b = b.height(12);
    }
    if a.chart.colors.is_empty() {
        b = b.colors(DEMO_PALETTE);
    }
    draw(&series, &a.chart, b)
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    let named = [
        (AnsiCode::black(), "black"),
        (AnsiCode::red(), "red"),
        (AnsiCode::green(), "green"),
        (AnsiCode::yellow(), "yellow"),
        (AnsiCode::blue(), "blue"),
        (AnsiCode::magenta(), "magenta"),
        (AnsiCode::cyan(), "cyan"),
        (AnsiCode::light_gray(), "lightgray"),
        (AnsiCode::default_fg(), "default"),
        (AnsiCode::dark_gray(), "darkgray"),
        (AnsiCode::light_red(), "lightred"),
        (AnsiCode::light_green(), "lightgreen"),
        (AnsiCode::light_yellow(), "lightyellow"),
        (AnsiCode::light_blue(), "lightblue"),
        (AnsiCode::light_magenta(), "lightmagenta"),
        (AnsiCode::light_cyan(), "lightcyan"),
        (AnsiCode::white(), "white"),
        (AnsiCode::industrial_orange(), "orange | industrial"),
    ];

    println!("\nPossible colors:");
    for (code, name) in &named {
        println!("{}", colorize(code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "ascii-chart";
    println!(
        "
Example invocations
-------------------
• Plot a file      : {bin} plot data.csv
• From stdin       : seq 1 10 | {bin} plot --height 5
• Fixed bounds     : {bin} plot data.csv --min 0 --max 100
• Several colors   : {bin} plot data.csv --color red,#6048c1
• Smoother lines   : {bin} plot data.csv --spacing 2
• With x-axis      : {bin} plot data.csv --x-axis --x-ticks Mon,Tue,Wed
• Fill the terminal: {bin} plot data.csv --fit
• Plain ASCII      : {bin} plot data.csv --ascii
• Random walk      : {bin} demo --series 3 --steps 70 --seed 42
"
    );
}
