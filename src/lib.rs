//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```rust
//! use ascii_chart::{Config, Series, plot};
//!
//! let chart = plot(&[Series::from([1.0, 2.0, 3.0, 2.0])], Config::builder().height(2)).unwrap();
//! assert_eq!(chart.lines().count(), 3);
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder},
    data::{ParseError, Series, read_series},
    error::{ChartError, ConfigError},
    format::LabelFormat,
};

pub use render::{Chart, Glyph, Params, Symbols};

/// Validate, pad and render `series` in one go.
///
/// Length, tick and offset errors are reported first. After that an empty
/// string means there is nothing to draw: no series, or only missing samples
/// while the bounds are left to the data.
pub fn plot(series: &[Series], builder: ConfigBuilder) -> Result<String, ConfigError> {
    builder.validate(series)?;
    if series.is_empty()
        || (builder.needs_data_bounds() && series.iter().all(Series::is_all_missing))
    {
        return Ok(String::new());
    }
    let cfg = builder.build(series)?;
    let padded = cfg.pad(series);
    Ok(Chart::new(&cfg).render(&padded))
}

/// [`plot`] for a single series given as raw floats; NaN marks a gap.
pub fn plot_values(values: &[f64], builder: ConfigBuilder) -> Result<String, ConfigError> {
    plot(&[Series::from(values)], builder)
}
