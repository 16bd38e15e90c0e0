//! Run-time configuration object + fluent builder.

use tracing::debug;

use crate::{
    core::{
        bounds::extent, color::AnsiCode, constants::DEFAULT_OFFSET, data::Series,
        error::ConfigError, format::LabelFormat,
    },
    render::glyph::Symbols,
};

/// Immutable parameters handed to the renderer. Produced by
/// [`ConfigBuilder::build`], which resolves every default against the data.
#[derive(Debug, Clone)]
pub struct Config {
    pub min: f64,
    pub max: f64,
    /// Vertical resolution in rows of value space.
    pub height: f64,
    /// Left margin; the y-axis ticks sit in column `offset - 1`.
    pub offset: usize,
    pub colors: Vec<AnsiCode>,
    pub format: LabelFormat,
    /// Interpolated points inserted between consecutive samples.
    pub horizontal_point_spacing: usize,
    pub display_x_axis: bool,
    pub x_ticks: Option<Vec<String>>,
    pub symbols: Symbols,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.max - self.min
    }

    /// Rows per unit of value. A flat chart divides by one instead of zero.
    #[inline]
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let interval = self.interval();
        if interval > 0.0 {
            self.height / interval
        } else {
            self.height
        }
    }

    /// Colour of series `index`, cycling through the palette.
    #[inline]
    #[must_use]
    pub fn color_for(&self, index: usize) -> AnsiCode {
        if self.colors.is_empty() {
            return AnsiCode::none();
        }
        self.colors[index % self.colors.len()]
    }

    /// Apply horizontal interpolation to every series.
    #[must_use]
    pub fn pad(&self, series: &[Series]) -> Vec<Series> {
        series
            .iter()
            .map(|s| s.pad(self.horizontal_point_spacing))
            .collect()
    }

    /// True for grid columns that hold an original (non-interpolated) sample.
    #[inline]
    #[must_use]
    pub fn is_data_point(&self, column: usize) -> bool {
        column >= self.offset && (column - self.offset) % (self.horizontal_point_spacing + 1) == 0
    }
}

/// Fluent builder; every option is optional until `build`.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    min: Option<f64>,
    max: Option<f64>,
    height: Option<f64>,
    offset: Option<usize>,
    colors: Vec<AnsiCode>,
    format: Option<LabelFormat>,
    horizontal_point_spacing: usize,
    display_x_axis: bool,
    x_ticks: Option<Vec<String>>,
    symbols: Option<Symbols>,
}

impl ConfigBuilder {
    #[inline]
    pub fn min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }
    #[inline]
    pub fn max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }
    #[inline]
    pub fn min_opt(mut self, v: Option<f64>) -> Self {
        self.min = v.or(self.min);
        self
    }
    #[inline]
    pub fn max_opt(mut self, v: Option<f64>) -> Self {
        self.max = v.or(self.max);
        self
    }
    #[inline]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.min = Some(*r.start());
        self.max = Some(*r.end());
        self
    }
    #[inline]
    pub fn height(mut self, rows: usize) -> Self {
        self.height = Some(rows as f64);
        self
    }
    #[inline]
    pub fn height_opt(mut self, rows: Option<usize>) -> Self {
        if let Some(r) = rows {
            self.height = Some(r as f64);
        }
        self
    }
    #[inline]
    pub fn offset(mut self, cols: usize) -> Self {
        self.offset = Some(cols);
        self
    }
    /// Append one colour to the palette.
    #[inline]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.colors.push(c);
        self
    }
    /// Replace the palette.
    #[inline]
    pub fn colors<I: IntoIterator<Item = AnsiCode>>(mut self, c: I) -> Self {
        self.colors = c.into_iter().collect();
        self
    }
    #[inline]
    pub fn format(mut self, f: LabelFormat) -> Self {
        self.format = Some(f);
        self
    }
    #[inline]
    pub fn horizontal_point_spacing(mut self, n: usize) -> Self {
        self.horizontal_point_spacing = n;
        self
    }
    #[inline]
    pub fn display_x_axis(mut self, on: bool) -> Self {
        self.display_x_axis = on;
        self
    }
    #[inline]
    pub fn x_ticks<I, S>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.x_ticks = Some(ticks.into_iter().map(Into::into).collect());
        self
    }
    #[inline]
    pub fn symbols(mut self, s: Symbols) -> Self {
        self.symbols = Some(s);
        self
    }

    /// Whether resolving bounds needs at least one present sample.
    #[inline]
    #[must_use]
    pub fn needs_data_bounds(&self) -> bool {
        self.min.is_none() || self.max.is_none()
    }

    /// Check series length parity, tick count and offset against the
    /// un-padded `series`. Holds even when there is nothing to draw.
    pub fn validate(&self, series: &[Series]) -> Result<(), ConfigError> {
        let expected = series.first().map_or(0, Series::len);
        if let Some((index, s)) = series.iter().enumerate().find(|(_, s)| s.len() != expected) {
            return Err(ConfigError::LengthMismatch {
                expected,
                found: s.len(),
                series: index,
            });
        }
        if let Some(ticks) = &self.x_ticks {
            if ticks.len() != expected {
                return Err(ConfigError::TickCountMismatch {
                    ticks: ticks.len(),
                    samples: expected,
                });
            }
        }

        if self.offset == Some(0) {
            return Err(ConfigError::InvalidOffset);
        }
        Ok(())
    }

    /// Validate against the un-padded `series` and fill in data-driven defaults.
    pub fn build(self, series: &[Series]) -> Result<Config, ConfigError> {
        self.validate(series)?;
        let offset = self.offset.unwrap_or(DEFAULT_OFFSET);

        let (lo, hi) = extent(series).unwrap_or((0.0, 0.0));
        let min = self.min.unwrap_or(lo);
        let max = self.max.unwrap_or(hi);
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        let height = self.height.unwrap_or(max - min);
        debug!(min, max, height, offset, "resolved chart bounds");

        Ok(Config {
            min,
            max,
            height,
            offset,
            colors: self.colors,
            format: self.format.unwrap_or_default(),
            horizontal_point_spacing: self.horizontal_point_spacing,
            display_x_axis: self.display_x_axis,
            x_ticks: self.x_ticks,
            symbols: self.symbols.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(v: &[f64]) -> Vec<Series> {
        vec![Series::from(v)]
    }

    #[test]
    fn bounds_and_height_default_from_data() {
        let cfg = Config::builder()
            .build(&[Series::new(vec![Some(2.0), None, Some(-3.0)])])
            .unwrap();
        assert_eq!((cfg.min, cfg.max), (-3.0, 2.0));
        assert_eq!(cfg.height, 5.0);
        assert_eq!(cfg.offset, DEFAULT_OFFSET);
        assert_eq!(cfg.ratio(), 1.0);
    }

    #[test]
    fn user_bounds_override_data() {
        let cfg = Config::builder().min(-10.0).height(4).build(&one(&[1.0, 2.0])).unwrap();
        assert_eq!((cfg.min, cfg.max), (-10.0, 2.0));
        assert!((cfg.ratio() - 4.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn flat_data_ratio_falls_back_to_height() {
        let cfg = Config::builder().height(4).build(&one(&[5.0, 5.0])).unwrap();
        assert_eq!(cfg.interval(), 0.0);
        assert_eq!(cfg.ratio(), 4.0);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = Config::builder().range(3.0..=1.0).build(&one(&[2.0])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBounds { min: 3.0, max: 1.0 });

        let err = Config::builder().min(9.0).build(&one(&[1.0, 2.0])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBounds { min: 9.0, max: 2.0 });
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let data = one(&[1.0, 2.0]);
        for b in [
            Config::builder().min(f64::NAN),
            Config::builder().max(f64::NAN),
            Config::builder().range(f64::NAN..=f64::NAN),
            Config::builder().max(f64::INFINITY),
            Config::builder().min(f64::NEG_INFINITY),
        ] {
            let err = b.build(&data).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBounds { .. }), "{err:?}");
        }
    }

    #[test]
    fn validate_ignores_missing_samples() {
        let gaps = [Series::new(vec![None, None]), Series::new(vec![None])];
        let err = Config::builder().validate(&gaps).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch { expected: 2, found: 1, series: 1 }
        );
        assert!(Config::builder().validate(&gaps[..1]).is_ok());
    }

    #[test]
    fn length_parity_enforced() {
        let err = Config::builder()
            .build(&[Series::from([1.0, 2.0]), Series::from([1.0])])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch { expected: 2, found: 1, series: 1 }
        );

        let err = Config::builder()
            .x_ticks(["a", "b", "c"])
            .horizontal_point_spacing(1)
            .build(&one(&[1.0, 2.0]))
            .unwrap_err();
        assert_eq!(err, ConfigError::TickCountMismatch { ticks: 3, samples: 2 });
    }

    #[test]
    fn ticks_are_checked_against_unpadded_length() {
        let cfg = Config::builder()
            .x_ticks(["a", "b"])
            .horizontal_point_spacing(3)
            .build(&one(&[1.0, 2.0]))
            .unwrap();
        assert_eq!(cfg.pad(&one(&[1.0, 2.0]))[0].len(), 5);
    }

    #[test]
    fn zero_offset_rejected() {
        let err = Config::builder().offset(0).build(&one(&[1.0])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidOffset);
    }

    #[test]
    fn palette_cycles() {
        let cfg = Config::builder()
            .colors([AnsiCode::red(), AnsiCode::blue()])
            .build(&one(&[1.0]))
            .unwrap();
        assert_eq!(cfg.color_for(0), AnsiCode::red());
        assert_eq!(cfg.color_for(3), AnsiCode::blue());

        let plain = Config::builder().build(&one(&[1.0])).unwrap();
        assert!(plain.color_for(7).is_none());
    }

    #[test]
    fn data_point_cadence() {
        let cfg = Config::builder()
            .horizontal_point_spacing(2)
            .build(&one(&[1.0, 2.0]))
            .unwrap();
        let marked: Vec<_> = (0..10).filter(|&c| cfg.is_data_point(c)).collect();
        assert_eq!(marked, vec![3, 6, 9]);
    }
}
