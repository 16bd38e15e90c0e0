//! Grid geometry derived from the resolved config and the padded series.

use crate::core::{config::Config, data::Series};

/// Row-space layout of one chart.
///
/// Row-space is the integer scale `value * ratio`; grid row `r` (0 = top)
/// shows level `maximum - r`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub ratio: f64,
    pub minimum: i64,
    pub maximum: i64,
    /// `maximum - minimum`; the grid has `rows + 1` lines.
    pub rows: usize,
    pub width: usize,
}

impl Params {
    #[must_use]
    pub fn compute(series: &[Series], cfg: &Config) -> Self {
        let ratio = cfg.ratio();
        let minimum = (cfg.min * ratio).floor() as i64;
        let maximum = (cfg.max * ratio).ceil() as i64;
        let longest = series.iter().map(Series::len).max().unwrap_or(0);
        Self {
            ratio,
            minimum,
            maximum,
            rows: maximum.saturating_sub(minimum).max(0) as usize,
            width: longest + cfg.offset,
        }
    }

    /// Label interpolation divisor; never zero.
    #[inline]
    #[must_use]
    pub fn divisor(&self) -> f64 {
        if self.rows == 0 { 1.0 } else { self.rows as f64 }
    }

    /// Level of `value` above the bottom row, in `0..=rows`.
    ///
    /// Ties round to even so `2.5` and `3.5` land on different rows.
    #[inline]
    #[must_use]
    pub fn scaled(&self, cfg: &Config, value: f64) -> usize {
        let level = (value.clamp(cfg.min, cfg.max) * self.ratio).round_ties_even() as i64;
        (level - self.minimum).clamp(0, self.rows as i64) as usize
    }

    /// Grid row (0 = top) on which `value` is drawn.
    #[inline]
    #[must_use]
    pub fn row_of(&self, cfg: &Config, value: f64) -> usize {
        self.rows - self.scaled(cfg, value)
    }

    /// Value printed beside grid row `row`.
    #[inline]
    #[must_use]
    pub fn label_value(&self, cfg: &Config, row: usize) -> f64 {
        cfg.max - row as f64 * cfg.interval() / self.divisor()
    }

    /// Grid row holding the zero level, if it lies inside the chart.
    #[inline]
    #[must_use]
    pub fn zero_row(&self) -> Option<usize> {
        (self.minimum..=self.maximum)
            .contains(&0)
            .then(|| self.maximum as usize)
    }
}
