//! Geometry helpers: value extent + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{FALLBACK_TERM_HEIGHT, FALLBACK_TERM_WIDTH, FIT_MARGIN_ROWS, MIN_FIT_HEIGHT},
    data::Series,
};

/// Inclusive `(min, max)` over every present sample of every series.
///
/// `None` when there is no present sample at all. A flat series yields
/// `min == max`; the renderer copes with a zero interval on its own.
#[must_use]
pub fn extent(series: &[Series]) -> Option<(f64, f64)> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in series.iter().flat_map(Series::present) {
        low = low.min(v);
        high = high.max(v);
    }
    (low <= high).then_some((low, high))
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(FALLBACK_TERM_WIDTH), Height(FALLBACK_TERM_HEIGHT)))
}

/// Chart height that fills the terminal, leaving room for the prompt and
/// an x-axis label row. The chart itself draws `height + 1` rows.
#[inline]
#[must_use]
pub fn fit_height((_, h): (Width, Height), x_axis_rows: usize) -> usize {
    usize::from(h.0)
        .saturating_sub(FIT_MARGIN_ROWS + x_axis_rows)
        .max(MIN_FIT_HEIGHT)
}

/// Columns left for samples once the label margin is taken.
#[inline]
#[must_use]
pub fn plot_columns((w, _): (Width, Height), offset: usize) -> usize {
    usize::from(w.0).saturating_sub(offset)
}
