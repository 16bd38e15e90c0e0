//! A collection of constants.

/// Columns reserved left of the plot for y-axis labels and the tick column.
pub const DEFAULT_OFFSET: usize = 3;

/// Labels are right-aligned to 8 characters by default.
pub const DEFAULT_LABEL_WIDTH: usize = 8;
/// Numbers are rounded to the second decimal place.
///
/// 14.832 becomes 14.83
pub const DEFAULT_LABEL_PRECISION: usize = 2;
/// Text written after the number, separating it from the axis.
pub const DEFAULT_LABEL_SUFFIX: &str = " ";

/// Terminal fallback when the size cannot be queried.
pub const FALLBACK_TERM_WIDTH: u16 = 80;
pub const FALLBACK_TERM_HEIGHT: u16 = 30;

/// Rows kept free below a fitted chart (prompt + x-axis labels).
pub const FIT_MARGIN_ROWS: usize = 3;
/// A fitted chart is never shorter than this.
pub const MIN_FIT_HEIGHT: usize = 4;
