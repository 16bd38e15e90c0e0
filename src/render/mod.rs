pub mod chart;
pub mod glyph;
pub mod grid;
pub mod params;

pub use chart::Chart;
pub use glyph::{Glyph, Symbols};
pub use grid::{Cell, Grid};
pub use params::Params;
