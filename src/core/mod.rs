//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod rng;

// re-export frequently-used items for convenience
pub use bounds::extent;
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_LABEL_PRECISION, DEFAULT_LABEL_WIDTH, DEFAULT_OFFSET};
pub use data::Series;
pub use error::{ChartError, ConfigError};
pub use format::LabelFormat;
