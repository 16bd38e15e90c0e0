//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{color::ColorError, data::ParseError};

/// Precise configuration faults. Raised before any grid is allocated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("min {min} cannot exceed max {max}")]
    InvalidBounds { min: f64, max: f64 },
    #[error("series {series} has {found} samples, expected {expected}")]
    LengthMismatch {
        expected: usize,
        found: usize,
        series: usize,
    },
    #[error("{ticks} x-axis ticks given for {samples} samples")]
    TickCountMismatch { ticks: usize, samples: usize },
    #[error("offset must leave room for the axis column (got 0)")]
    InvalidOffset,
    #[error("invalid label format `{0}`")]
    InvalidFormat(String),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("data set is empty")]
    EmptyData,
}
