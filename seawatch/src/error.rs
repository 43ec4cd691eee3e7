//! Error types for the detection pipeline.

use thiserror::Error;

/// Which pixel population a statistic was estimated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Background,
    Foreground,
    /// Every pixel of the raster (LRT normalization).
    Global,
    /// A caller-supplied mask outside the pipeline.
    Masked,
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Population::Background => "background",
            Population::Foreground => "foreground",
            Population::Global => "global",
            Population::Masked => "masked",
        };
        f.write_str(name)
    }
}

/// Errors that abort the detection run for one raster.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("The {population} population selects no pixels")]
    EmptyPopulation { population: Population },

    #[error("The {population} population has zero standard deviation (mean {mean})")]
    DegenerateDistribution { population: Population, mean: f64 },

    #[error("Invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Shape mismatch: expected {expected:?} (rows, cols), got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid raster: {reason}")]
    InvalidRaster { reason: String },

    #[error("Failed to parse configuration: {reason}")]
    ConfigParse { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::ShapeMismatch`] unless both shapes are equal.
#[inline]
pub(crate) fn check_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::ShapeMismatch { expected, actual })
    }
}
