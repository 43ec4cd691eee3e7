//! Population statistics and order statistics over raster samples.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::common::{Mask, Raster};
use crate::error::{Error, Population, Result, check_shape};

/// Mean and population standard deviation of one pixel population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl Statistics {
    #[inline]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Fails with [`Error::DegenerateDistribution`] unless `std_dev` is a
    /// positive finite number.
    pub fn require_spread(&self, population: Population) -> Result<()> {
        if self.std_dev > 0.0 && self.std_dev.is_finite() {
            Ok(())
        } else {
            Err(Error::DegenerateDistribution {
                population,
                mean: self.mean,
            })
        }
    }

    /// The same population after the whitening transform
    /// `x -> (x - background.mean) / background.std_dev`.
    ///
    /// Applying this to the background statistics themselves yields `(0, 1)`.
    #[inline]
    pub fn in_whitened_domain(&self, background: &Statistics) -> Statistics {
        Statistics {
            mean: (self.mean - background.mean) / background.std_dev,
            std_dev: self.std_dev / background.std_dev,
        }
    }
}

/// Mean and population standard deviation over a sample iterator
/// (Welford's single-pass update, accumulated in `f64`).
///
/// Returns `None` when the iterator is empty.
pub fn mean_std(values: impl IntoIterator<Item = f32>) -> Option<Statistics> {
    let mut count = 0usize;
    let mut mean = 0.0f64;
    let mut m2 = 0.0f64;
    for v in values {
        count += 1;
        let v = v as f64;
        let delta = v - mean;
        mean += delta / count as f64;
        m2 += delta * (v - mean);
    }
    if count == 0 {
        return None;
    }
    Some(Statistics::new(mean, (m2 / count as f64).max(0.0).sqrt()))
}

/// Mean and population standard deviation of `raster` where `mask` is true.
///
/// `population` only labels the error when the mask selects nothing.
pub fn masked_mean_std(raster: &Raster, mask: &Mask, population: Population) -> Result<Statistics> {
    check_shape(raster.shape(), mask.shape())?;
    let cols = raster.cols();
    let pixels = raster.pixels();
    mean_std(mask.iter_ones().map(|(row, col)| pixels[row * cols + col]))
        .ok_or(Error::EmptyPopulation { population })
}

/// The `percentile`-th percentile (0..=100) of `values`, linearly
/// interpolated between the two closest ranks.
///
/// Mutates the buffer (partial sort via quickselect).
pub fn percentile_f32_mut(values: &mut [f32], percentile: f64) -> f32 {
    debug_assert!(!values.is_empty());
    debug_assert!((0.0..=100.0).contains(&percentile));

    let rank = percentile / 100.0 * (values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let frac = rank - lo as f64;

    let (_, lower, upper_part) = values.select_nth_unstable_by(lo, f32::total_cmp);
    let lower = *lower;
    if frac == 0.0 || upper_part.is_empty() {
        return lower;
    }
    let upper = upper_part.iter().copied().fold(f32::INFINITY, f32::min);
    (lower as f64 + (upper as f64 - lower as f64) * frac) as f32
}
