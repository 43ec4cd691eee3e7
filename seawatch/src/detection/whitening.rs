//! Population statistics and the statistical whitening filter (SWF).

use crate::common::{Mask, Raster};
use crate::error::{Population, Result};
use crate::math::{Statistics, masked_mean_std};

/// Mean and population standard deviation of `raster` where `mask` is true.
///
/// Fails with `EmptyPopulation` if the mask selects nothing and with
/// `ShapeMismatch` if the shapes differ.
pub fn estimate(raster: &Raster, mask: &Mask) -> Result<Statistics> {
    masked_mean_std(raster, mask, Population::Masked)
}

/// Background and foreground statistics for one raster.
///
/// The foreground is the complement of `background`.
pub fn estimate_populations(
    raster: &Raster,
    background: &Mask,
) -> Result<(Statistics, Statistics)> {
    let bg = masked_mean_std(raster, background, Population::Background)?;
    let fg = masked_mean_std(raster, &background.not(), Population::Foreground)?;
    tracing::debug!(
        bg_mean = bg.mean,
        bg_std = bg.std_dev,
        fg_mean = fg.mean,
        fg_std = fg.std_dev,
        "Estimated population statistics"
    );
    Ok((bg, fg))
}

/// `(raster - mean_bg) / std_bg`, element-wise.
///
/// Fails with `DegenerateDistribution` when `std_bg` is zero.
pub fn whiten(raster: &Raster, mean_bg: f64, std_bg: f64) -> Result<Raster> {
    Statistics::new(mean_bg, std_bg).require_spread(Population::Background)?;
    let inv_std = 1.0 / std_bg;
    Ok(raster.map(|v| ((v as f64 - mean_bg) * inv_std) as f32))
}
