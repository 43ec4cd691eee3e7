//! False-alarm-rate calibrated thresholding of the normalized LRT.
//!
//! The normalized statistic is assumed to be approximately standard normal
//! over background, so a target FAR maps to the `(1 - far)` quantile of
//! N(0, 1).

use crate::common::{Mask, Raster};
use crate::error::{Error, Result, check_shape};
use crate::math::{inverse_normal_cdf, normal_cdf};

/// Normalized-statistic cutoff whose upper tail has probability `far`.
pub fn threshold_for_far(far: f64) -> Result<f64> {
    if !(far > 0.0 && far < 1.0) {
        return Err(Error::InvalidConfiguration {
            parameter: "target_far",
            value: far,
            reason: "must lie in (0, 1)",
        });
    }
    Ok(inverse_normal_cdf(1.0 - far))
}

/// Upper-tail probability of `threshold` under N(0, 1); the nominal FAR a
/// given cutoff corresponds to.
#[inline]
pub fn far_for_threshold(threshold: f64) -> f64 {
    1.0 - normal_cdf(threshold)
}

/// `(normalized_lrt > threshold) AND NOT background_mask`.
pub fn detect(normalized_lrt: &Raster, threshold: f64, background_mask: &Mask) -> Result<Mask> {
    check_shape(normalized_lrt.shape(), background_mask.shape())?;

    let (rows, cols) = normalized_lrt.shape();
    let mut mask = Mask::from_fn(rows, cols, |row, col| {
        normalized_lrt.get(row, col) as f64 > threshold
    });
    let above_threshold = mask.count_ones();
    mask.clear_where(background_mask)?;

    tracing::debug!(
        threshold,
        above_threshold,
        detections = mask.count_ones(),
        "Thresholded normalized LRT"
    );
    Ok(mask)
}
