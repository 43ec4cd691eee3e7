//! Percentile-based background selection.

use crate::common::{Mask, Raster};
use crate::error::{Error, Result};
use crate::math::percentile_f32_mut;

/// Background mask together with the intensity cutoff that produced it.
#[derive(Debug, Clone)]
pub struct BackgroundSelection {
    /// True where the pixel is at or below `cutoff`.
    pub mask: Mask,
    /// Intensity at the requested percentile.
    pub cutoff: f32,
}

/// Mark every pixel at or below the `percentile`-th intensity percentile as
/// background.
///
/// `percentile` is in `[0, 100]`; exactly 0 selects nothing.
pub fn select_background(raster: &Raster, percentile: f64) -> Result<Mask> {
    select_background_with_cutoff(raster, percentile).map(|selection| selection.mask)
}

/// Same as [`select_background`], also reporting the cutoff intensity.
pub fn select_background_with_cutoff(
    raster: &Raster,
    percentile: f64,
) -> Result<BackgroundSelection> {
    if !(0.0..=100.0).contains(&percentile) {
        return Err(Error::InvalidConfiguration {
            parameter: "background_percentile",
            value: percentile,
            reason: "must lie in [0, 100]",
        });
    }

    let (rows, cols) = raster.shape();
    if percentile == 0.0 || raster.is_empty() {
        return Ok(BackgroundSelection {
            mask: Mask::new_default(rows, cols),
            cutoff: f32::NEG_INFINITY,
        });
    }

    let mut scratch = raster.pixels().to_vec();
    let cutoff = percentile_f32_mut(&mut scratch, percentile);
    drop(scratch);

    let mask = Mask::from_fn(rows, cols, |row, col| raster.get(row, col) <= cutoff);
    tracing::debug!(
        percentile,
        cutoff,
        background_pixels = mask.count_ones(),
        "Selected background pixels"
    );

    Ok(BackgroundSelection { mask, cutoff })
}
