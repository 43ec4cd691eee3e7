//! Log-likelihood-ratio discriminant and its global normalization.
//!
//! Both populations are modeled as 1D Gaussians over whitened amplitude.
//! For a pixel `x`:
//!
//! ```text
//! lrt(x) = ln(σ_bg/σ_fg) + (x - μ_bg)²/(2σ_bg²) - (x - μ_fg)²/(2σ_fg²)
//! ```
//!
//! Higher values favor the foreground model.

use crate::common::Raster;
use crate::error::{Population, Result};
use crate::math::{Statistics, mean_std};

/// Per-pixel log-likelihood ratio of foreground vs. background.
pub fn lrt(
    whitened: &Raster,
    mean_bg: f64,
    std_bg: f64,
    mean_fg: f64,
    std_fg: f64,
) -> Result<Raster> {
    Statistics::new(mean_bg, std_bg).require_spread(Population::Background)?;
    Statistics::new(mean_fg, std_fg).require_spread(Population::Foreground)?;

    let log_ratio = (std_bg / std_fg).ln();
    let inv_two_var_bg = 1.0 / (2.0 * std_bg * std_bg);
    let inv_two_var_fg = 1.0 / (2.0 * std_fg * std_fg);

    Ok(whitened.map(|v| {
        let x = v as f64;
        let d_bg = x - mean_bg;
        let d_fg = x - mean_fg;
        (log_ratio + d_bg * d_bg * inv_two_var_bg - d_fg * d_fg * inv_two_var_fg) as f32
    }))
}

/// Rescale to zero mean and unit variance using the raster's own global
/// statistics. Returns the rescaled raster and the statistics used.
pub fn normalize(lrt_raster: &Raster) -> Result<(Raster, Statistics)> {
    let stats = mean_std(lrt_raster.iter().copied()).unwrap_or(Statistics::new(0.0, 0.0));
    stats.require_spread(Population::Global)?;

    let inv_std = 1.0 / stats.std_dev;
    let normalized = lrt_raster.map(|v| ((v as f64 - stats.mean) * inv_std) as f32);
    tracing::debug!(
        lrt_mean = stats.mean,
        lrt_std = stats.std_dev,
        "Normalized LRT statistic"
    );
    Ok((normalized, stats))
}
