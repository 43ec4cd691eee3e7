//! Pixel-level detection stages: background selection, whitening, LRT,
//! FAR-calibrated thresholding.

mod background;
mod lrt;
mod threshold;
mod whitening;

pub use background::{BackgroundSelection, select_background, select_background_with_cutoff};
pub use lrt::{lrt, normalize};
pub use threshold::{detect, far_for_threshold, threshold_for_far};
pub use whitening::{estimate, estimate_populations, whiten};
