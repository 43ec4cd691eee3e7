//! Ship detector and its result types.
//!
//! [`ShipDetector`] runs the full pipeline over one raster: background
//! selection, population statistics, whitening, LRT, FAR thresholding,
//! morphological cleanup, proximity merge and size filtering.


use rayon::prelude::*;

use crate::common::{Mask, Raster};
use crate::config::Config;
use crate::detection::{
    BackgroundSelection, detect, estimate_populations, lrt, normalize,
    select_background_with_cutoff, threshold_for_far, whiten,
};
use crate::error::Result;
use crate::labeling::label;
use crate::math::Statistics;
use crate::merge::merge;
use crate::morphology::clean;
use crate::region::Region;
use crate::size_filter::filter_by_area;

// =============================================================================
// Result Types
// =============================================================================

/// Regions surviving every stage, and the final mask they were labeled from.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSet {
    /// Regions in row-major order of their first pixel.
    pub regions: Vec<Region>,
    /// Filled bounding boxes of the accepted regions.
    pub mask: Mask,
}

impl DetectionSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Result of ship detection with diagnostics.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub detections: DetectionSet,
    pub diagnostics: Diagnostics,
}

/// Statistics and counts from each pipeline stage, for tuning.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    /// Intensity at the background percentile.
    pub background_cutoff: f32,
    /// Number of background pixels.
    pub background_pixels: usize,
    /// Background statistics in raw amplitude.
    pub background_stats: Statistics,
    /// Foreground statistics in raw amplitude.
    pub foreground_stats: Statistics,
    /// Global statistics of the raw LRT used for normalization.
    pub lrt_stats: Statistics,
    /// Cutoff applied to the normalized LRT.
    pub threshold: f64,
    /// Non-background pixels above the threshold.
    pub pixels_above_threshold: usize,
    /// Pixels left after hole filling and small-object removal.
    pub pixels_after_cleaning: usize,
    /// Connected components before the proximity merge.
    pub components_before_merge: usize,
    /// Connected components after the proximity merge.
    pub components_after_merge: usize,
    /// Regions dropped by the size filter.
    pub rejected_oversized: Vec<Region>,
    /// Final number of detections.
    pub final_count: usize,
}

/// Every intermediate product of one run, owned by that run.
#[derive(Debug, Clone)]
pub struct Stages {
    pub background: BackgroundSelection,
    pub background_stats: Statistics,
    pub foreground_stats: Statistics,
    pub whitened: Raster,
    pub lrt: Raster,
    pub normalized_lrt: Raster,
    pub lrt_stats: Statistics,
    pub threshold: f64,
    pub detection_mask: Mask,
    pub cleaned_mask: Mask,
    pub merged_mask: Mask,
    pub filtered_mask: Mask,
    pub rejected: Vec<Region>,
}

// =============================================================================
// ShipDetector
// =============================================================================

/// Ship detector over calibrated SAR amplitude rasters.
///
/// # Example
///
/// ```rust,ignore
/// use seawatch::{Config, Raster, ShipDetector};
///
/// let raster = Raster::new(rows, cols, samples)?;
/// let detector = ShipDetector::from_config(Config::cluttered_sea());
/// let result = detector.detect(&raster)?;
/// for region in &result.detections.regions {
///     println!("{:?} area={}", region.bbox, region.area);
/// }
/// ```
#[derive(Debug, Default)]
pub struct ShipDetector {
    config: Config,
}

impl ShipDetector {
    /// Create a detector with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline over one raster.
    pub fn detect(&self, raster: &Raster) -> Result<DetectionResult> {
        self.detect_with_stages(raster).map(|(result, _)| result)
    }

    /// Detect ships in several rasters in parallel, in input order.
    pub fn detect_all(&self, rasters: &[Raster]) -> Vec<Result<DetectionResult>> {
        rasters.par_iter().map(|raster| self.detect(raster)).collect()
    }

    /// Run the pipeline and also return every intermediate product.
    pub fn detect_with_stages(&self, raster: &Raster) -> Result<(DetectionResult, Stages)> {
        let config = &self.config;
        config.validate()?;

        // Step 1: Background selection and population statistics
        let background = select_background_with_cutoff(raster, config.background_percentile)?;
        let (background_stats, foreground_stats) = estimate_populations(raster, &background.mask)?;

        // Step 2: Whitening; both models move into the whitened domain
        let whitened = whiten(raster, background_stats.mean, background_stats.std_dev)?;
        let bg_model = background_stats.in_whitened_domain(&background_stats);
        let fg_model = foreground_stats.in_whitened_domain(&background_stats);

        // Step 3: LRT and global normalization
        let lrt_raster = lrt(
            &whitened,
            bg_model.mean,
            bg_model.std_dev,
            fg_model.mean,
            fg_model.std_dev,
        )?;
        let (normalized_lrt, lrt_stats) = normalize(&lrt_raster)?;

        // Step 4: FAR threshold, background excluded
        let threshold = threshold_for_far(config.target_far)?;
        let detection_mask = detect(&normalized_lrt, threshold, &background.mask)?;

        // Step 5: Cleanup
        let cleaned_mask = clean(
            &detection_mask,
            config.min_object_size,
            config.hole_area_threshold,
            config.connectivity,
        );
        let components_before_merge = label(&cleaned_mask, config.connectivity).num_labels();

        // Step 6: Proximity merge and size filter
        let merged_mask = merge(&cleaned_mask, config.proximity_distance, config.connectivity);
        let components_after_merge = label(&merged_mask, config.connectivity).num_labels();
        let (filtered_mask, rejected) =
            filter_by_area(&merged_mask, config.max_region_area, config.connectivity);

        // Step 7: Final regions
        let regions = label(&filtered_mask, config.connectivity).regions();

        let diagnostics = Diagnostics {
            background_cutoff: background.cutoff,
            background_pixels: background.mask.count_ones(),
            background_stats,
            foreground_stats,
            lrt_stats,
            threshold,
            pixels_above_threshold: detection_mask.count_ones(),
            pixels_after_cleaning: cleaned_mask.count_ones(),
            components_before_merge,
            components_after_merge,
            rejected_oversized: rejected.clone(),
            final_count: regions.len(),
        };

        if regions.is_empty() && diagnostics.pixels_above_threshold > 0 {
            tracing::warn!(
                pixels_above_threshold = diagnostics.pixels_above_threshold,
                pixels_after_cleaning = diagnostics.pixels_after_cleaning,
                rejected_oversized = rejected.len(),
                "No detections although foreground pixels passed the threshold"
            );
        }
        tracing::info!(
            rows = raster.rows(),
            cols = raster.cols(),
            target_far = config.target_far,
            threshold,
            components_before_merge,
            components_after_merge,
            rejected_oversized = rejected.len(),
            detections = regions.len(),
            "Ship detection finished"
        );

        let result = DetectionResult {
            detections: DetectionSet {
                regions,
                mask: filtered_mask.clone(),
            },
            diagnostics,
        };
        let stages = Stages {
            background,
            background_stats,
            foreground_stats,
            whitened,
            lrt: lrt_raster,
            normalized_lrt,
            lrt_stats,
            threshold,
            detection_mask,
            cleaned_mask,
            merged_mask,
            filtered_mask,
            rejected,
        };
        Ok((result, stages))
    }
}

/// Run independent `(config, raster)` jobs in parallel.
///
/// Each job gets its own detector and its own intermediate state; results
/// come back in input order.
pub fn detect_batch(jobs: &[(&Config, &Raster)]) -> Vec<Result<DetectionResult>> {
    jobs.par_iter()
        .map(|(config, raster)| ShipDetector::from_config((*config).clone()).detect(raster))
        .collect()
}
