//! Configuration for the ship detection pipeline.
//!
//! [`Config`] is a flat struct with every parameter of one detection run,
//! grouped by comments into pipeline stages. It deserializes from YAML with
//! missing fields taken from [`Config::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Enums
// ============================================================================

/// Pixel connectivity for connected component labeling.
///
/// Determines which pixels are considered neighbors when grouping mask
/// pixels into regions, and which background pixels form one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// 4-connectivity: only horizontal and vertical neighbors.
    Four,
    /// 8-connectivity: includes diagonal neighbors.
    /// Default; keeps elongated hulls whose speckle gaps leave pixels
    /// touching only corner to corner in one region.
    #[default]
    Eight,
}

// ============================================================================
// Detection Configuration
// ============================================================================

/// Largest accepted `proximity_distance`; grown boxes stay well inside `i64`.
pub const MAX_PROXIMITY_DISTANCE: usize = (i64::MAX / 4) as usize;

/// Parameters of one detection run over one raster.
///
/// # Example
///
/// ```rust,ignore
/// use seawatch::Config;
///
/// let mut config = Config::cluttered_sea();
/// config.max_region_area = 20_000;
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // -- Background selection --
    /// Pixels at or below this intensity percentile (0, 100] are background.
    pub background_percentile: f64,

    // -- Thresholding --
    /// Target false alarm rate in (0, 1) for the normalized LRT statistic.
    pub target_far: f64,

    // -- Morphological cleanup --
    /// Connected components smaller than this many pixels are removed.
    pub min_object_size: usize,
    /// Enclosed holes of at most this many pixels are filled.
    pub hole_area_threshold: usize,

    // -- Proximity merge --
    /// Bounding boxes are grown by this many pixels on every side before
    /// overlapping boxes are merged.
    pub proximity_distance: usize,

    // -- Size filter --
    /// Merged regions with more pixels than this are treated as land or
    /// coastline and dropped.
    pub max_region_area: usize,

    /// Connectivity used by every labeling step.
    pub connectivity: Connectivity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_percentile: 15.0,
            target_far: 0.1,
            min_object_size: 100,
            hole_area_threshold: 1000,
            proximity_distance: 30,
            max_region_area: 16_000,
            connectivity: Connectivity::Eight,
        }
    }
}

impl Config {
    /// Open water with little clutter.
    pub fn calm_sea() -> Self {
        Self {
            target_far: 0.1,
            ..Self::default()
        }
    }

    /// Rough sea state or near-shore scenes where the statistic is noisier.
    pub fn cluttered_sea() -> Self {
        Self {
            target_far: 0.3,
            ..Self::default()
        }
    }

    /// Parse a YAML document. Missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yml::from_str(yaml).map_err(|e| Error::ConfigParse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::ConfigParse {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yml::to_string(self).map_err(|e| Error::ConfigParse {
            reason: e.to_string(),
        })
    }

    /// Check every parameter range before any computation begins.
    ///
    /// Sizes, areas and the proximity distance are unsigned, so a negative
    /// value never reaches this point: it fails while parsing with
    /// [`Error::ConfigParse`], not [`Error::InvalidConfiguration`]. Zero is
    /// accepted for all of them; `max_region_area = 0` rejects every region.
    pub fn validate(&self) -> Result<()> {
        let p = self.background_percentile;
        if !(p > 0.0 && p <= 100.0) {
            return Err(Error::InvalidConfiguration {
                parameter: "background_percentile",
                value: p,
                reason: "must lie in (0, 100]",
            });
        }

        let far = self.target_far;
        if !(far > 0.0 && far < 1.0) {
            return Err(Error::InvalidConfiguration {
                parameter: "target_far",
                value: far,
                reason: "must lie in (0, 1)",
            });
        }

        if self.proximity_distance > MAX_PROXIMITY_DISTANCE {
            return Err(Error::InvalidConfiguration {
                parameter: "proximity_distance",
                value: self.proximity_distance as f64,
                reason: "exceeds the supported maximum",
            });
        }

        Ok(())
    }
}
