//! Seawatch - statistical ship detection in SAR amplitude imagery.
//!
//! The pipeline turns one calibrated amplitude raster into a set of vessel
//! candidates:
//! - Percentile background selection and population statistics
//! - Statistical whitening (SWF) and a Gaussian likelihood ratio test
//! - Thresholding at a target false alarm rate
//! - Hole filling, small-object removal, proximity merge, size filter
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seawatch::{Config, Raster, ShipDetector};
//!
//! let raster = Raster::new(rows, cols, samples)?;
//! let detector = ShipDetector::from_config(Config::calm_sea());
//! let result = detector.detect(&raster)?;
//!
//! println!("Found {} ships", result.detections.len());
//! ```

pub(crate) mod common;
pub mod config;
pub mod detection;
pub(crate) mod detector;
pub mod error;
pub mod labeling;
pub mod logging;
pub mod math;
pub mod merge;
pub mod morphology;
pub(crate) mod region;
pub mod size_filter;

#[cfg(test)]
pub(crate) mod test_utils;

// ============================================================================
// Core types
// ============================================================================

pub use common::{Mask, Raster};
pub use config::{Config, Connectivity};
pub use error::{Error, Population, Result};
pub use math::{BBox, Statistics};
pub use region::Region;

// ============================================================================
// Detection
// ============================================================================

pub use detector::{
    DetectionResult, DetectionSet, Diagnostics, ShipDetector, Stages, detect_batch,
};
