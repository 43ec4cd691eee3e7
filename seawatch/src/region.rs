//! Connected region from labeling.

use serde::{Deserialize, Serialize};

use crate::math::BBox;

/// A connected component of a mask.
///
/// `label` is only meaningful within the labeling pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Label id, 1-based, in row-major order of each region's first pixel.
    pub label: u32,
    /// Inclusive bounding box.
    pub bbox: BBox,
    /// Number of pixels in the component (not the bounding box area).
    pub area: usize,
}

impl Region {
    #[inline]
    pub fn width(&self) -> usize {
        self.bbox.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bbox.height()
    }

    /// Bounding box center as `(row, col)`.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        self.bbox.center()
    }

    /// Fraction of the bounding box covered by region pixels.
    #[inline]
    pub fn fill_ratio(&self) -> f32 {
        self.area as f32 / self.bbox.area() as f32
    }
}
