//! Axis-aligned bounding box for pixel regions.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with inclusive `usize` bounds.
///
/// A pixel at `(row, col)` is inside if
/// `min_row <= row <= max_row` and `min_col <= col <= max_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl BBox {
    #[inline]
    pub const fn new(min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> Self {
        Self {
            min_row,
            min_col,
            max_row,
            max_col,
        }
    }

    /// Inverted box for accumulation; the first `include()` sets real bounds.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            min_row: usize::MAX,
            min_col: usize::MAX,
            max_row: 0,
            max_col: 0,
        }
    }

    #[inline]
    pub fn include(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    /// Number of columns covered.
    #[inline]
    pub const fn width(&self) -> usize {
        self.max_col.saturating_sub(self.min_col) + 1
    }

    /// Number of rows covered.
    #[inline]
    pub const fn height(&self) -> usize {
        self.max_row.saturating_sub(self.min_row) + 1
    }

    #[inline]
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    /// True if `other` lies entirely inside this box.
    #[inline]
    pub const fn encloses(&self, other: &BBox) -> bool {
        other.min_row >= self.min_row
            && other.max_row <= self.max_row
            && other.min_col >= self.min_col
            && other.max_col <= self.max_col
    }

    /// Geometric center as `(row, col)`.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_row + self.max_row) as f32 * 0.5,
            (self.min_col + self.max_col) as f32 * 0.5,
        )
    }
}
