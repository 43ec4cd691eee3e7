//! Dense row-major raster of amplitude samples.

use std::ops::Index;
use std::slice;

use crate::error::{Error, Result};

/// A 2D grid of `f32` samples stored row-major.
///
/// Every stage that produces real values (whitening, LRT, normalization)
/// returns a new `Raster`; inputs are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Raster {
    /// Wrap a row-major sample buffer.
    ///
    /// Fails if `pixels.len() != rows * cols` or any sample is NaN or infinite.
    pub fn new(rows: usize, cols: usize, pixels: Vec<f32>) -> Result<Self> {
        if pixels.len() != rows * cols {
            return Err(Error::InvalidRaster {
                reason: format!(
                    "{} samples do not fill a {}x{} grid",
                    pixels.len(),
                    rows,
                    cols
                ),
            });
        }
        if let Some(idx) = pixels.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidRaster {
                reason: format!(
                    "non-finite sample at row {}, col {}",
                    idx / cols.max(1),
                    idx % cols.max(1)
                ),
            });
        }
        Ok(Self { pixels, rows, cols })
    }

    /// Build a raster by evaluating `f(row, col)` for every pixel.
    ///
    /// Fails like [`Raster::new`] if any produced sample is NaN or infinite.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f32,
    ) -> Result<Self> {
        let mut pixels = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                pixels.push(f(row, col));
            }
        }
        Self::new(rows, cols, pixels)
    }

    /// Constant-valued raster. Fails if `value` is not finite.
    pub fn new_filled(rows: usize, cols: usize, value: f32) -> Result<Self> {
        Self::new(rows, cols, vec![value; rows * cols])
    }

    /// Element-wise map into a new raster of the same shape.
    pub(crate) fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.pixels[row * self.cols + col]
    }

    #[inline]
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.pixels.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.pixels
    }

    /// Smallest and largest sample, `None` for an empty raster.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.pixels.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl Index<(usize, usize)> for Raster {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.pixels[row * self.cols + col]
    }
}

impl<'a> IntoIterator for &'a Raster {
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_shape() {
        let raster = Raster::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(raster.shape(), (2, 3));
        assert_eq!(raster.len(), 6);
        assert!(!raster.is_empty());
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Raster::new(2, 3, vec![1.0; 5]).unwrap_err();
        assert!(matches!(err, Error::InvalidRaster { .. }));
    }

    #[test]
    fn test_new_rejects_nan() {
        let mut pixels = vec![0.0; 6];
        pixels[4] = f32::NAN;
        let err = Raster::new(2, 3, pixels).unwrap_err();
        // idx 4 => row 1, col 1
        assert!(err.to_string().contains("row 1, col 1"));
    }

    #[test]
    fn test_get_is_row_major() {
        // row 0 = [10, 20, 30], row 1 = [40, 50, 60]
        let raster = Raster::new(2, 3, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]).unwrap();
        assert_eq!(raster.get(0, 2), 30.0);
        assert_eq!(raster.get(1, 0), 40.0);
        assert_eq!(raster[(1, 2)], 60.0);
    }

    #[test]
    fn test_from_fn() {
        let raster = Raster::from_fn(3, 4, |r, c| (r * 10 + c) as f32).unwrap();
        assert_eq!(raster.get(2, 3), 23.0);
        assert_eq!(raster.get(1, 0), 10.0);
    }

    #[test]
    fn test_from_fn_rejects_non_finite() {
        let err = Raster::from_fn(8, 8, |r, c| if (r, c) == (3, 5) { f32::NAN } else { 1.0 })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRaster { .. }));
        assert!(err.to_string().contains("row 3, col 5"));

        let err = Raster::from_fn(2, 2, |_, c| if c == 1 { f32::INFINITY } else { 0.0 });
        assert!(err.is_err());
    }

    #[test]
    fn test_new_filled_rejects_non_finite() {
        assert!(matches!(
            Raster::new_filled(4, 4, f32::NAN),
            Err(Error::InvalidRaster { .. })
        ));
        assert!(Raster::new_filled(4, 4, f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_min_max() {
        let raster = Raster::new(1, 4, vec![3.0, -1.0, 7.5, 2.0]).unwrap();
        assert_eq!(raster.min_max(), Some((-1.0, 7.5)));
        assert_eq!(Raster::new_filled(0, 0, 0.0).unwrap().min_max(), None);
    }

    #[test]
    fn test_map_keeps_shape() {
        let raster = Raster::new_filled(2, 2, 3.0).unwrap();
        let doubled = raster.map(|v| v * 2.0);
        assert_eq!(doubled.shape(), (2, 2));
        assert!(doubled.iter().all(|&v| v == 6.0));
    }
}
