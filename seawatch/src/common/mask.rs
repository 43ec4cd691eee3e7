//! Bit-packed boolean raster.
//!
//! Uses 1 bit per pixel. Each row starts on a fresh `u64` word so run
//! extraction in the labeler can scan one row without bit shifting across
//! row boundaries. Padding bits past `cols` are always zero.

use crate::error::{Result, check_shape};
use crate::math::BBox;

const BITS_PER_WORD: usize = 64;

/// A 2D boolean mask, same shape as the raster it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    words: Vec<u64>,
    rows: usize,
    cols: usize,
    words_per_row: usize,
}

impl Mask {
    /// Create a mask with every pixel set to `value`.
    pub fn new_filled(rows: usize, cols: usize, value: bool) -> Self {
        let words_per_row = cols.div_ceil(BITS_PER_WORD);
        let mut mask = Self {
            words: vec![if value { !0u64 } else { 0 }; rows * words_per_row],
            rows,
            cols,
            words_per_row,
        };
        if value {
            mask.clear_padding();
        }
        mask
    }

    /// All-false mask.
    #[inline]
    pub fn new_default(rows: usize, cols: usize) -> Self {
        Self::new_filled(rows, cols, false)
    }

    /// Create a mask from a row-major slice of booleans.
    pub fn from_slice(rows: usize, cols: usize, data: &[bool]) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match dimensions {}x{}",
            data.len(),
            rows,
            cols
        );
        Self::from_fn(rows, cols, |r, c| data[r * cols + c])
    }

    /// Build a mask by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut mask = Self::new_default(rows, cols);
        for row in 0..rows {
            let base = row * mask.words_per_row;
            for col in 0..cols {
                if f(row, col) {
                    mask.words[base + col / BITS_PER_WORD] |= 1u64 << (col % BITS_PER_WORD);
                }
            }
        }
        mask
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

    /// Number of pixels (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn words_per_row(&self) -> usize {
        self.words_per_row
    }

    /// Packed words of one row, LSB first.
    #[inline]
    pub fn row_words(&self, row: usize) -> &[u64] {
        let start = row * self.words_per_row;
        &self.words[start..start + self.words_per_row]
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.rows && col < self.cols);
        let word = self.words[row * self.words_per_row + col / BITS_PER_WORD];
        (word >> (col % BITS_PER_WORD)) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        debug_assert!(row < self.rows && col < self.cols);
        let word = &mut self.words[row * self.words_per_row + col / BITS_PER_WORD];
        let bit = 1u64 << (col % BITS_PER_WORD);
        if value {
            *word |= bit;
        } else {
            *word &= !bit;
        }
    }

    /// Number of true pixels.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if no pixel is set.
    #[inline]
    pub fn none(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Logical complement.
    pub fn not(&self) -> Self {
        let mut out = Self {
            words: self.words.iter().map(|w| !w).collect(),
            rows: self.rows,
            cols: self.cols,
            words_per_row: self.words_per_row,
        };
        out.clear_padding();
        out
    }

    /// `self AND NOT other` as a new mask.
    pub fn and_not(&self, other: &Mask) -> Result<Self> {
        let mut out = self.clone();
        out.clear_where(other)?;
        Ok(out)
    }

    /// Zero every pixel that is set in `other`.
    pub fn clear_where(&mut self, other: &Mask) -> Result<()> {
        check_shape(self.shape(), other.shape())?;
        for (word, &excluded) in self.words.iter_mut().zip(&other.words) {
            *word &= !excluded;
        }
        Ok(())
    }

    /// Set every pixel inside the inclusive bounding box.
    pub fn fill_rect(&mut self, bbox: &BBox) {
        debug_assert!(bbox.max_row < self.rows && bbox.max_col < self.cols);
        for row in bbox.min_row..=bbox.max_row {
            let base = row * self.words_per_row;
            let first_word = bbox.min_col / BITS_PER_WORD;
            let last_word = bbox.max_col / BITS_PER_WORD;
            for word_idx in first_word..=last_word {
                let lo = if word_idx == first_word {
                    bbox.min_col % BITS_PER_WORD
                } else {
                    0
                };
                let hi = if word_idx == last_word {
                    bbox.max_col % BITS_PER_WORD
                } else {
                    BITS_PER_WORD - 1
                };
                self.words[base + word_idx] |= span_bits(lo, hi);
            }
        }
    }

    /// Iterate `(row, col)` of every true pixel in row-major order.
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| {
            self.row_words(row)
                .iter()
                .enumerate()
                .flat_map(move |(word_idx, &word)| {
                    BitsIter(word).map(move |bit| (row, word_idx * BITS_PER_WORD + bit))
                })
        })
    }

    fn clear_padding(&mut self) {
        let tail_bits = self.cols % BITS_PER_WORD;
        if tail_bits == 0 || self.words_per_row == 0 {
            return;
        }
        let keep = (1u64 << tail_bits) - 1;
        for row in 0..self.rows {
            self.words[(row + 1) * self.words_per_row - 1] &= keep;
        }
    }
}

/// Bits `lo..=hi` set within one word.
#[inline]
fn span_bits(lo: usize, hi: usize) -> u64 {
    debug_assert!(lo <= hi && hi < BITS_PER_WORD);
    let upper = if hi == BITS_PER_WORD - 1 {
        !0u64
    } else {
        (1u64 << (hi + 1)) - 1
    };
    upper & !((1u64 << lo) - 1)
}

/// Yields indices of set bits, lowest first.
struct BitsIter(u64);

impl Iterator for BitsIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(bit)
    }
}
