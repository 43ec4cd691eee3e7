//! Connected component labeling using union-find over pixel runs.
//!
//! Each mask row is scanned into horizontal runs with word-level bit
//! scanning; runs are merged with overlapping runs of the previous row.
//! Provisional labels are created in scan order and unions always keep the
//! smaller root, so the final labels number regions by the row-major
//! position of their first pixel.


use crate::common::Mask;
use crate::config::Connectivity;
use crate::math::BBox;
use crate::region::Region;

// ============================================================================
// Run-Length Encoding
// ============================================================================

/// A horizontal run of foreground pixels.
#[derive(Debug, Clone, Copy)]
struct Run {
    start: u32, // first column (inclusive)
    end: u32,   // last column (exclusive)
    label: u32, // provisional label
}

impl Run {
    /// Column window in the previous row that can touch this run.
    /// Returns `(start, end)` with `end` exclusive.
    #[inline]
    fn search_window(&self, connectivity: Connectivity) -> (u32, u32) {
        match connectivity {
            Connectivity::Four => (self.start, self.end),
            Connectivity::Eight => (self.start.saturating_sub(1), self.end + 1),
        }
    }
}

/// Check if two runs from adjacent rows are connected.
#[inline]
fn runs_connected(prev: &Run, curr: &Run, connectivity: Connectivity) -> bool {
    match connectivity {
        Connectivity::Four => prev.start < curr.end && prev.end > curr.start,
        Connectivity::Eight => prev.start < curr.end + 1 && prev.end + 1 > curr.start,
    }
}

/// Extract runs from the packed words of one mask row.
///
/// Whole-zero and whole-one words are skipped or absorbed without scanning;
/// mixed words are scanned with trailing-zero counts.
fn extract_runs_from_row(row_words: &[u64], cols: usize, runs: &mut Vec<Run>) {
    let cols = cols as u32;
    let mut in_run = false;
    let mut run_start = 0u32;

    for (word_idx, &word) in row_words.iter().enumerate() {
        let base = word_idx as u32 * 64;

        if word == 0 {
            if in_run {
                runs.push(Run {
                    start: run_start,
                    end: base,
                    label: 0,
                });
                in_run = false;
            }
            continue;
        }

        if word == !0u64 {
            if !in_run {
                run_start = base;
                in_run = true;
            }
            continue;
        }

        let word_end = (base + 64).min(cols);
        let mut pos = base;
        while pos < word_end {
            let remaining = word >> (pos - base);
            if in_run {
                let end = pos + (!remaining).trailing_zeros();
                if end >= word_end {
                    break;
                }
                runs.push(Run {
                    start: run_start,
                    end,
                    label: 0,
                });
                in_run = false;
                pos = end;
            } else {
                if remaining == 0 {
                    break;
                }
                let start = pos + remaining.trailing_zeros();
                if start >= word_end {
                    break;
                }
                run_start = start;
                in_run = true;
                pos = start;
            }
        }
    }

    if in_run {
        runs.push(Run {
            start: run_start,
            end: cols,
            label: 0,
        });
    }
}

/// Merge current row's runs with previous row's runs via union-find.
///
/// Runs without an overlapping predecessor get a fresh label.
fn merge_runs_with_prev(
    curr_runs: &mut [Run],
    prev_runs: &[Run],
    connectivity: Connectivity,
    uf: &mut UnionFind,
) {
    let mut prev_idx = 0;
    for run in curr_runs.iter_mut() {
        let (search_start, search_end) = run.search_window(connectivity);

        while prev_idx < prev_runs.len() && prev_runs[prev_idx].end <= search_start {
            prev_idx += 1;
        }

        let mut assigned_label = None;
        let mut check_idx = prev_idx;
        while check_idx < prev_runs.len() && prev_runs[check_idx].start < search_end {
            let prev_run = &prev_runs[check_idx];
            if runs_connected(prev_run, run, connectivity) {
                match assigned_label {
                    Some(label) if label != prev_run.label => uf.union(label, prev_run.label),
                    None => assigned_label = Some(prev_run.label),
                    _ => {}
                }
            }
            check_idx += 1;
        }

        run.label = assigned_label.unwrap_or_else(|| uf.make_set());
    }
}

// ============================================================================
// LabelMap
// ============================================================================

/// A 2D label map from connected component analysis. 0 is unlabeled.
#[derive(Debug, Clone)]
pub struct LabelMap {
    labels: Vec<u32>,
    rows: usize,
    cols: usize,
    num_labels: usize,
}

impl LabelMap {
    /// Label the true pixels of `mask`.
    pub fn from_mask(mask: &Mask, connectivity: Connectivity) -> Self {
        let (rows, cols) = mask.shape();
        let mut labels = vec![0u32; rows * cols];
        let mut uf = UnionFind::new();

        let mut prev_runs: Vec<Run> = Vec::with_capacity(cols / 4);
        let mut curr_runs: Vec<Run> = Vec::with_capacity(cols / 4);

        for row in 0..rows {
            curr_runs.clear();
            extract_runs_from_row(mask.row_words(row), cols, &mut curr_runs);

            if curr_runs.is_empty() {
                prev_runs.clear();
                continue;
            }

            merge_runs_with_prev(&mut curr_runs, &prev_runs, connectivity, &mut uf);

            let row_start = row * cols;
            for run in &curr_runs {
                labels[row_start + run.start as usize..row_start + run.end as usize]
                    .fill(run.label);
            }

            std::mem::swap(&mut prev_runs, &mut curr_runs);
        }

        let num_labels = uf.flatten_labels(&mut labels);
        Self {
            labels,
            rows,
            cols,
            num_labels,
        }
    }

    /// Number of connected components (excluding background).
    #[inline]
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn label_at(&self, row: usize, col: usize) -> u32 {
        self.labels[row * self.cols + col]
    }

    /// Raw row-major labels.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Bounding box and pixel count of every component, ordered by label.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions: Vec<Region> = (1..=self.num_labels as u32)
            .map(|label| Region {
                label,
                bbox: BBox::empty(),
                area: 0,
            })
            .collect();

        for row in 0..self.rows {
            let row_labels = &self.labels[row * self.cols..(row + 1) * self.cols];
            for (col, &label) in row_labels.iter().enumerate() {
                if label == 0 {
                    continue;
                }
                let region = &mut regions[(label - 1) as usize];
                region.bbox.include(row, col);
                region.area += 1;
            }
        }

        regions
    }

    /// Mask of every pixel whose label satisfies `keep`.
    pub fn select(&self, mut keep: impl FnMut(u32) -> bool) -> Mask {
        let mut keep_label = vec![false; self.num_labels + 1];
        for label in 1..=self.num_labels as u32 {
            keep_label[label as usize] = keep(label);
        }
        Mask::from_fn(self.rows, self.cols, |row, col| {
            keep_label[self.labels[row * self.cols + col] as usize]
        })
    }
}

/// Label the connected components of `mask` under `connectivity`.
#[inline]
pub fn label(mask: &Mask, connectivity: Connectivity) -> LabelMap {
    LabelMap::from_mask(mask, connectivity)
}

// ============================================================================
// Union-Find
// ============================================================================

/// Union-find over 1-based labels.
#[derive(Debug)]
pub(crate) struct UnionFind {
    parent: Vec<u32>,
    next_label: u32,
}

impl UnionFind {
    pub(crate) fn new() -> Self {
        Self {
            parent: Vec::with_capacity(256),
            next_label: 1,
        }
    }

    #[inline]
    pub(crate) fn make_set(&mut self) -> u32 {
        let label = self.next_label;
        self.parent.push(label);
        self.next_label += 1;
        label
    }

    /// Find root with two-pass path compression.
    #[inline]
    pub(crate) fn find(&mut self, label: u32) -> u32 {
        let mut root = label;
        loop {
            let parent = self.parent[(root - 1) as usize];
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = label;
        while current != root {
            let idx = (current - 1) as usize;
            let parent = self.parent[idx];
            self.parent[idx] = root;
            current = parent;
        }

        root
    }

    /// Join two sets; the smaller root wins so roots stay first-seen labels.
    #[inline]
    pub(crate) fn union(&mut self, a: u32, b: u32) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            let (smaller, larger) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[(larger - 1) as usize] = smaller;
        }
    }

    /// Renumber roots to sequential 1..=n and rewrite `labels`.
    fn flatten_labels(&mut self, labels: &mut [u32]) -> usize {
        if self.parent.is_empty() {
            return 0;
        }

        let len = self.parent.len();
        let mut label_map = vec![0u32; len + 1];
        let mut num_labels = 0u32;

        for i in 1..=len as u32 {
            let root = self.find(i);
            if label_map[root as usize] == 0 {
                num_labels += 1;
                label_map[root as usize] = num_labels;
            }
            label_map[i as usize] = label_map[root as usize];
        }

        for l in labels.iter_mut() {
            if *l != 0 {
                *l = label_map[*l as usize];
            }
        }

        num_labels as usize
    }
}
