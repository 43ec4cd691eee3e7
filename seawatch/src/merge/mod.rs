//! Proximity merge of nearby regions.
//!
//! Every region's bounding box is grown by the proximity distance on all
//! sides. Grown boxes that overlap or share an edge segment are unioned
//! transitively, and the bounding box of each union (clipped to the image)
//! is rasterized as a filled rectangle. Boxes touching only at a corner stay
//! separate, as two polygons meeting at a single point do.

#[cfg(test)]
mod tests;

use crate::common::Mask;
use crate::config::Connectivity;
use crate::labeling::{LabelMap, UnionFind};
use crate::math::BBox;

/// Half-open rectangle in signed pixel coordinates; may extend past the
/// image after growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    top: i64,
    left: i64,
    bottom: i64,
    right: i64,
}

impl Rect {
    fn from_bbox(bbox: &BBox) -> Self {
        Self {
            top: bbox.min_row as i64,
            left: bbox.min_col as i64,
            bottom: bbox.max_row as i64 + 1,
            right: bbox.max_col as i64 + 1,
        }
    }

    fn grown(&self, distance: i64) -> Self {
        Self {
            top: self.top.saturating_sub(distance),
            left: self.left.saturating_sub(distance),
            bottom: self.bottom.saturating_add(distance),
            right: self.right.saturating_add(distance),
        }
    }

    fn union(&self, other: &Rect) -> Self {
        Self {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            bottom: self.bottom.max(other.bottom),
            right: self.right.max(other.right),
        }
    }

    /// True if the interiors overlap or the boundaries share a segment of
    /// positive length.
    fn joins(&self, other: &Rect) -> bool {
        let overlap_rows = self.bottom.min(other.bottom).saturating_sub(self.top.max(other.top));
        let overlap_cols = self.right.min(other.right).saturating_sub(self.left.max(other.left));
        overlap_rows >= 0 && overlap_cols >= 0 && (overlap_rows > 0 || overlap_cols > 0)
    }

    /// Inclusive pixel box after clipping to `rows`×`cols`, or `None` if
    /// nothing remains.
    fn clip(&self, rows: usize, cols: usize) -> Option<BBox> {
        let top = self.top.max(0);
        let left = self.left.max(0);
        let bottom = self.bottom.min(rows as i64);
        let right = self.right.min(cols as i64);
        if top >= bottom || left >= right {
            return None;
        }
        Some(BBox::new(
            top as usize,
            left as usize,
            bottom as usize - 1,
            right as usize - 1,
        ))
    }
}

/// Merge regions of `mask` whose bounding boxes lie within
/// `proximity_distance` pixels of each other into filled rectangles.
pub fn merge(mask: &Mask, proximity_distance: usize, connectivity: Connectivity) -> Mask {
    let (rows, cols) = mask.shape();
    let regions = LabelMap::from_mask(mask, connectivity).regions();
    if regions.is_empty() {
        return mask.clone();
    }

    // beyond i64 the growth already covers any image
    let distance = i64::try_from(proximity_distance).unwrap_or(i64::MAX);
    let mut rects: Vec<Rect> = regions
        .iter()
        .map(|region| Rect::from_bbox(&region.bbox).grown(distance))
        .collect();
    rects.sort_by_key(|rect| rect.top);

    let mut uf = UnionFind::new();
    for _ in 0..rects.len() {
        uf.make_set();
    }
    for i in 0..rects.len() {
        for j in i + 1..rects.len() {
            // sorted by top: nothing further down can touch rect i
            if rects[j].top > rects[i].bottom {
                break;
            }
            if rects[i].joins(&rects[j]) {
                uf.union(i as u32 + 1, j as u32 + 1);
            }
        }
    }

    let mut groups: Vec<Option<Rect>> = vec![None; rects.len()];
    for (i, rect) in rects.iter().enumerate() {
        let root = (uf.find(i as u32 + 1) - 1) as usize;
        groups[root] = Some(match groups[root] {
            Some(extent) => extent.union(rect),
            None => *rect,
        });
    }

    let mut merged = Mask::new_default(rows, cols);
    let mut group_count = 0usize;
    for extent in groups.iter().flatten() {
        group_count += 1;
        if let Some(bbox) = extent.clip(rows, cols) {
            merged.fill_rect(&bbox);
        }
    }

    tracing::debug!(
        regions = regions.len(),
        groups = group_count,
        proximity_distance,
        "Merged nearby regions"
    );
    merged
}
