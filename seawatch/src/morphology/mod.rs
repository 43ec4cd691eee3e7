//! Component-based mask cleanup: hole filling and small-object removal.


use crate::common::Mask;
use crate::config::Connectivity;
use crate::labeling::LabelMap;
use crate::region::Region;

/// Fill holes of area `<= hole_area_threshold`, then drop true components of
/// area `< min_object_size`.
pub fn clean(
    mask: &Mask,
    min_object_size: usize,
    hole_area_threshold: usize,
    connectivity: Connectivity,
) -> Mask {
    let filled = fill_holes(mask, hole_area_threshold, connectivity);
    let cleaned = remove_small_objects(&filled, min_object_size, connectivity);
    tracing::debug!(
        before = mask.count_ones(),
        after_fill = filled.count_ones(),
        after_clean = cleaned.count_ones(),
        "Cleaned detection mask"
    );
    cleaned
}

/// Set every false component that does not touch the image border and has
/// at most `max_area` pixels.
pub fn fill_holes(mask: &Mask, max_area: usize, connectivity: Connectivity) -> Mask {
    if max_area == 0 || mask.is_empty() {
        return mask.clone();
    }

    let (rows, cols) = mask.shape();
    let gaps = LabelMap::from_mask(&mask.not(), connectivity);
    let mut is_hole = vec![false; gaps.num_labels() + 1];
    for region in gaps.regions() {
        is_hole[region.label as usize] =
            region.area <= max_area && !touches_border(&region, rows, cols);
    }

    Mask::from_fn(rows, cols, |row, col| {
        mask.get(row, col) || is_hole[gaps.label_at(row, col) as usize]
    })
}

/// Clear every true component with fewer than `min_size` pixels.
pub fn remove_small_objects(mask: &Mask, min_size: usize, connectivity: Connectivity) -> Mask {
    if min_size <= 1 {
        return mask.clone();
    }

    let map = LabelMap::from_mask(mask, connectivity);
    let regions = map.regions();
    map.select(|label| regions[(label - 1) as usize].area >= min_size)
}

#[inline]
fn touches_border(region: &Region, rows: usize, cols: usize) -> bool {
    region.bbox.min_row == 0
        || region.bbox.min_col == 0
        || region.bbox.max_row + 1 == rows
        || region.bbox.max_col + 1 == cols
}
