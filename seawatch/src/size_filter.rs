//! Rejection of regions too large to be vessels.

use crate::common::Mask;
use crate::config::Connectivity;
use crate::labeling::LabelMap;
use crate::region::Region;

/// Re-label `mask` and fill the bounding box of every region with
/// `area <= max_area` into a fresh mask.
///
/// Returns the filtered mask and the rejected regions.
pub fn filter_by_area(
    mask: &Mask,
    max_area: usize,
    connectivity: Connectivity,
) -> (Mask, Vec<Region>) {
    let (rows, cols) = mask.shape();
    let regions = LabelMap::from_mask(mask, connectivity).regions();

    let mut kept = Mask::new_default(rows, cols);
    let mut rejected = Vec::new();
    for region in regions {
        if region.area <= max_area {
            kept.fill_rect(&region.bbox);
        } else {
            tracing::info!(
                label = region.label,
                area = region.area,
                max_area,
                min_row = region.bbox.min_row,
                min_col = region.bbox.min_col,
                max_row = region.bbox.max_row,
                max_col = region.bbox.max_col,
                "Rejected oversized region"
            );
            rejected.push(region);
        }
    }

    (kept, rejected)
}
