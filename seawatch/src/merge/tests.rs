use super::*;
use crate::labeling::label;

fn blocks(rows: usize, cols: usize, boxes: &[BBox]) -> Mask {
    let mut mask = Mask::new_default(rows, cols);
    for bbox in boxes {
        mask.fill_rect(bbox);
    }
    mask
}

#[test]
fn test_empty_mask_unchanged() {
    let mask = Mask::new_default(16, 16);
    assert_eq!(merge(&mask, 30, Connectivity::Eight), mask);
}

#[test]
fn test_distance_zero_keeps_disjoint_boxes() {
    let boxes = [
        BBox::new(2, 2, 6, 6),
        BBox::new(2, 10, 6, 14),
        BBox::new(20, 5, 24, 9),
    ];
    let mask = blocks(32, 32, &boxes);
    let merged = merge(&mask, 0, Connectivity::Eight);
    assert_eq!(merged, mask);

    let regions = label(&merged, Connectivity::Eight).regions();
    let merged_boxes: Vec<BBox> = regions.iter().map(|r| r.bbox).collect();
    assert_eq!(merged_boxes, boxes);
}

#[test]
fn test_distance_zero_fills_bounding_box() {
    // An L-shape becomes its filled bounding box.
    let mask = Mask::from_fn(10, 10, |r, c| {
        (r == 2 && (2..7).contains(&c)) || (c == 2 && (2..8).contains(&r))
    });
    let merged = merge(&mask, 0, Connectivity::Eight);
    assert_eq!(merged, blocks(10, 10, &[BBox::new(2, 2, 7, 6)]));
}

#[test]
fn test_nearby_blocks_merge() {
    // Two 5x5 blocks with a 3 pixel gap.
    let mask = blocks(40, 40, &[BBox::new(15, 10, 19, 14), BBox::new(15, 18, 19, 22)]);
    let merged = merge(&mask, 5, Connectivity::Eight);

    let regions = label(&merged, Connectivity::Eight).regions();
    assert_eq!(regions.len(), 1);
    // Grown by 5 on every side.
    assert_eq!(regions[0].bbox, BBox::new(10, 5, 24, 27));
    assert_eq!(regions[0].area, regions[0].bbox.area());
}

#[test]
fn test_far_blocks_stay_separate() {
    let mask = blocks(60, 60, &[BBox::new(5, 5, 9, 9), BBox::new(5, 40, 9, 44)]);
    let merged = merge(&mask, 5, Connectivity::Eight);
    assert_eq!(label(&merged, Connectivity::Eight).regions().len(), 2);
}

#[test]
fn test_growth_clipped_to_image() {
    let mask = blocks(20, 20, &[BBox::new(0, 0, 2, 2)]);
    let merged = merge(&mask, 4, Connectivity::Eight);
    assert_eq!(merged, blocks(20, 20, &[BBox::new(0, 0, 6, 6)]));
}

#[test]
fn test_merge_is_transitive() {
    // a-b and b-c are within range, a-c is not.
    let mask = blocks(
        20,
        60,
        &[
            BBox::new(8, 2, 10, 4),
            BBox::new(8, 12, 10, 14),
            BBox::new(8, 22, 10, 24),
        ],
    );
    let merged = merge(&mask, 4, Connectivity::Eight);
    let regions = label(&merged, Connectivity::Eight).regions();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].bbox, BBox::new(4, 0, 14, 28));
}

#[test]
fn test_rect_joins() {
    let a = Rect::from_bbox(&BBox::new(0, 0, 4, 4));
    // shares the edge col 5
    let edge = Rect::from_bbox(&BBox::new(2, 5, 3, 8));
    // touches only the corner (5, 5)
    let corner = Rect::from_bbox(&BBox::new(5, 5, 7, 7));
    let apart = Rect::from_bbox(&BBox::new(0, 6, 4, 9));

    assert!(a.joins(&edge));
    assert!(!a.joins(&corner));
    assert!(!a.joins(&apart));
    assert!(a.joins(&a));
}

#[test]
fn test_corner_touching_groups_stay_separate() {
    // Grown by 1, the boxes meet only at a corner point.
    let mask = blocks(20, 20, &[BBox::new(2, 2, 4, 4), BBox::new(7, 7, 9, 9)]);
    let merged = merge(&mask, 1, Connectivity::Four);
    assert_eq!(label(&merged, Connectivity::Four).regions().len(), 2);
}

#[test]
fn test_huge_distance_fills_image() {
    let mask = blocks(12, 16, &[BBox::new(4, 4, 8, 8)]);
    for distance in [usize::MAX, i64::MAX as usize, i64::MAX as usize + 1] {
        let merged = merge(&mask, distance, Connectivity::Eight);
        assert_eq!(merged.count_ones(), 12 * 16);
    }
}

#[test]
fn test_huge_distance_merges_all_regions() {
    let mask = blocks(30, 30, &[BBox::new(0, 0, 1, 1), BBox::new(27, 27, 29, 29)]);
    let merged = merge(&mask, usize::MAX, Connectivity::Four);
    assert_eq!(merged, blocks(30, 30, &[BBox::new(0, 0, 29, 29)]));
}

#[test]
fn test_saturated_rects_join() {
    let a = Rect::from_bbox(&BBox::new(0, 0, 2, 2)).grown(i64::MAX);
    let b = Rect::from_bbox(&BBox::new(5, 5, 6, 6)).grown(i64::MAX);
    assert_eq!(a.bottom, i64::MAX);
    assert!(a.joins(&b));
}
