//! Tests for population and order statistics.

use super::*;

// ---------------------------------------------------------------------------
// mean_std
// ---------------------------------------------------------------------------

#[test]
fn test_mean_std_simple() {
    let values = [2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let stats = mean_std(values.iter().copied()).unwrap();
    assert!((stats.mean - 5.0).abs() < 1e-9);
    assert!((stats.std_dev - 2.0).abs() < 1e-9);
}

#[test]
fn test_mean_std_constant_has_zero_spread() {
    let values = [3.0f32; 10];
    let stats = mean_std(values.iter().copied()).unwrap();
    assert_eq!(stats.mean, 3.0);
    assert_eq!(stats.std_dev, 0.0);
}

#[test]
fn test_mean_std_empty() {
    let values: [f32; 0] = [];
    assert!(mean_std(values.iter().copied()).is_none());
}

// ---------------------------------------------------------------------------
// masked_mean_std
// ---------------------------------------------------------------------------

#[test]
fn test_masked_mean_std_selects_pixels() {
    let raster = Raster::new(2, 3, vec![1.0, 2.0, 100.0, 3.0, 100.0, 100.0]).unwrap();
    let mask = Mask::from_fn(2, 3, |r, c| raster.get(r, c) < 50.0);
    let stats = masked_mean_std(&raster, &mask, Population::Background).unwrap();
    assert!((stats.mean - 2.0).abs() < 1e-12);
    // population std of [1, 2, 3] = sqrt(2/3)
    assert!((stats.std_dev - (2.0f64 / 3.0).sqrt()).abs() < 1e-9);
}

#[test]
fn test_masked_mean_std_empty_mask() {
    let raster = Raster::new_filled(4, 4, 1.0).unwrap();
    let mask = Mask::new_default(4, 4);
    let err = masked_mean_std(&raster, &mask, Population::Foreground).unwrap_err();
    assert_eq!(
        err,
        Error::EmptyPopulation {
            population: Population::Foreground
        }
    );
}

#[test]
fn test_masked_mean_std_shape_mismatch() {
    let raster = Raster::new_filled(4, 5, 1.0).unwrap();
    let mask = Mask::new_filled(5, 4, true);
    assert!(matches!(
        masked_mean_std(&raster, &mask, Population::Masked),
        Err(Error::ShapeMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// Statistics helpers
// ---------------------------------------------------------------------------

#[test]
fn test_require_spread() {
    assert!(Statistics::new(1.0, 0.5).require_spread(Population::Global).is_ok());
    assert!(matches!(
        Statistics::new(1.0, 0.0).require_spread(Population::Global),
        Err(Error::DegenerateDistribution { .. })
    ));
    assert!(
        Statistics::new(1.0, f64::NAN)
            .require_spread(Population::Global)
            .is_err()
    );
}

#[test]
fn test_in_whitened_domain() {
    let background = Statistics::new(10.0, 2.0);
    let foreground = Statistics::new(30.0, 8.0);

    let bg_w = background.in_whitened_domain(&background);
    assert_eq!(bg_w, Statistics::new(0.0, 1.0));

    let fg_w = foreground.in_whitened_domain(&background);
    assert_eq!(fg_w, Statistics::new(10.0, 4.0));
}

// ---------------------------------------------------------------------------
// percentile
// ---------------------------------------------------------------------------

#[test]
fn test_percentile_endpoints() {
    let mut values = [5.0f32, 1.0, 4.0, 2.0, 3.0];
    assert_eq!(percentile_f32_mut(&mut values, 0.0), 1.0);
    assert_eq!(percentile_f32_mut(&mut values, 100.0), 5.0);
}

#[test]
fn test_percentile_median_odd() {
    let mut values = [5.0f32, 1.0, 4.0, 2.0, 3.0];
    assert_eq!(percentile_f32_mut(&mut values, 50.0), 3.0);
}

#[test]
fn test_percentile_interpolates() {
    // rank = 0.25 * 3 = 0.75 => 1 + 0.75 * (2 - 1)
    let mut values = [4.0f32, 3.0, 2.0, 1.0];
    assert!((percentile_f32_mut(&mut values, 25.0) - 1.75).abs() < 1e-6);
}

#[test]
fn test_percentile_single_value() {
    let mut values = [42.0f32];
    assert_eq!(percentile_f32_mut(&mut values, 15.0), 42.0);
}

#[test]
fn test_percentile_with_ties() {
    let mut values = [0.0f32, 0.0, 0.0, 0.0, 100.0];
    assert_eq!(percentile_f32_mut(&mut values, 50.0), 0.0);
}
