//! Synthetic SAR scenes for unit tests.

use rand::prelude::*;

use crate::common::Raster;
use crate::math::BBox;

/// Rayleigh-distributed amplitude speckle with unit scale, seeded.
pub fn speckle_scene(rows: usize, cols: usize, seed: u64) -> Raster {
    speckle_with_scale(rows, cols, 1.0, seed)
}

/// Rayleigh-distributed amplitude speckle with scale `sigma`.
pub fn speckle_with_scale(rows: usize, cols: usize, sigma: f32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    Raster::from_fn(rows, cols, |_, _| {
        let u: f32 = rng.random_range(1e-10f32..1.0);
        sigma * (-2.0 * u.ln()).sqrt()
    })
    .unwrap()
}

/// Copy of `raster` with every box set to `value`.
pub fn with_blocks(raster: &Raster, blocks: &[BBox], value: f32) -> Raster {
    Raster::from_fn(raster.rows(), raster.cols(), |r, c| {
        if blocks.iter().any(|b| b.contains(r, c)) {
            value
        } else {
            raster.get(r, c)
        }
    })
    .unwrap()
}
