//! Synthetic scenes shared by the integration tests.

use rand::prelude::*;
use seawatch::{BBox, Config, Connectivity, Raster};

/// Low-amplitude Rayleigh speckle with blocks of `value` injected.
pub fn scene(rows: usize, cols: usize, blocks: &[BBox], value: f32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    Raster::from_fn(rows, cols, |r, c| {
        let u: f32 = rng.random_range(1e-10f32..1.0);
        let speckle = (-2.0 * u.ln()).sqrt();
        if blocks.iter().any(|b| b.contains(r, c)) {
            value
        } else {
            speckle
        }
    })
    .unwrap()
}

/// Cleanup parameters scaled to blocks of a few dozen pixels.
pub fn small_block_config() -> Config {
    Config {
        background_percentile: 50.0,
        target_far: 0.1,
        min_object_size: 10,
        hole_area_threshold: 10,
        proximity_distance: 0,
        max_region_area: 16_000,
        connectivity: Connectivity::Eight,
    }
}
