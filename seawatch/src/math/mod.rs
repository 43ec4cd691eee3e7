//! Numeric helpers: bounding boxes, statistics, normal quantiles.

mod bbox;
pub mod normal;
pub mod statistics;

pub use bbox::BBox;
pub use normal::{inverse_normal_cdf, normal_cdf};
pub use statistics::{Statistics, masked_mean_std, mean_std, percentile_f32_mut};
