//! Raster and mask containers shared by every pipeline stage.

mod mask;
mod raster;

pub use mask::Mask;
pub use raster::Raster;
