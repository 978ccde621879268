//! Pixel backends implementing [`DrawingSurface`](crate::draw::DrawingSurface).

pub mod raster;

pub use raster::CairoSurface;
