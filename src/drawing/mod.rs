//! Glyph rasterization
//!
//! - [`glyph`] - Triforce geometry and the inside/outside predicate
//! - [`mode`] - Rendering modes (solid, outline, invert)
//! - [`raster`] - Row-major brightness grid for one mode

pub mod glyph;
pub mod mode;
pub mod raster;

pub use glyph::{Triangle, Triforce};
pub use mode::RenderMode;
pub use raster::Raster;
