pub mod bounding;
pub mod errors;
pub mod polygon;
mod raster;
pub mod utils;

pub use bounding::BoundingBox;
pub use errors::ShapeError;
pub use polygon::Polygon;
