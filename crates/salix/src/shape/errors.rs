use thiserror::Error;

use crate::math::FloatNum;

/// construction is the only fallible path in the crate; every query on a
/// built polygon is total
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex ({x}, {y}) leaves the non-negative local coordinate space")]
    NegativeVertex { x: FloatNum, y: FloatNum },
}
