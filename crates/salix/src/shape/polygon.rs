use crate::math::{point::Point, segment::Segment, FloatNum};

use super::{bounding::BoundingBox, errors::ShapeError};

/// local, untransformed outline of a body; implicitly closed (the last
/// vertex connects back to the first), immutable once built
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    bounding_box: BoundingBox,
    center_point: Point,
    bounding_radius: FloatNum,
}

impl Polygon {
    pub fn new(vertices: impl IntoIterator<Item = impl Into<Point>>) -> Result<Self, ShapeError> {
        let vertices: Vec<Point> = vertices.into_iter().map(Into::into).collect();

        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }

        if let Some(point) = vertices.iter().find(|p| p.x() < 0. || p.y() < 0.) {
            return Err(ShapeError::NegativeVertex {
                x: point.x(),
                y: point.y(),
            });
        }

        let bounding_box = BoundingBox::from_points(vertices.iter());
        let center_point = bounding_box.center_point();
        let bounding_radius = vertices
            .iter()
            .map(|vertex| center_point.distance(vertex))
            .fold(0., FloatNum::max);

        Ok(Self {
            vertices,
            bounding_box,
            center_point,
            bounding_radius,
        })
    }

    /// axis-aligned rectangle outline with its top-left corner at (x, y)
    pub fn rect(
        x: FloatNum,
        y: FloatNum,
        width: FloatNum,
        height: FloatNum,
    ) -> Result<Self, ShapeError> {
        Self::new([(x, y), (x, y + height), (x + width, y + height), (x + width, y)])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len()
    }

    /// bounding box midpoint, NOT the centroid; rotation pivots here
    #[inline]
    pub fn center_point(&self) -> Point {
        self.center_point
    }

    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// max center-to-vertex distance; invariant under rotation about the
    /// center, so one circle covers the outline in every orientation
    #[inline]
    pub fn bounding_radius(&self) -> FloatNum {
        self.bounding_radius
    }

    pub fn edge_iter(&self) -> EdgeIter<'_> {
        EdgeIter {
            index: 0,
            vertices: &self.vertices,
        }
    }
}

pub struct EdgeIter<'a> {
    index: usize,
    vertices: &'a [Point],
}

impl Iterator for EdgeIter<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.vertices.len() {
            return None;
        }

        let start_point = self.vertices[self.index];
        let end_point = self.vertices[(self.index + 1) % self.vertices.len()];
        self.index += 1;

        Some((start_point, end_point).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_vertices() {
        let result = Polygon::new([(0., 0.), (10., 0.)]);

        assert_eq!(result.unwrap_err(), ShapeError::TooFewVertices(2));
    }

    #[test]
    fn rejects_negative_vertex() {
        let result = Polygon::new([(0., 0.), (10., 0.), (5., -1.)]);

        assert_eq!(
            result.unwrap_err(),
            ShapeError::NegativeVertex { x: 5., y: -1. }
        );
    }

    #[test]
    fn center_is_bounding_box_midpoint() {
        // centroid of this triangle is (10/3, 10/3); the pivot is not it
        let polygon = Polygon::new([(0., 0.), (10., 0.), (0., 10.)]).unwrap();

        assert_eq!(polygon.center_point(), (5., 5.).into());
    }

    #[test]
    fn bounding_radius_reaches_farthest_vertex() {
        let polygon = Polygon::new([(0., 0.), (10., 0.), (0., 10.)]).unwrap();

        // all three vertices sit sqrt(50) from the pivot (5, 5)
        assert!((polygon.bounding_radius() - 50f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn edge_iter_closes_the_outline() {
        let polygon = Polygon::rect(0., 0., 10., 10.).unwrap();
        let edges: Vec<Segment> = polygon.edge_iter().collect();

        assert_eq!(edges.len(), 4);
        assert_eq!(*edges[3].get_start_point(), (10., 0.).into());
        assert_eq!(*edges[3].get_end_point(), (0., 0.).into());
    }
}
