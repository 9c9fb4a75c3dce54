use crate::math::{point::Point, FloatNum};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    pub(crate) fn from_points<'a>(points: impl Iterator<Item = &'a Point>) -> Self {
        let mut min = Point::new(FloatNum::MAX, FloatNum::MAX);
        let mut max = Point::new(FloatNum::MIN, FloatNum::MIN);

        for point in points {
            min.set_x(|x| x.min(point.x()));
            min.set_y(|y| y.min(point.y()));
            max.set_x(|x| x.max(point.x()));
            max.set_y(|y| y.max(point.y()));
        }

        Self { min, max }
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    /// midpoint of the box, the rotation pivot of the owning polygon
    #[inline]
    pub fn center_point(&self) -> Point {
        Point::new(
            (self.min.x() + self.max.x()) / 2.,
            (self.min.y() + self.max.y()) / 2.,
        )
    }

    #[inline]
    pub fn width(&self) -> FloatNum {
        self.max.x() - self.min.x()
    }

    #[inline]
    pub fn height(&self) -> FloatNum {
        self.max.y() - self.min.y()
    }
}
