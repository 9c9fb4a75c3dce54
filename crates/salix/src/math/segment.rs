use super::point::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start_point: Point,
    end_point: Point,
}

impl Segment {
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    pub fn get_start_point(&self) -> &Point {
        &self.start_point
    }

    pub fn get_end_point(&self) -> &Point {
        &self.end_point
    }
}

impl<P: Into<Point>> From<(P, P)> for Segment {
    fn from((start_point, end_point): (P, P)) -> Self {
        Segment {
            start_point: start_point.into(),
            end_point: end_point.into(),
        }
    }
}
