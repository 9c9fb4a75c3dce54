use super::{vector::Vector, FloatNum};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub(crate) x: FloatNum,
    pub(crate) y: FloatNum,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        ((self.x() - other.x()).abs() < FloatNum::EPSILON)
            && ((self.y() - other.y()).abs() < FloatNum::EPSILON)
    }
}

impl Point {
    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.x
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.x = reducer(self.x)
    }

    #[inline]
    pub fn set_y(&mut self, reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.y = reducer(self.y)
    }

    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector {
            x: self.x,
            y: self.y,
        }
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> FloatNum {
        (*other - *self).abs()
    }
}

impl From<(FloatNum, FloatNum)> for Point {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Point { x, y }
    }
}

impl From<[FloatNum; 2]> for Point {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (FloatNum, FloatNum) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl Add<Vector> for Point {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        (self.x + rhs.x(), self.y + rhs.y()).into()
    }
}

impl Add<&Vector> for Point {
    type Output = Self;
    fn add(self, rhs: &Vector) -> Self::Output {
        (self.x + rhs.x(), self.y + rhs.y()).into()
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x();
        self.y += rhs.y();
    }
}

impl AddAssign<&Vector> for Point {
    fn add_assign(&mut self, rhs: &Vector) {
        self.x += rhs.x();
        self.y += rhs.y();
    }
}

impl Sub<Vector> for Point {
    type Output = Self;
    fn sub(self, rhs: Vector) -> Self::Output {
        (self.x - rhs.x(), self.y - rhs.y()).into()
    }
}

impl Sub<&Vector> for Point {
    type Output = Self;
    fn sub(self, rhs: &Vector) -> Self::Output {
        (self.x - rhs.x(), self.y - rhs.y()).into()
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x();
        self.y -= rhs.y();
    }
}

impl SubAssign<&Vector> for Point {
    fn sub_assign(&mut self, rhs: &Vector) {
        self.x -= rhs.x();
        self.y -= rhs.y();
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Self::Output {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
