use crate::math::{point::Point, vector::Vector, FloatNum};

/// rotate `point` by `deg` degrees about `pivot`
pub fn rotate_point(point: &Point, pivot: &Point, deg: FloatNum) -> Point {
    *pivot + (*point - *pivot).rotate_deg(deg)
}

pub fn rotate_polygon<'a>(
    center_point: Point,
    point_iter_mut: impl Iterator<Item = &'a mut Point>,
    deg: FloatNum,
) {
    point_iter_mut.for_each(|point| *point = rotate_point(point, &center_point, deg));
}

pub fn translate_polygon<'a>(
    point_iter_mut: impl Iterator<Item = &'a mut Point>,
    translation: &Vector,
) {
    point_iter_mut.for_each(|point| *point += translation);
}
