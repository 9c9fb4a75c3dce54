use crate::collision::{intersection_points_with_edges, segment_intersection};
use crate::math::{point::Point, segment::Segment, vector::Vector, FloatNum};
use crate::shape::{utils::rotate_point, BoundingBox, Polygon};

pub type ID = u32;

/// pending step of a mover, consumed by the next world tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    translation: Vector,
    rotation: FloatNum,
}

impl From<(Vector, FloatNum)> for Transform {
    fn from((translation, rotation): (Vector, FloatNum)) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

impl Transform {
    #[inline]
    pub fn translation(&self) -> Vector {
        self.translation
    }

    #[inline]
    pub fn rotation(&self) -> FloatNum {
        self.rotation
    }

    #[inline]
    pub fn set_translation(&mut self, reducer: impl FnOnce(Vector) -> Vector) {
        self.translation = reducer(self.translation);
    }

    #[inline]
    pub fn set_rotation(&mut self, reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.rotation = reducer(self.rotation);
    }

    pub fn split(&self) -> (Vector, FloatNum) {
        (self.translation, self.rotation)
    }

    pub fn reset(&mut self) {
        self.translation = Default::default();
        self.rotation = 0.;
    }

    pub fn is_zero(&self) -> bool {
        self.translation.is_zero() && self.rotation == 0.
    }
}

/// how a body takes part in the tick
#[derive(Clone, Debug)]
pub enum Kind {
    /// carries a pending transform, integrated then collision tested every tick
    Mover(Transform),
    /// never moves on its own; movers come to rest against it
    Wall,
}

/// a polygon outline placed in the world
///
/// `rotation` is in degrees, clockwise on the y-down plane, and pivots at
/// the outline's bounding box center; `position` then shifts the rotated
/// outline into place
pub struct Body {
    id: ID,
    shape: Polygon,
    position: Point,
    rotation: FloatNum,
    kind: Kind,
    is_active: bool,
}

impl Clone for Body {
    fn clone(&self) -> Self {
        // clone body will return body with id unset
        Self {
            id: 0,
            shape: self.shape.clone(),
            position: self.position,
            rotation: self.rotation,
            kind: self.kind.clone(),
            is_active: self.is_active,
        }
    }
}

impl Body {
    pub(crate) fn inject_id(&mut self, id: ID) {
        self.id = id
    }

    #[inline]
    pub fn id(&self) -> ID {
        self.id
    }

    #[inline]
    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, reducer: impl FnOnce(Point) -> Point) {
        self.position = reducer(self.position);
    }

    #[inline]
    pub fn rotation(&self) -> FloatNum {
        self.rotation
    }

    #[inline]
    pub fn set_rotation(&mut self, reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.rotation = reducer(self.rotation);
    }

    #[inline]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    #[inline]
    pub fn is_mover(&self) -> bool {
        matches!(self.kind, Kind::Mover(_))
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[inline]
    pub fn set_active(&mut self, reducer: impl FnOnce(bool) -> bool) {
        self.is_active = reducer(self.is_active);
    }

    /// pending translation of the next tick; always zero for walls
    pub fn motion(&self) -> Vector {
        match &self.kind {
            Kind::Mover(pending) => pending.translation(),
            Kind::Wall => Default::default(),
        }
    }

    /// pending rotation of the next tick, degrees; always zero for walls
    pub fn rotation_rate(&self) -> FloatNum {
        match &self.kind {
            Kind::Mover(pending) => pending.rotation(),
            Kind::Wall => 0.,
        }
    }

    /// walls ignore this
    pub fn set_motion(&mut self, reducer: impl FnOnce(Vector) -> Vector) {
        if let Kind::Mover(pending) = &mut self.kind {
            pending.set_translation(reducer);
        }
    }

    /// walls ignore this
    pub fn set_rotation_rate(&mut self, reducer: impl FnOnce(FloatNum) -> FloatNum) {
        if let Kind::Mover(pending) = &mut self.kind {
            pending.set_rotation(reducer);
        }
    }

    /// drop whatever step was pending
    pub fn halt(&mut self) {
        if let Kind::Mover(pending) = &mut self.kind {
            pending.reset();
        }
    }

    /// rotation pivot in world coordinates
    #[inline]
    pub fn center_point(&self) -> Point {
        self.position + self.shape.center_point().to_vector()
    }

    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox {
        self.shape.bounding_box()
    }

    #[inline]
    pub fn bounding_radius(&self) -> FloatNum {
        self.shape.bounding_radius()
    }

    pub fn to_world_point(&self, local: Point) -> Point {
        rotate_point(&local, &self.shape.center_point(), self.rotation) + self.position.to_vector()
    }

    /// outline vertices in world coordinates, recomputed on every call
    pub fn world_points(&self) -> Vec<Point> {
        self.shape
            .vertices()
            .iter()
            .map(|vertex| self.to_world_point(*vertex))
            .collect()
    }

    /// outline edges in world coordinates, closing edge included
    pub fn world_edges(&self) -> Vec<Segment> {
        let points = self.world_points();

        (0..points.len())
            .map(|i| (points[i], points[(i + 1) % points.len()]).into())
            .collect()
    }

    /// interior spans of the untransformed outline; map them through
    /// [`Self::to_world_point`] to place them
    pub fn fill_spans(&self) -> Vec<Segment> {
        self.shape.fill_spans()
    }

    pub fn contains_point(&self, point: impl Into<Point>) -> bool {
        crate::collision::is_point_inside_edges(point, &self.world_edges())
    }

    pub fn contact_points_with_segment(&self, segment: &Segment) -> Vec<Point> {
        intersection_points_with_edges(segment, self.world_edges().into_iter())
    }

    pub fn collides_with_segment(&self, segment: &Segment) -> bool {
        self.world_edges()
            .into_iter()
            .any(|edge| segment_intersection(segment, &edge).is_some())
    }

    /// every point where the outlines of the two bodies meet
    pub fn contact_points_with(&self, other: &Body) -> Vec<Point> {
        let other_edges = other.world_edges();

        self.world_edges()
            .iter()
            .flat_map(|edge| intersection_points_with_edges(edge, other_edges.iter().copied()))
            .collect()
    }

    pub fn collides_with(&self, other: &Body) -> bool {
        let other_edges = other.world_edges();

        self.world_edges()
            .iter()
            .any(|edge| {
                other_edges
                    .iter()
                    .any(|other_edge| segment_intersection(edge, other_edge).is_some())
            })
    }

    /// circle reject: the disk around each body's pivot covers the whole
    /// outline in any orientation, so two bodies whose disks stay apart
    /// cannot touch
    pub fn bounding_circles_overlap(&self, other: &Body, margin: FloatNum) -> bool {
        let pivot_gap = self.center_point().distance(&other.center_point());

        pivot_gap < self.bounding_radius() + other.bounding_radius() + margin
    }

    /// tentatively apply the pending transform; the caller decides whether
    /// the step stands or gets rolled back
    pub(crate) fn integrate_step(&mut self) -> Option<Transform> {
        if !self.is_active {
            return None;
        }

        let pending = match &self.kind {
            Kind::Mover(pending) if !pending.is_zero() => pending.clone(),
            _ => return None,
        };

        self.position += pending.translation();
        self.rotation += pending.rotation();

        Some(pending)
    }

    /// undo one integrated step and drop the intent behind it
    pub(crate) fn rollback_step(&mut self, delta: &Transform) {
        self.position -= delta.translation();
        self.rotation -= delta.rotation();
        self.halt();
    }
}

pub struct BodyBuilder {
    shape: Polygon,
    position: Point,
    rotation: FloatNum,
    kind: Kind,
    is_active: bool,
}

impl BodyBuilder {
    pub fn new(shape: Polygon) -> Self {
        Self {
            shape,
            position: Default::default(),
            rotation: 0.,
            kind: Kind::Wall,
            is_active: true,
        }
    }

    pub fn position(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    pub fn rotation(mut self, rotation: FloatNum) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn mover(self) -> Self {
        self.kind(Kind::Mover(Default::default()))
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl From<BodyBuilder> for Body {
    fn from(builder: BodyBuilder) -> Self {
        Self {
            id: 0,
            shape: builder.shape,
            position: builder.position,
            rotation: builder.rotation,
            kind: builder.kind,
            is_active: builder.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square_body() -> Body {
        BodyBuilder::new(Polygon::rect(0., 0., 10., 10.).unwrap()).into()
    }

    fn square_mover() -> Body {
        BodyBuilder::new(Polygon::rect(0., 0., 10., 10.).unwrap())
            .mover()
            .into()
    }

    #[test]
    fn world_points_rotate_about_the_pivot() {
        let mut body = square_mover();
        body.set_position(|_| (0., 2.05).into());
        body.set_rotation(|_| 45.);

        let points = body.world_points();
        // pivot lands at (5, 7.05); at 45 degrees the vertex diagonals
        // turn axis aligned, sqrt(50) up, left, down and right of it
        let reach = 50f64.sqrt();
        let expected = [
            (5., 7.05 - reach),
            (5. - reach, 7.05),
            (5., 7.05 + reach),
            (5. + reach, 7.05),
        ];

        for (point, (x, y)) in points.iter().zip(expected) {
            assert_relative_eq!(point.x(), x, epsilon = 1e-9);
            assert_relative_eq!(point.y(), y, epsilon = 1e-9);
        }
    }

    #[test]
    fn integrate_applies_and_rollback_undoes_exactly() {
        let mut body = square_mover();
        body.set_motion(|_| (1., 0.).into());
        body.set_rotation_rate(|_| 3.);

        let delta = body.integrate_step().unwrap();
        assert_eq!(body.position(), (1., 0.).into());
        assert_eq!(body.rotation(), 3.);

        body.rollback_step(&delta);
        assert_eq!(body.position(), (0., 0.).into());
        assert_eq!(body.rotation(), 0.);
        assert!(body.motion().is_zero());
        assert_eq!(body.rotation_rate(), 0.);
    }

    #[test]
    fn wall_never_integrates() {
        let mut body = square_body();
        body.set_motion(|_| (1., 0.).into());

        assert!(body.motion().is_zero());
        assert!(body.integrate_step().is_none());
    }

    #[test]
    fn idle_mover_never_integrates() {
        let mut body = square_mover();

        assert!(body.integrate_step().is_none());
        assert_eq!(body.position(), (0., 0.).into());
    }

    #[test]
    fn inactive_mover_never_integrates() {
        let mut body = square_mover();
        body.set_motion(|_| (1., 0.).into());
        body.set_active(|_| false);

        assert!(body.integrate_step().is_none());
    }

    #[test]
    fn clone_drops_the_id() {
        let mut body = square_body();
        body.inject_id(7);

        assert_eq!(body.clone().id(), 0);
    }

    #[test]
    fn contains_point_follows_the_position() {
        let mut body = square_body();
        body.set_position(|_| (100., 100.).into());

        assert!(body.contains_point((105., 105.)));
        assert!(!body.contains_point((95., 95.)));
    }

    #[test]
    fn contact_points_against_a_crossing_segment() {
        let body = square_body();
        let probe: Segment = ((-5., 5.), (15., 5.)).into();

        let points = body.contact_points_with_segment(&probe);
        assert_eq!(points, vec![(0., 5.).into(), (10., 5.).into()]);
        assert!(body.collides_with_segment(&probe));
    }

    #[test]
    fn circle_reject_separates_distant_bodies() {
        let a = square_body();
        let mut b = square_body();
        b.set_position(|_| (0., 20.).into());

        // pivots (5, 5) and (5, 25) sit 20 apart, reach is 2 sqrt(50) + 1
        assert!(!a.bounding_circles_overlap(&b, 1.));

        b.set_position(|_| (5., 5.).into());
        assert!(a.bounding_circles_overlap(&b, 1.));
    }

    #[test]
    fn overlapping_squares_collide() {
        let a = square_body();
        let mut b = square_body();
        b.set_position(|_| (5., 5.).into());

        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
        assert!(!a.contact_points_with(&b).is_empty());
    }
}
