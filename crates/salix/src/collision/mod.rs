use crate::math::{point::Point, segment::Segment, vector::Vector, FloatNum};

// stand-in for an unbounded probe; far enough that no body outgrows it
pub(crate) const PROBE_REACH: FloatNum = 9e10;

/// where segment `p` meets segment `q`, endpoints included
///
/// collinear segments report a hit only when an endpoint of `q` falls
/// strictly between the endpoints of `p`; the returned point is then the
/// middle of the shared stretch
pub fn segment_intersection(p: &Segment, q: &Segment) -> Option<Point> {
    let p1 = *p.get_start_point();
    let q1 = *q.get_start_point();

    let r: Vector = p.into();
    let s: Vector = q.into();

    if r * r == 0. {
        return None;
    }

    let qp: Vector = q1 - p1;
    let rxs = r ^ s;
    let qpxr = qp ^ r;

    if rxs == 0. {
        if qpxr != 0. {
            // parallel on distinct lines
            return None;
        }

        // both endpoints of q as parameters along p
        let rr = r * r;
        let t0 = (qp * r) / rr;
        let t1 = t0 + (s * r) / rr;

        let (low, high) = if t0 < t1 { (t0, t1) } else { (t1, t0) };

        let strictly_inside = |t: FloatNum| t > 0. && t < 1.;
        if !strictly_inside(low) && !strictly_inside(high) {
            return None;
        }

        let middle = (low.max(0.) + high.min(1.)) * 0.5;
        return Some(p1 + r * middle);
    }

    let t = (qp ^ s) / rxs;
    let u = qpxr / rxs;

    if (0. ..=1.).contains(&t) && (0. ..=1.).contains(&u) {
        Some(p1 + r * t)
    } else {
        None
    }
}

/// every point where `segment` meets one of `edges`
pub fn intersection_points_with_edges(
    segment: &Segment,
    edges: impl Iterator<Item = Segment>,
) -> Vec<Point> {
    edges
        .filter_map(|edge| segment_intersection(segment, &edge))
        .collect()
}

/// double parity test: probe straight up and straight down, the point is
/// inside only when both probes cross the outline an odd number of times;
/// a probe grazing a vertex miscounts on one side but rarely on both
pub fn is_point_inside_edges(point: impl Into<Point>, edges: &[Segment]) -> bool {
    let point = point.into();

    let up: Segment = (point, Point::new(point.x(), PROBE_REACH)).into();
    let down: Segment = (point, Point::new(point.x(), -PROBE_REACH)).into();

    let crossing_count = |probe: &Segment| {
        edges
            .iter()
            .filter(|edge| segment_intersection(probe, edge).is_some())
            .count()
    };

    crossing_count(&up) & 1 == 1 && crossing_count(&down) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: (f64, f64), end: (f64, f64)) -> Segment {
        (start, end).into()
    }

    #[test]
    fn crossing_segments_meet_once() {
        let p = segment((0., 0.), (10., 10.));
        let q = segment((0., 10.), (10., 0.));

        assert_eq!(segment_intersection(&p, &q), Some((5., 5.).into()));
    }

    #[test]
    fn parallel_segments_never_meet() {
        let p = segment((0., 0.), (10., 0.));
        let q = segment((0., 1.), (10., 1.));

        assert_eq!(segment_intersection(&p, &q), None);
    }

    #[test]
    fn touching_endpoints_count() {
        let p = segment((0., 0.), (10., 0.));
        let q = segment((10., 0.), (10., 5.));

        assert_eq!(segment_intersection(&p, &q), Some((10., 0.).into()));
    }

    #[test]
    fn collinear_overlap_reports_its_middle() {
        let p = segment((0., 0.), (10., 0.));
        let q = segment((5., 0.), (15., 0.));

        // shared stretch runs from 5 to 10
        assert_eq!(segment_intersection(&p, &q), Some((7.5, 0.).into()));
    }

    #[test]
    fn collinear_but_apart_never_meet() {
        let p = segment((0., 0.), (10., 0.));
        let q = segment((11., 0.), (20., 0.));

        assert_eq!(segment_intersection(&p, &q), None);
    }

    #[test]
    fn collinear_cover_is_invisible() {
        // q swallows p whole, so neither endpoint of q lands inside p
        let p = segment((0., 0.), (10., 0.));
        let q = segment((-5., 0.), (15., 0.));

        assert_eq!(segment_intersection(&p, &q), None);
    }

    #[test]
    fn zero_length_query_never_meets() {
        let p = segment((5., 5.), (5., 5.));
        let q = segment((0., 0.), (10., 10.));

        assert_eq!(segment_intersection(&p, &q), None);
    }

    #[test]
    fn zero_length_target_on_the_segment_meets() {
        let p = segment((0., 0.), (10., 0.));
        let q = segment((5., 0.), (5., 0.));

        assert_eq!(segment_intersection(&p, &q), Some((5., 0.).into()));
    }

    fn square_edges() -> Vec<Segment> {
        vec![
            segment((0., 0.), (10., 0.)),
            segment((10., 0.), (10., 10.)),
            segment((10., 10.), (0., 10.)),
            segment((0., 10.), (0., 0.)),
        ]
    }

    #[test]
    fn point_inside_square() {
        assert!(is_point_inside_edges((5., 5.), &square_edges()));
    }

    #[test]
    fn point_beside_square() {
        assert!(!is_point_inside_edges((15., 5.), &square_edges()));
    }

    #[test]
    fn point_on_the_extension_of_an_edge_stays_outside() {
        // shares a line with the bottom edge but sits left of the square
        assert!(!is_point_inside_edges((-5., 0.), &square_edges()));
    }

    #[test]
    fn collects_every_edge_the_probe_crosses() {
        let probe = segment((-5., 5.), (15., 5.));
        let points = intersection_points_with_edges(&probe, square_edges().into_iter());

        assert_eq!(points, vec![(10., 5.).into(), (0., 5.).into()]);
    }
}
