use crate::collision::{segment_intersection, PROBE_REACH};
use crate::math::{segment::Segment, vector::Vector, FloatNum};

use super::polygon::Polygon;

impl Polygon {
    /// horizontal interior spans of the local outline, one integer row at a
    /// time from the bottom of the bounding box to the top (top exclusive);
    /// a row with an odd crossing count keeps the leftover as a point span
    pub fn fill_spans(&self) -> Vec<Segment> {
        let min_row = self.bounding_box().min().y().floor() as i64;
        let max_row = self.bounding_box().max().y().ceil() as i64;

        let mut spans: Vec<Segment> = Vec::with_capacity((max_row - min_row).max(0) as usize);

        for row in min_row..max_row {
            let y = row as FloatNum;
            let probe: Segment = ((-PROBE_REACH, y), (PROBE_REACH, y)).into();

            // an edge lying along the probe would register as one fat
            // crossing and flip the parity of the whole row
            let mut crossing_xs: Vec<FloatNum> = self
                .edge_iter()
                .filter(|edge| Vector::from(edge).y() != 0.)
                .filter_map(|edge| segment_intersection(&probe, &edge))
                .map(|point| point.x())
                .collect();

            crossing_xs.sort_by(|a, b| a.total_cmp(b));

            let mut pairs = crossing_xs.chunks_exact(2);
            for pair in &mut pairs {
                spans.push(((pair[0], y), (pair[1], y)).into());
            }
            if let [x] = pairs.remainder() {
                spans.push(((*x, y), (*x, y)).into());
            }
        }

        spans
    }
}
