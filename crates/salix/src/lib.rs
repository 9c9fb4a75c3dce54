pub mod body;
pub mod collision;
pub mod math;
pub mod shape;
pub mod world;

pub mod prelude {
    pub use super::body::{Body, BodyBuilder, Kind, Transform, ID};

    pub use super::collision::{
        intersection_points_with_edges, is_point_inside_edges, segment_intersection,
    };
    pub use super::math::{point::Point, segment::Segment, vector::Vector, FloatNum};
    pub use super::shape::{BoundingBox, Polygon, ShapeError};

    pub use super::world::{BodyEvent, Context, World};
}
