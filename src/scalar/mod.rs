//! Scalar value types.

mod point;

pub use point::{geo_polygon, Point};
