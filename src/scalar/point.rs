use geo_types::{coord, Coord};
use serde::{Deserialize, Serialize};

/// A single polygon vertex.
///
/// Equality is by value; points carry no identity. The JSON keys are fixed
/// and case-sensitive: a missing `lat` or `lng` is a parse error, unknown
/// keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// The first ordinate carries `lat` and the second `lng` everywhere in this
// crate, so the same mapping applies to geo-types interop.
impl From<Point> for Coord {
    fn from(value: Point) -> Self {
        coord! { x: value.lat, y: value.lng }
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self {
            lat: value.x,
            lng: value.y,
        }
    }
}

impl From<Point> for geo_types::Point {
    fn from(value: Point) -> Self {
        Self::new(value.lat, value.lng)
    }
}

impl From<geo_types::Point> for Point {
    fn from(value: geo_types::Point) -> Self {
        Self {
            lat: value.x(),
            lng: value.y(),
        }
    }
}

/// Build a closed [`geo_types::Polygon`] from a ring of points.
///
/// `Polygon::new` closes the exterior ring itself when the input is open.
pub fn geo_polygon(points: &[Point]) -> geo_types::Polygon {
    geo_types::Polygon::new(points.iter().copied().map(Coord::from).collect(), vec![])
}
